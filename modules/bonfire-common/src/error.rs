use thiserror::Error;

#[derive(Error, Debug)]
pub enum BonfireError {
    #[error("Validation error: {0}")]
    Validation(String),
}
