pub mod error;
pub mod types;

pub use error::BonfireError;
pub use types::*;
