//! Temporal-phase and join-eligibility evaluation for events.
//!
//! Pure value-in/value-out: a snapshot of an event's schedule, lifecycle
//! flags, join window, and capacity, plus one reference instant, produce the
//! event's phase and a single join status. No I/O, no ambient clock, no
//! state between calls. The same `(snapshot, now)` pair always evaluates to
//! the same output, on the server or the client.
//!
//! Callers own re-evaluation cadence (countdown re-renders, poll refreshes)
//! and must feed one shared `now` per evaluation so phase and joinability
//! never straddle a window boundary.

pub mod engine;
pub mod snapshot;

pub use engine::{evaluate, next_transition_at};
pub use snapshot::EventSnapshot;
