//! Public session API surface.
//!
//! Gathers the types returned to consumers of the runtime crate so the session
//! and repository modules can stay focused on orchestration and storage.

pub mod errors;
pub mod outcome;

pub use errors::{Result, SessionError};
pub use outcome::{MoveOutcome, RollOutcome};
