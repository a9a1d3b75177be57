//! Repository layer for persisted games.
//!
//! Repositories store [`GameRecord`]s under a version stamp and only accept a
//! write from a caller that saw the latest version. Storage is swappable: the
//! session layer only sees [`GameRepository`].

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileGameRepository;
pub use memory::InMemoryGameRepo;
pub use traits::GameRepository;
pub use types::{GameId, GameRecord, Versioned};
