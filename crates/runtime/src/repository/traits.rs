//! Repository contract for saving and loading games.

use super::{GameId, GameRecord, Result, Versioned};

/// Versioned store of game records.
///
/// Every write after the first goes through [`compare_and_swap`], which only
/// succeeds when the caller saw the latest version. Callers re-read and retry
/// on [`RepositoryError::VersionConflict`].
///
/// [`compare_and_swap`]: GameRepository::compare_and_swap
/// [`RepositoryError::VersionConflict`]: super::RepositoryError::VersionConflict
pub trait GameRepository: Send + Sync {
    /// Load a game and its current version.
    fn get(&self, id: &GameId) -> Result<Option<Versioned<GameRecord>>>;

    /// Store a new game. Fails with `AlreadyExists` if the id is taken.
    ///
    /// Returns the initial version.
    fn insert(&self, record: &GameRecord) -> Result<u64>;

    /// Replace the game only if it is still at `expected_version`.
    ///
    /// Returns the new version.
    fn compare_and_swap(&self, expected_version: u64, record: &GameRecord) -> Result<u64>;

    /// Delete a game. Returns whether it existed.
    fn delete(&self, id: &GameId) -> Result<bool>;

    /// List all stored game ids, sorted.
    fn list_ids(&self) -> Result<Vec<GameId>>;

    /// Check if a game exists.
    fn exists(&self, id: &GameId) -> bool {
        matches!(self.get(id), Ok(Some(_)))
    }
}
