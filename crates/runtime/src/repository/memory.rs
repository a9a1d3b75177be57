//! In-memory GameRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::repository::{
    GameId, GameRecord, GameRepository, RepositoryError, Result, Versioned,
};

/// In-memory implementation of GameRepository.
///
/// The write lock is held across the version check and the swap, so
/// concurrent writers of the same game serialize here.
pub struct InMemoryGameRepo {
    games: RwLock<HashMap<GameId, Versioned<GameRecord>>>,
}

impl InMemoryGameRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryGameRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRepository for InMemoryGameRepo {
    fn get(&self, id: &GameId) -> Result<Option<Versioned<GameRecord>>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(id).cloned())
    }

    fn insert(&self, record: &GameRecord) -> Result<u64> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        if games.contains_key(&record.id) {
            return Err(RepositoryError::AlreadyExists(record.id.clone()));
        }
        games.insert(record.id.clone(), Versioned::new(1, record.clone()));
        Ok(1)
    }

    fn compare_and_swap(&self, expected_version: u64, record: &GameRecord) -> Result<u64> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let stored = games
            .get_mut(&record.id)
            .ok_or_else(|| RepositoryError::NotFound(record.id.clone()))?;

        if stored.version != expected_version {
            return Err(RepositoryError::VersionConflict {
                id: record.id.clone(),
                expected: expected_version,
                actual: stored.version,
            });
        }

        stored.version += 1;
        stored.value = record.clone();
        Ok(stored.version)
    }

    fn delete(&self, id: &GameId) -> Result<bool> {
        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.remove(id).is_some())
    }

    fn list_ids(&self) -> Result<Vec<GameId>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<GameId> = games.keys().cloned().collect();
        ids.sort_unstable();
        Ok(ids)
    }
}
