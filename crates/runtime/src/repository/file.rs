//! File-based GameRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::repository::{
    GameId, GameRecord, GameRepository, RepositoryError, Result, Versioned,
};

/// On-disk envelope: the record plus its version.
#[derive(Serialize, Deserialize)]
struct StoredGame {
    version: u64,
    record: GameRecord,
}

/// File-based implementation of GameRepository.
///
/// Each game lives in `game_{id}.json`. Writes go to a temp file that is
/// renamed over the target. Version checks and writes are serialized by a
/// per-repository mutex, so one process may share a repository across tasks;
/// separate processes writing the same directory are not coordinated.
pub struct FileGameRepository {
    base_dir: PathBuf,
    commit_lock: Mutex<()>,
}

impl FileGameRepository {
    /// Create a new file-based game repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            base_dir,
            commit_lock: Mutex::new(()),
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn game_path(&self, id: &GameId) -> Result<PathBuf> {
        if !id.is_path_safe() {
            return Err(RepositoryError::CorruptedData(format!(
                "game id {id:?} is not a valid file name"
            )));
        }
        Ok(self.base_dir.join(format!("game_{}.json", id)))
    }

    fn read(&self, path: &Path) -> Result<Option<StoredGame>> {
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(path).map_err(RepositoryError::Io)?;
        let stored: StoredGame = serde_json::from_slice(&bytes)?;
        Ok(Some(stored))
    }

    fn write(&self, path: &Path, stored: &StoredGame) -> Result<()> {
        let temp_path = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(stored)?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, path).map_err(RepositoryError::Io)?;
        Ok(())
    }
}

impl GameRepository for FileGameRepository {
    fn get(&self, id: &GameId) -> Result<Option<Versioned<GameRecord>>> {
        let path = self.game_path(id)?;
        let stored = self.read(&path)?;

        Ok(stored.map(|stored| Versioned::new(stored.version, stored.record)))
    }

    fn insert(&self, record: &GameRecord) -> Result<u64> {
        let path = self.game_path(&record.id)?;
        let _guard = self
            .commit_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if path.exists() {
            return Err(RepositoryError::AlreadyExists(record.id.clone()));
        }
        self.write(
            &path,
            &StoredGame {
                version: 1,
                record: record.clone(),
            },
        )?;

        tracing::debug!("Inserted game[{}] at {}", record.id, path.display());
        Ok(1)
    }

    fn compare_and_swap(&self, expected_version: u64, record: &GameRecord) -> Result<u64> {
        let path = self.game_path(&record.id)?;
        let _guard = self
            .commit_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        let current = self
            .read(&path)?
            .ok_or_else(|| RepositoryError::NotFound(record.id.clone()))?;
        if current.version != expected_version {
            return Err(RepositoryError::VersionConflict {
                id: record.id.clone(),
                expected: expected_version,
                actual: current.version,
            });
        }

        let version = current.version + 1;
        self.write(
            &path,
            &StoredGame {
                version,
                record: record.clone(),
            },
        )?;

        tracing::debug!("Saved game[{}] v{}", record.id, version);
        Ok(version)
    }

    fn delete(&self, id: &GameId) -> Result<bool> {
        let path = self.game_path(id)?;
        let _guard = self
            .commit_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(RepositoryError::Io)?;
        tracing::debug!("Deleted game[{}]", id);
        Ok(true)
    }

    fn list_ids(&self) -> Result<Vec<GameId>> {
        let mut ids = Vec::new();

        let entries = fs::read_dir(&self.base_dir).map_err(RepositoryError::Io)?;

        for entry in entries {
            let entry = entry.map_err(RepositoryError::Io)?;
            let path = entry.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename
                    .strip_prefix("game_")
                    .and_then(|s| s.strip_suffix(".json"))
            {
                ids.push(GameId::from(id));
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}
