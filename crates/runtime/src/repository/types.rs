//! Persisted record shapes shared by every repository backend.

use std::fmt;

use chrono::{DateTime, Utc};
use ludo_core::Game;
use serde::{Deserialize, Serialize};

/// Identifier of a persisted game.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random 16-hex-digit id.
    pub fn generate() -> Self {
        Self(format!("{:016x}", rand::random::<u64>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Safe to use as a file name component.
    pub fn is_path_safe(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The persisted game: the engine state plus storage metadata.
///
/// Serializes flat, so the JSON carries `id`, `createdAt` and every game
/// field side by side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub id: GameId,
    #[serde(flatten)]
    pub game: Game,
    pub created_at: DateTime<Utc>,
}

impl GameRecord {
    pub fn new(id: GameId, game: Game) -> Self {
        Self {
            id,
            game,
            created_at: Utc::now(),
        }
    }

    /// Same record carrying a different game state.
    pub fn with_game(&self, game: Game) -> Self {
        Self {
            id: self.id.clone(),
            game,
            created_at: self.created_at,
        }
    }
}

/// A value read together with the version it was stored under.
///
/// Versions start at 1 on insert and grow by one on every successful
/// compare-and-swap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioned<T> {
    pub version: u64,
    pub value: T,
}

impl<T> Versioned<T> {
    pub fn new(version: u64, value: T) -> Self {
        Self { version, value }
    }
}
