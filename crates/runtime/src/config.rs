//! Session runtime configuration and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use ludo_core::GameSettings;

/// Settings shared by the session service and its repositories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Read-validate-write cycles tried before giving up on a contended game.
    pub max_commit_attempts: u32,
    /// Base delay between attempts; attempt `n` waits `n * retry_backoff`.
    pub retry_backoff: Duration,
    /// Settings stamped on newly created games.
    pub game: GameSettings,
    /// Directory for the file repository. `None` keeps games in memory.
    pub data_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_commit_attempts: 5,
            retry_backoff: Duration::from_millis(5),
            game: GameSettings::default(),
            data_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LUDO_MAX_COMMIT_ATTEMPTS` - Commit attempts per operation (default: 5)
    /// - `LUDO_RETRY_BACKOFF_MS` - Base retry delay in milliseconds (default: 5)
    /// - `LUDO_STAR_SHORTCUTS` - Enable star shortcuts for new games (default: false)
    /// - `LUDO_DATA_DIR` - Persist games as JSON under this directory; an empty
    ///   value selects [`default_data_dir`] (default: unset, in memory)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(attempts) = read_env::<u32>("LUDO_MAX_COMMIT_ATTEMPTS") {
            config.max_commit_attempts = attempts.max(1);
        }

        if let Some(millis) = read_env::<u64>("LUDO_RETRY_BACKOFF_MS") {
            config.retry_backoff = Duration::from_millis(millis);
        }

        if let Some(enabled) = read_env_bool("LUDO_STAR_SHORTCUTS") {
            config.game = GameSettings::with_star_shortcuts(enabled);
        }

        config.data_dir = env::var("LUDO_DATA_DIR").ok().map(|dir| {
            if dir.trim().is_empty() {
                default_data_dir()
            } else {
                PathBuf::from(dir)
            }
        });

        config
    }
}

/// Get the platform-specific data directory for saved games
///
/// - Linux: `~/.local/share/ludo` (or `$XDG_DATA_HOME/ludo`)
/// - macOS: `~/Library/Application Support/ludo`
/// - Fallback: `./save_data`
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "ludo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_games_in_memory() {
        let config = RuntimeConfig::default();
        assert_eq!(config.max_commit_attempts, 5);
        assert_eq!(config.retry_backoff, Duration::from_millis(5));
        assert!(!config.game.star_shortcuts);
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn default_data_dir_ends_in_project_name() {
        let dir = default_data_dir();
        assert!(dir.ends_with("ludo") || dir.ends_with("save_data"));
    }
}
