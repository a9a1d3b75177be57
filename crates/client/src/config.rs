//! Simulator configuration and loaders.
use std::env;

use ludo_core::GameSettings;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Seated players, clamped to 2..=4.
    pub players: usize,
    /// Seeds both the dice and the token picker. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Safety stop for the game loop.
    pub max_rolls: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            players: GameSettings::MAX_PLAYERS,
            seed: None,
            max_rolls: 10_000,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `LUDO_PLAYERS` - Number of players (default: 4)
    /// - `LUDO_SEED` - Seed for reproducible games (default: random)
    /// - `LUDO_MAX_ROLLS` - Rolls before the simulator gives up (default: 10000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(players) = read_env::<usize>("LUDO_PLAYERS") {
            config.players = players.clamp(GameSettings::MIN_PLAYERS, GameSettings::MAX_PLAYERS);
        }

        config.seed = read_env::<u64>("LUDO_SEED");

        if let Some(max_rolls) = read_env::<usize>("LUDO_MAX_ROLLS") {
            config.max_rolls = max_rolls.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
