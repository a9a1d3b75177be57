//! Session service: the only writer of persisted games.
//!
//! Every operation is one read-validate-write cycle against the repository.
//! The cycle reads the game with its version, runs the engine against exactly
//! that snapshot and commits with a compare-and-swap. A conflicting commit
//! re-runs the whole cycle after a short backoff, up to
//! [`RuntimeConfig::max_commit_attempts`] times.

use std::sync::Arc;

use ludo_core::{
    ExecuteError, Game, GameSettings, Player, PlayerId, TokenIndex, TransitionPhase,
    TransitionPhaseError, apply_move, apply_roll, is_game_over, validate_roll,
};

use crate::api::{MoveOutcome, Result, RollOutcome, SessionError};
use crate::config::RuntimeConfig;
use crate::oracle::{DiceOracle, RandomDice};
use crate::repository::{
    FileGameRepository, GameId, GameRecord, GameRepository, InMemoryGameRepo, RepositoryError,
};

/// Ids tried before `create_game` gives up on collisions.
const CREATE_ATTEMPTS: usize = 8;

/// Cloneable handle over a repository and a dice oracle.
///
/// Holds no game state of its own; clones share the same repository.
#[derive(Clone)]
pub struct SessionService {
    repo: Arc<dyn GameRepository>,
    dice: Arc<dyn DiceOracle>,
    config: RuntimeConfig,
}

impl SessionService {
    pub fn new(
        repo: Arc<dyn GameRepository>,
        dice: Arc<dyn DiceOracle>,
        config: RuntimeConfig,
    ) -> Self {
        Self { repo, dice, config }
    }

    /// Builds the repository `config` asks for: JSON files under
    /// `data_dir` when set, memory otherwise.
    pub fn from_config(config: RuntimeConfig, dice: Arc<dyn DiceOracle>) -> Result<Self> {
        let repo: Arc<dyn GameRepository> = match &config.data_dir {
            Some(dir) => {
                tracing::info!("Persisting games under {}", dir.display());
                Arc::new(FileGameRepository::new(dir)?)
            }
            None => Arc::new(InMemoryGameRepo::new()),
        };
        Ok(Self::new(repo, dice, config))
    }

    /// In-memory games with OS-seeded dice.
    pub fn in_memory(config: RuntimeConfig) -> Self {
        Self::new(
            Arc::new(InMemoryGameRepo::new()),
            Arc::new(RandomDice::new()),
            config,
        )
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn repository(&self) -> &Arc<dyn GameRepository> {
        &self.repo
    }

    /// Opens a lobby with `host` in seat 0, using the configured settings.
    pub fn create_game(
        &self,
        host: impl Into<PlayerId>,
        host_name: impl Into<String>,
    ) -> Result<GameRecord> {
        self.create_game_with(host, host_name, self.config.game)
    }

    /// Opens a lobby with explicit settings. Settings never change afterwards.
    pub fn create_game_with(
        &self,
        host: impl Into<PlayerId>,
        host_name: impl Into<String>,
        settings: GameSettings,
    ) -> Result<GameRecord> {
        let game = Game::new(host, host_name, settings);

        let mut last_id = GameId::generate();
        for _ in 0..CREATE_ATTEMPTS {
            let record = GameRecord::new(last_id.clone(), game.clone());
            match self.repo.insert(&record) {
                Ok(_) => {
                    tracing::info!(
                        "Created game[{}] hosted by {} (star shortcuts: {})",
                        record.id,
                        game.players[0].id,
                        settings.star_shortcuts
                    );
                    return Ok(record);
                }
                Err(RepositoryError::AlreadyExists(_)) => last_id = GameId::generate(),
                Err(err) => return Err(err.into()),
            }
        }
        Err(RepositoryError::AlreadyExists(last_id).into())
    }

    /// Seats `player` with the next free color.
    pub async fn join_game(
        &self,
        id: &GameId,
        player: impl Into<PlayerId>,
        name: impl Into<String>,
    ) -> Result<Player> {
        let player = player.into();
        let name = name.into();

        let seated = self
            .commit(id, "join", |game| {
                let mut next = game.clone();
                let seated = next.seat_player(player.clone(), name.clone())?.clone();
                Ok((next, seated))
            })
            .await?;

        tracing::info!("Player {} joined game[{}] as {}", seated.id, id, seated.color);
        Ok(seated)
    }

    /// Closes the lobby. Only the host may start. Returns the new action id.
    pub async fn start_game(&self, id: &GameId, requester: &PlayerId) -> Result<u64> {
        let action_id = self
            .commit(id, "start", |game| {
                let is_host = game.players.first().is_some_and(|host| &host.id == requester);
                if !is_host {
                    return Err(SessionError::NotHost(requester.clone()));
                }
                let mut next = game.clone();
                next.start()?;
                let action_id = next.last_action_id;
                Ok((next, action_id))
            })
            .await?;

        tracing::info!("Game[{}] started by {}", id, requester);
        Ok(action_id)
    }

    /// Rolls for `player` using the trusted dice oracle.
    ///
    /// The die is drawn only after the roll is known to be legal, and is drawn
    /// again if the commit has to be retried.
    pub async fn roll(&self, id: &GameId, player: &PlayerId) -> Result<RollOutcome> {
        let outcome = self
            .commit(id, "roll", |game| {
                validate_roll(game, player).map_err(|err| {
                    ExecuteError::Roll(TransitionPhaseError::new(TransitionPhase::PreValidate, err))
                })?;
                let value = self.dice.roll()?;
                let applied = apply_roll(game, player, value)?;
                Ok((applied.game, RollOutcome::new(applied.result, applied.action_id)))
            })
            .await?;

        if outcome.auto_passed {
            tracing::debug!(
                "Game[{}]: {} rolled {} with nothing to move, turn passed",
                id,
                player,
                outcome.dice
            );
        }
        Ok(outcome)
    }

    /// Moves `token` by the pending roll. `dice` must echo the rolled value.
    pub async fn move_token(
        &self,
        id: &GameId,
        player: &PlayerId,
        token: TokenIndex,
        dice: u8,
    ) -> Result<MoveOutcome> {
        let outcome = self
            .commit(id, "move", |game| {
                let applied = apply_move(game, player, token, dice)?;
                let outcome = MoveOutcome {
                    token,
                    to: applied.result.to,
                    captured: applied.result.captured.clone(),
                    extra_turn: applied.result.extra_turn,
                    winner: applied.result.finished.then(|| player.clone()),
                    game_over: is_game_over(&applied.game),
                    action_id: applied.action_id,
                };
                Ok((applied.game, outcome))
            })
            .await?;

        if let Some(capture) = &outcome.captured {
            tracing::debug!(
                "Game[{}]: {} captured {}#{} on cell {}",
                id,
                player,
                capture.player,
                capture.token,
                capture.cell
            );
        }
        if let Some(winner) = &outcome.winner {
            tracing::info!("Game[{}]: {} brought every token home", id, winner);
        }
        if outcome.game_over {
            tracing::info!("Game[{}] is over", id);
        }
        Ok(outcome)
    }

    /// Current persisted record.
    pub fn snapshot(&self, id: &GameId) -> Result<GameRecord> {
        self.repo
            .get(id)?
            .map(|stored| stored.value)
            .ok_or_else(|| SessionError::GameNotFound(id.clone()))
    }

    pub fn list_games(&self) -> Result<Vec<GameId>> {
        Ok(self.repo.list_ids()?)
    }

    /// Runs `step` against a fresh read and commits its game with a
    /// compare-and-swap, retrying the whole cycle on version conflicts.
    ///
    /// `step` must be free of side effects other than drawing dice: a
    /// rejected or conflicting attempt leaves the stored game untouched.
    async fn commit<T>(
        &self,
        id: &GameId,
        op: &'static str,
        mut step: impl FnMut(&Game) -> Result<(Game, T)>,
    ) -> Result<T> {
        let attempts = self.config.max_commit_attempts.max(1);

        for attempt in 1..=attempts {
            let current = self
                .repo
                .get(id)?
                .ok_or_else(|| SessionError::GameNotFound(id.clone()))?;

            let (next, output) = step(&current.value.game)?;
            let record = current.value.with_game(next);

            match self.repo.compare_and_swap(current.version, &record) {
                Ok(version) => {
                    tracing::debug!(
                        "Committed {} on game[{}] v{} (action {})",
                        op,
                        id,
                        version,
                        record.game.last_action_id
                    );
                    return Ok(output);
                }
                Err(err) if err.is_conflict() => {
                    tracing::warn!(
                        "Conflict committing {} on game[{}] (attempt {}/{}): {}",
                        op,
                        id,
                        attempt,
                        attempts,
                        err
                    );
                    if attempt < attempts {
                        tokio::time::sleep(self.config.retry_backoff * attempt).await;
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }

        tracing::warn!("Giving up on {} for game[{}] after {} attempts", op, id, attempts);
        Err(SessionError::ConflictRetriesExhausted {
            id: id.clone(),
            attempts,
        })
    }
}
