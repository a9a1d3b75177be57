//! Session runtime for Ludo games.
//!
//! This crate wraps the pure `ludo-core` engine with the pieces a server needs:
//! versioned persistence, a trusted dice source and a session service that
//! serializes every roll and move through an optimistic commit loop.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the [`SessionService`] and its retry loop
//! - [`api`] exposes the errors and outcomes clients see
//! - [`oracle`] and [`repository`] provide the adapters the service is built from
//! - [`config`] loads runtime settings from the environment
pub mod api;
pub mod config;
pub mod oracle;
pub mod repository;
pub mod session;

pub use api::{MoveOutcome, Result, RollOutcome, SessionError};
pub use config::{RuntimeConfig, default_data_dir};
pub use oracle::{DiceError, DiceOracle, RandomDice, ScriptedDice};
pub use repository::{
    FileGameRepository, GameId, GameRecord, GameRepository, InMemoryGameRepo, RepositoryError,
    Versioned,
};
pub use session::SessionService;
