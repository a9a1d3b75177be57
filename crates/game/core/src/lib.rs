//! Deterministic Ludo rules shared by every session layer.
//!
//! `ludo-core` defines the canonical board encoding, the [`Game`] aggregate
//! and the roll/move transitions. It performs no I/O, owns no randomness and
//! holds no state between calls: every function works on the game value it
//! is given. All turn mutation flows through [`engine::GameEngine`]; the
//! [`rules`] module wraps it in value-in, value-out form.
pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod state;
pub mod turn;

pub use action::{
    Action, ActionResult, ActionTransition, Capture, DieValue, MoveAction, MoveError, MoveResult,
    RollAction, RollError, RollResult, compute_available_moves,
};
pub use board::{Color, Position, PositionError};
pub use config::GameSettings;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, GameError};
pub use rules::{MoveApplied, RollApplied, apply_move, apply_roll, validate_move, validate_roll};
pub use state::{
    AvailableMoves, Game, InvariantViolation, LobbyError, Player, PlayerId, Token, TokenIndex,
    TokenSet,
};
pub use turn::{advance_turn, is_game_over};
