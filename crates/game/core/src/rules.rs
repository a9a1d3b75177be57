//! Value-in, value-out entry points for session layers.
//!
//! Each function takes the game by reference and returns a fresh game on
//! success, so a caller can validate and compute against the exact snapshot
//! it read and only then decide whether to commit.

use crate::action::{
    ActionTransition, Capture, DieValue, MoveAction, MoveError, MoveResult, RollAction, RollError,
    RollResult,
};
use crate::engine::{ExecuteError, GameEngine};
use crate::state::{Game, PlayerId, TokenIndex};

/// A game after a successful move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveApplied {
    pub game: Game,
    pub result: MoveResult,
    pub action_id: u64,
}

impl MoveApplied {
    pub fn captured(&self) -> Option<&Capture> {
        self.result.captured.as_ref()
    }

    pub fn extra_turn(&self) -> bool {
        self.result.extra_turn
    }
}

/// A game after a successful roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollApplied {
    pub game: Game,
    pub result: RollResult,
    pub action_id: u64,
}

/// Checks every precondition of a move without applying it.
pub fn validate_move(
    game: &Game,
    player: &PlayerId,
    token: TokenIndex,
    dice: u8,
) -> Result<(), MoveError> {
    MoveAction::new(player.clone(), token, dice).pre_validate(game)
}

/// Applies a move to a copy of `game`.
pub fn apply_move(
    game: &Game,
    player: &PlayerId,
    token: TokenIndex,
    dice: u8,
) -> Result<MoveApplied, ExecuteError> {
    let mut next = game.clone();
    let (result, action_id) =
        GameEngine::new(&mut next).move_token(&MoveAction::new(player.clone(), token, dice))?;

    Ok(MoveApplied {
        game: next,
        result,
        action_id,
    })
}

/// Checks that `player` may roll now.
pub fn validate_roll(game: &Game, player: &PlayerId) -> Result<(), RollError> {
    RollAction::new(player.clone(), DieValue::SIX).pre_validate(game)
}

/// Records a trusted die value on a copy of `game`.
///
/// When the die leaves nothing movable the returned game has already passed
/// the turn on.
pub fn apply_roll(
    game: &Game,
    player: &PlayerId,
    value: DieValue,
) -> Result<RollApplied, ExecuteError> {
    let mut next = game.clone();
    let (result, action_id) =
        GameEngine::new(&mut next).roll(&RollAction::new(player.clone(), value))?;

    Ok(RollApplied {
        game: next,
        result,
        action_id,
    })
}
