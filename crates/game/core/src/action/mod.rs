//! Player actions and the transitions that apply them.
//!
//! A turn is two actions: a [`RollAction`] that records a trusted die value
//! and the tokens it can move, then a [`MoveAction`] that spends it. Both run
//! through the same three-phase pipeline in [`GameEngine`](crate::GameEngine).
//!
//! # Module Structure
//!
//! - `available`: move legality for a die value
//! - `roll`: recording a roll, auto-passing when nothing can move
//! - `movement`: applying a token move (shortcut, capture, win, extra turn)

mod available;
mod movement;
mod roll;

pub use available::compute_available_moves;
pub use movement::{Capture, MoveAction, MoveError, MoveResult};
pub use roll::{RollAction, RollError, RollResult};

use crate::state::{Game, PlayerId};

/// Defines how a concrete action mutates the game.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Returns the player performing this action.
    fn actor(&self) -> &PlayerId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &Game) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game directly.
    fn apply(&self, state: &mut Game) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &Game) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A die face, 1 through 6.
///
/// The engine only accepts dice in this form; the session layer produces
/// them from its trusted source and never from request input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DieValue(u8);

impl DieValue {
    pub const SIX: Self = Self(6);

    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 6 {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn is_six(self) -> bool {
        self.0 == 6
    }
}

impl core::fmt::Display for DieValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level action enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Roll(RollAction),
    Move(MoveAction),
}

impl Action {
    /// Returns the player performing this action.
    pub fn actor(&self) -> &PlayerId {
        match self {
            Action::Roll(action) => action.actor(),
            Action::Move(action) => action.actor(),
        }
    }
}

impl From<RollAction> for Action {
    fn from(action: RollAction) -> Self {
        Self::Roll(action)
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

/// Action-specific execution result.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Roll(RollResult),
    Move(MoveResult),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_value_range() {
        assert_eq!(DieValue::new(0), None);
        assert_eq!(DieValue::new(7), None);
        assert_eq!(DieValue::new(1).map(DieValue::get), Some(1));
        assert!(DieValue::new(6).unwrap().is_six());
        assert_eq!(DieValue::SIX, DieValue::new(6).unwrap());
    }
}
