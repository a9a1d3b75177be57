//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`Game`]. Every roll
//! and move runs pre_validate → apply → post_validate against the game it was
//! handed. A transition that fails in any phase leaves the game exactly as it
//! was; one that succeeds bumps `last_action_id`.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult, MoveAction, MoveResult, RollAction, RollResult};
use crate::state::Game;

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// `last_action_id` stamped on the committed transition.
    pub action_id: u64,

    pub action_result: ActionResult,
}

/// Game engine that applies actions to a borrowed game.
///
/// Holds no state of its own; it never blocks and never sees any game other
/// than the one it wraps.
pub struct GameEngine<'a> {
    state: &'a mut Game,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut Game) -> Self {
        Self { state }
    }

    /// Executes an action through the transition pipeline.
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        let (action_result, action_id) =
            self.commit(|state| transition::execute_transition(action, state))?;
        Ok(ExecutionOutcome {
            action_id,
            action_result,
        })
    }

    /// Records a roll. Returns the result and the new `last_action_id`.
    pub fn roll(&mut self, action: &RollAction) -> Result<(RollResult, u64), ExecuteError> {
        self.commit(|state| transition::drive_transition(action, state).map_err(ExecuteError::Roll))
    }

    /// Moves a token. Returns the result and the new `last_action_id`.
    pub fn move_token(&mut self, action: &MoveAction) -> Result<(MoveResult, u64), ExecuteError> {
        self.commit(|state| transition::drive_transition(action, state).map_err(ExecuteError::Move))
    }

    /// Runs `transition` all-or-nothing and stamps the action id on success.
    fn commit<R>(
        &mut self,
        transition: impl FnOnce(&mut Game) -> Result<R, ExecuteError>,
    ) -> Result<(R, u64), ExecuteError> {
        let before = self.state.clone();

        match transition(&mut *self.state) {
            Ok(result) => {
                self.state.last_action_id += 1;
                Ok((result, self.state.last_action_id))
            }
            Err(err) => {
                // Apply or post-validate may have written before failing.
                *self.state = before;
                Err(err)
            }
        }
    }
}
