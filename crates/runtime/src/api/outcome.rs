use ludo_core::{Capture, Position, PlayerId, RollResult, TokenIndex};
use serde::{Deserialize, Serialize};

/// What a committed roll produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollOutcome {
    pub dice: u8,
    /// Tokens the roller may move. Empty when the roll auto-passed.
    pub available: Vec<TokenIndex>,
    pub auto_passed: bool,
    pub action_id: u64,
}

impl RollOutcome {
    pub(crate) fn new(result: RollResult, action_id: u64) -> Self {
        Self {
            dice: result.dice,
            available: result.available.to_vec(),
            auto_passed: result.auto_passed,
            action_id,
        }
    }
}

/// What a committed move produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveOutcome {
    pub token: TokenIndex,
    pub to: Position,
    pub captured: Option<Capture>,
    pub extra_turn: bool,
    /// Set when this move brought the mover's last token home.
    pub winner: Option<PlayerId>,
    pub game_over: bool,
    pub action_id: u64,
}
