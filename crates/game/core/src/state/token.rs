use crate::board::{Color, Position};

/// Index of a token within its owner's set of four.
pub type TokenIndex = usize;

/// A single token.
///
/// `in_home` mirrors "sits on its color's final stretch cell"; it is stored
/// rather than derived because it is part of the canonical record shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Token {
    pub pos: Position,
    pub in_home: bool,
}

impl Token {
    pub const YARD: Self = Self {
        pos: Position::Yard,
        in_home: false,
    };

    /// Token of `color` placed at `pos`, with `in_home` derived.
    pub fn at(pos: Position, color: Color) -> Self {
        Self {
            pos,
            in_home: pos.is_final_cell_of(color),
        }
    }

    /// Sends the token back to the yard.
    pub fn capture(&mut self) {
        *self = Self::YARD;
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::YARD
    }
}
