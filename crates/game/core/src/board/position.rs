use super::{Color, STRETCH_LEN, TRACK_LEN};

/// Where a token sits on the board.
///
/// Serialized as the canonical integer code: `-1` for the yard, `0..=51` for
/// the shared track, `home_base(color) + 0..=5` for a home stretch cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i16", into = "i16"))]
pub enum Position {
    Yard,
    Track(u8),
    Stretch { color: Color, cell: u8 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a valid board position")]
pub struct PositionError(pub i16);

impl Position {
    pub const YARD_CODE: i16 = -1;

    /// Track cell, or `None` when `cell` is off the 52-cell loop.
    pub const fn track(cell: u8) -> Option<Self> {
        if cell < TRACK_LEN {
            Some(Self::Track(cell))
        } else {
            None
        }
    }

    /// Home stretch cell, or `None` when `cell` is past the final cell.
    pub const fn stretch(color: Color, cell: u8) -> Option<Self> {
        if cell < STRETCH_LEN {
            Some(Self::Stretch { color, cell })
        } else {
            None
        }
    }

    /// The last cell of `color`'s home stretch.
    pub const fn final_cell(color: Color) -> Self {
        Self::Stretch {
            color,
            cell: STRETCH_LEN - 1,
        }
    }

    pub fn from_code(code: i16) -> Result<Self, PositionError> {
        match code {
            Self::YARD_CODE => Ok(Self::Yard),
            0..=51 => Ok(Self::Track(code as u8)),
            _ if code >= 100 => {
                let base = code - code % 10;
                let cell = (code % 10) as u8;
                Color::from_home_base(base)
                    .and_then(|color| Self::stretch(color, cell))
                    .ok_or(PositionError(code))
            }
            _ => Err(PositionError(code)),
        }
    }

    pub const fn code(self) -> i16 {
        match self {
            Self::Yard => Self::YARD_CODE,
            Self::Track(cell) => cell as i16,
            Self::Stretch { color, cell } => color.home_base() + cell as i16,
        }
    }

    pub const fn is_yard(self) -> bool {
        matches!(self, Self::Yard)
    }

    pub const fn track_cell(self) -> Option<u8> {
        match self {
            Self::Track(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn is_final_cell_of(self, color: Color) -> bool {
        self == Self::final_cell(color)
    }
}

impl TryFrom<i16> for Position {
    type Error = PositionError;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<Position> for i16 {
    fn from(position: Position) -> Self {
        position.code()
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_region() {
        assert_eq!(Position::from_code(-1), Ok(Position::Yard));
        assert_eq!(Position::from_code(51), Ok(Position::Track(51)));
        assert_eq!(
            Position::from_code(125),
            Ok(Position::Stretch {
                color: Color::Yellow,
                cell: 5
            })
        );
    }

    #[test]
    fn rejects_gaps_in_the_encoding() {
        for code in [-2, 52, 99, 106, 109, 136, 140] {
            assert_eq!(Position::from_code(code), Err(PositionError(code)), "{code}");
        }
    }

    #[test]
    fn code_is_inverse_of_from_code() {
        for code in (-1..=51).chain(100..=105).chain(130..=135) {
            assert_eq!(Position::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn final_cell_is_stretch_cell_five() {
        assert_eq!(Position::final_cell(Color::Green).code(), 115);
        assert!(Position::Stretch { color: Color::Green, cell: 5 }.is_final_cell_of(Color::Green));
        assert!(!Position::Stretch { color: Color::Green, cell: 4 }.is_final_cell_of(Color::Green));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_the_integer_code() {
        let json = serde_json::to_string(&[Position::Yard, Position::Track(7), Position::final_cell(Color::Blue)]).unwrap();
        assert_eq!(json, "[-1,7,135]");

        let back: Vec<Position> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[2], Position::final_cell(Color::Blue));
        assert!(serde_json::from_str::<Position>("60").is_err());
    }
}
