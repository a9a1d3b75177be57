//! Board geometry and position arithmetic.
//!
//! Tokens live in one of three places: the yard, the shared 52-cell track, or
//! their color's 6-cell home stretch. To compare and add distances across
//! those representations every position is converted into "steps from start",
//! the distance a token of a given color has traveled since leaving the yard:
//!
//! ```text
//! steps  0..=51  track cells (entry_index(color) + steps) mod 52
//! steps 52..=57  home stretch cells home_base(color) + (steps - 52)
//! steps 57       final cell, token is home
//! ```

mod color;
mod position;

pub use color::Color;
pub use position::{Position, PositionError};

/// Cells on the shared circular track.
pub const TRACK_LEN: u8 = 52;

/// Cells in each color's home stretch, final cell included.
pub const STRETCH_LEN: u8 = 6;

/// Steps from start of the final stretch cell.
pub const FINAL_STEP: u8 = TRACK_LEN + STRETCH_LEN - 1;

/// Track cells on which tokens cannot be captured.
pub const SAFE_SQUARES: [u8; 8] = [0, 8, 13, 21, 26, 34, 39, 47];

/// Star cells and the star each one teleports to when shortcuts are enabled.
pub const STAR_SHORTCUTS: [(u8, u8); 4] = [(5, 18), (18, 31), (31, 44), (44, 5)];

pub const fn entry_index(color: Color) -> u8 {
    color.entry_index()
}

pub const fn home_base(color: Color) -> i16 {
    color.home_base()
}

/// Distance `color` has traveled to reach `pos`; `None` while in the yard.
///
/// Stretch cells are only ever occupied by their own color, so the stretch
/// offset is taken as-is.
pub const fn steps_from_start(pos: Position, color: Color) -> Option<u8> {
    match pos {
        Position::Yard => None,
        Position::Track(cell) => Some((cell + TRACK_LEN - color.entry_index()) % TRACK_LEN),
        Position::Stretch { cell, .. } => Some(TRACK_LEN + cell),
    }
}

/// Inverse of [`steps_from_start`]. Returns `None` past the final cell.
pub const fn from_steps(steps: u8, color: Color) -> Option<Position> {
    if steps < TRACK_LEN {
        Some(Position::Track((color.entry_index() + steps) % TRACK_LEN))
    } else {
        Position::stretch(color, steps - TRACK_LEN)
    }
}

/// True when moving `die` steps from `pos` would run past the final cell.
pub const fn overshoots_home(pos: Position, die: u8, color: Color) -> bool {
    match steps_from_start(pos, color) {
        Some(steps) => steps as u16 + die as u16 > FINAL_STEP as u16,
        None => false,
    }
}

pub fn is_safe_square(cell: u8) -> bool {
    SAFE_SQUARES.contains(&cell)
}

/// Star shortcut target for a token of `color` landing on track `cell`.
///
/// A jump that would carry the token past the last track cell before its home
/// stretch is not taken, so a shortcut never skips the turn into the stretch.
pub fn star_shortcut(cell: u8, color: Color) -> Option<u8> {
    let (_, target) = STAR_SHORTCUTS.iter().find(|(star, _)| *star == cell)?;
    let from = steps_from_start(Position::Track(cell), color)?;
    let to = steps_from_start(Position::Track(*target), color)?;
    (to > from).then_some(*target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_from_start_per_region() {
        assert_eq!(steps_from_start(Position::Yard, Color::Red), None);
        assert_eq!(steps_from_start(Position::Track(0), Color::Red), Some(0));
        assert_eq!(steps_from_start(Position::Track(13), Color::Green), Some(0));
        assert_eq!(steps_from_start(Position::Track(12), Color::Green), Some(51));
        assert_eq!(steps_from_start(Position::Track(2), Color::Blue), Some(15));
        assert_eq!(
            steps_from_start(Position::final_cell(Color::Yellow), Color::Yellow),
            Some(FINAL_STEP)
        );
    }

    #[test]
    fn from_steps_wraps_the_track_and_enters_the_stretch() {
        assert_eq!(from_steps(0, Color::Blue), Some(Position::Track(39)));
        assert_eq!(from_steps(20, Color::Blue), Some(Position::Track(7)));
        assert_eq!(
            from_steps(52, Color::Green),
            Some(Position::Stretch { color: Color::Green, cell: 0 })
        );
        assert_eq!(
            from_steps(56, Color::Red),
            Some(Position::Stretch { color: Color::Red, cell: 4 })
        );
        assert_eq!(from_steps(57, Color::Red), Some(Position::final_cell(Color::Red)));
        assert_eq!(from_steps(58, Color::Red), None);
    }

    #[test]
    fn every_step_round_trips_for_every_color() {
        for color in Color::ALL {
            for steps in 0..=FINAL_STEP {
                let pos = from_steps(steps, color).unwrap();
                assert_eq!(steps_from_start(pos, color), Some(steps));
            }
        }
    }

    #[test]
    fn overshoot_boundary() {
        let pos = Position::Stretch { color: Color::Red, cell: 4 };
        assert!(!overshoots_home(pos, 1, Color::Red));
        assert!(overshoots_home(pos, 2, Color::Red));
        assert!(!overshoots_home(Position::Yard, 6, Color::Red));
        assert!(!overshoots_home(Position::Track(51), 6, Color::Red));
        let first = Position::Stretch { color: Color::Red, cell: 0 };
        assert!(!overshoots_home(first, 5, Color::Red));
        assert!(overshoots_home(first, 6, Color::Red));
    }

    #[test]
    fn shortcuts_never_skip_the_home_turn() {
        assert_eq!(star_shortcut(5, Color::Red), Some(18));
        assert_eq!(star_shortcut(44, Color::Red), None);
        assert_eq!(star_shortcut(44, Color::Green), Some(5));
        assert_eq!(star_shortcut(5, Color::Green), None);
        assert_eq!(star_shortcut(6, Color::Red), None);
    }

    #[test]
    fn safe_squares() {
        assert!(is_safe_square(8));
        assert!(!is_safe_square(7));
    }
}
