//! Move legality.
//!
//! `compute_available_moves()` decides which of a player's tokens may move
//! for a die value. The session writes the result into the game when the die
//! is rolled, and a move is only accepted for a token in that set.

use arrayvec::ArrayVec;

use crate::action::DieValue;
use crate::board;
use crate::config::GameSettings;
use crate::state::{Game, PlayerId, TokenIndex};

/// Indices of `player`'s tokens that can legally move `dice` steps.
///
/// In index order:
/// - tokens already home never move
/// - yard tokens leave only on a six
/// - anything else moves unless it would run past the final cell
///
/// Unknown players have no movable tokens. An empty result means the roll
/// passes the turn.
pub fn compute_available_moves(
    game: &Game,
    player: &PlayerId,
    dice: DieValue,
) -> ArrayVec<TokenIndex, { GameSettings::TOKENS_PER_PLAYER }> {
    let (Some(owner), Some(tokens)) = (game.player(player), game.tokens_of(player)) else {
        return ArrayVec::new();
    };

    tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| {
            if token.in_home {
                false
            } else if token.pos.is_yard() {
                dice.is_six()
            } else {
                !board::overshoots_home(token.pos, dice.get(), owner.color)
            }
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Position};
    use crate::state::Token;

    fn game_with(tokens: [Token; 4]) -> Game {
        let mut game = Game::new("red", "Red", GameSettings::default());
        game.seat_player("green", "Green").unwrap();
        game.start().unwrap();
        *game.tokens_of_mut(&"red".into()).unwrap() = tokens;
        game
    }

    fn die(value: u8) -> DieValue {
        DieValue::new(value).unwrap()
    }

    #[test]
    fn yard_tokens_need_a_six() {
        let game = game_with([Token::YARD; 4]);
        assert!(compute_available_moves(&game, &"red".into(), die(5)).is_empty());
        assert_eq!(
            compute_available_moves(&game, &"red".into(), die(6)).as_slice(),
            &[0, 1, 2, 3]
        );
    }

    #[test]
    fn home_and_overshooting_tokens_are_excluded() {
        let game = game_with([
            Token::at(Position::final_cell(Color::Red), Color::Red),
            Token::at(Position::Stretch { color: Color::Red, cell: 3 }, Color::Red),
            Token::at(Position::Track(10), Color::Red),
            Token::YARD,
        ]);
        assert_eq!(
            compute_available_moves(&game, &"red".into(), die(2)).as_slice(),
            &[1, 2]
        );
        assert_eq!(
            compute_available_moves(&game, &"red".into(), die(3)).as_slice(),
            &[2]
        );
        assert_eq!(
            compute_available_moves(&game, &"red".into(), die(6)).as_slice(),
            &[2, 3]
        );
    }

    #[test]
    fn unknown_player_has_no_moves() {
        let game = game_with([Token::YARD; 4]);
        assert!(compute_available_moves(&game, &"nobody".into(), die(6)).is_empty());
    }
}
