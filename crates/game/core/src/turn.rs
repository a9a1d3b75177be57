//! Turn scheduling.
//!
//! Turn order is seat order. Finished players are skipped; the game ends when
//! at most one player is still racing.

use crate::state::Game;

/// Index of the next player to act after the current one.
///
/// Walks forward from `turn_index`, skipping players in the winners list.
/// Gives up after one full lap, so it terminates even when every other seat
/// is finished and lands on the single remaining player.
pub fn advance_turn(game: &Game) -> usize {
    let count = game.players.len();
    if count == 0 {
        return 0;
    }

    let mut index = game.turn_index;
    for _ in 0..count {
        index = (index + 1) % count;
        if !game.is_winner(&game.players[index].id) {
            return index;
        }
    }
    index
}

/// True once no more than one player is left without all tokens home.
pub fn is_game_over(game: &Game) -> bool {
    !game.players.is_empty() && game.winners.len() + 1 >= game.players.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSettings;

    fn seated(ids: &[&str]) -> Game {
        let mut game = Game::new(ids[0], ids[0], GameSettings::default());
        for id in &ids[1..] {
            game.seat_player(*id, *id).unwrap();
        }
        game.start().unwrap();
        game
    }

    #[test]
    fn advances_in_seat_order_and_wraps() {
        let mut game = seated(&["a", "b", "c"]);
        assert_eq!(advance_turn(&game), 1);
        game.turn_index = 2;
        assert_eq!(advance_turn(&game), 0);
    }

    #[test]
    fn skips_winners() {
        let mut game = seated(&["a", "b", "c"]);
        game.winners.push("b".into());
        assert_eq!(advance_turn(&game), 2);
    }

    #[test]
    fn lands_on_last_player_standing() {
        let mut game = seated(&["a", "b", "c", "d"]);
        game.turn_index = 3;
        game.winners = vec!["a".into(), "b".into(), "d".into()];
        assert_eq!(advance_turn(&game), 2);
    }

    #[test]
    fn game_over_when_one_player_remains() {
        let mut game = seated(&["a", "b", "c"]);
        assert!(!is_game_over(&game));
        game.winners.push("a".into());
        assert!(!is_game_over(&game));
        game.winners.push("c".into());
        assert!(is_game_over(&game));
    }
}
