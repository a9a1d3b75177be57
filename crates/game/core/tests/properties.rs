//! Seeded random playouts checked against the board invariants after every
//! transition.

mod common;

use common::*;
use ludo_core::{
    ExecuteError, Game, GameSettings, PlayerId, RollError, apply_move, apply_roll, board,
    is_game_over,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const MAX_ACTIONS: usize = 20_000;

fn steps_of(game: &Game, player: &PlayerId, index: usize) -> Option<u8> {
    let color = game.player(player)?.color;
    let token = game.tokens_of(player)?[index];
    board::steps_from_start(token.pos, color)
}

/// Plays a full game with random dice and random token choices.
fn play_out(seed: u64, ids: &[&str], settings: GameSettings) -> Game {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = started_game(ids, settings);

    for _ in 0..MAX_ACTIONS {
        if is_game_over(&game) {
            return game;
        }
        let actor = game.current_player().unwrap().id.clone();
        let before_id = game.last_action_id;

        let rolled = apply_roll(&game, &actor, die(rng.gen_range(1..=6))).unwrap();
        assert_eq!(rolled.action_id, before_id + 1);
        rolled.game.check_invariants().unwrap();

        if rolled.result.auto_passed {
            assert_ne!(rolled.game.turn_index, game.turn_index);
            game = rolled.game;
            continue;
        }

        let available = rolled.result.available.clone();
        assert_eq!(rolled.game.available_for(&actor), Some(&available[..]));
        let index = available[rng.gen_range(0..available.len())];
        let before = rolled.game;
        let from_steps = steps_of(&before, &actor, index);

        let moved = apply_move(&before, &actor, index, before.dice).unwrap();
        let after = moved.game.clone();

        after.check_invariants().unwrap();
        assert_eq!(moved.action_id, before.last_action_id + 1);
        assert_eq!(after.dice, 0);
        assert_eq!(after.available_moves, None);

        // Tokens only ever move forward along their own path.
        let to_steps = steps_of(&after, &actor, index).unwrap();
        match from_steps {
            None => assert_eq!(to_steps, 0),
            Some(steps) => assert!(to_steps > steps, "{steps} -> {to_steps}"),
        }
        assert!(to_steps <= board::FINAL_STEP);

        if let Some(capture) = moved.captured() {
            assert_ne!(capture.player, actor);
            assert!(!board::is_safe_square(capture.cell));
            assert!(after.tokens_of(&capture.player).unwrap()[capture.token].pos.is_yard());
            assert!(moved.extra_turn());
        }

        if moved.extra_turn() {
            assert_eq!(after.turn_index, before.turn_index);
        } else if !is_game_over(&after) {
            let next = &after.players[after.turn_index].id;
            assert!(!after.is_winner(next));
        }

        game = after;
    }

    panic!("seed {seed} did not finish within {MAX_ACTIONS} actions");
}

#[test]
fn random_two_player_games_finish_cleanly() {
    for seed in 0..20 {
        let game = play_out(seed, &[RED, GREEN], GameSettings::default());
        assert_eq!(game.winners.len(), 1);
        let winner = &game.winners[0];
        assert!(game.tokens_of(winner).unwrap().iter().all(|t| t.in_home));
    }
}

#[test]
fn random_four_player_games_rank_three_winners() {
    for seed in 100..110 {
        let game = play_out(seed, &["a", "b", "c", "d"], GameSettings::default());
        assert_eq!(game.winners.len(), 3);

        let mut unique = game.winners.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 3);
    }
}

#[test]
fn random_games_with_star_shortcuts_keep_invariants() {
    for seed in 200..210 {
        play_out(seed, &[RED, GREEN, YELLOW], GameSettings::with_star_shortcuts(true));
    }
}

#[test]
fn finished_games_refuse_further_rolls() {
    let game = play_out(7, &[RED, GREEN], GameSettings::default());
    let anyone = game.players[game.turn_index].id.clone();

    match apply_roll(&game, &anyone, die(6)).unwrap_err() {
        ExecuteError::Roll(err) => assert_eq!(err.error, RollError::GameOver),
        other => panic!("unexpected {other:?}"),
    }
}
