mod common;

use common::*;
use ludo_core::{
    Capture, GameSettings, Position, Token, advance_turn, apply_move, is_game_over,
};

#[test]
fn yard_exit_on_six_lands_on_entry_and_keeps_the_turn() {
    let game = rolled(&two_player_game(), 6);
    assert_eq!(game.available_for(&pid(RED)), Some(&[0, 1, 2, 3][..]));

    let applied = apply_move(&game, &pid(RED), 0, 6).unwrap();

    assert_eq!(token(&applied.game, RED, 0), Token { pos: Position::Track(0), in_home: false });
    assert!(applied.extra_turn());
    assert_eq!(applied.game.turn_index, game.turn_index);
    assert_eq!(applied.game.dice, 0);
    assert_eq!(applied.game.available_moves, None);
}

#[test]
fn landing_on_an_opponent_captures_it() {
    let mut game = two_player_game();
    place(&mut game, RED, 0, 4);
    place(&mut game, GREEN, 0, 7);
    let game = rolled(&game, 3);

    let applied = apply_move(&game, &pid(RED), 0, 3).unwrap();

    assert_eq!(token(&applied.game, RED, 0).pos, Position::Track(7));
    assert_eq!(token(&applied.game, GREEN, 0), Token::YARD);
    assert_eq!(
        applied.captured(),
        Some(&Capture { player: pid(GREEN), token: 0, cell: 7 })
    );
    assert!(applied.extra_turn());
    assert_eq!(applied.game.turn_index, 0);
}

#[test]
fn safe_square_protects_the_occupant() {
    let mut game = two_player_game();
    place(&mut game, RED, 0, 5);
    place(&mut game, GREEN, 0, 8);
    let game = rolled(&game, 3);

    let applied = apply_move(&game, &pid(RED), 0, 3).unwrap();

    assert_eq!(token(&applied.game, RED, 0).pos, Position::Track(8));
    assert_eq!(token(&applied.game, GREEN, 0).pos, Position::Track(8));
    assert_eq!(applied.captured(), None);
    assert!(!applied.extra_turn());
    assert_eq!(applied.game.turn_index, 1);
}

#[test]
fn reaching_the_final_cell_sets_home_and_records_the_winner() {
    let mut game = two_player_game();
    place(&mut game, RED, 0, 104);
    home_all_but(&mut game, RED, 0);
    let game = rolled(&game, 1);

    let applied = apply_move(&game, &pid(RED), 0, 1).unwrap();

    assert_eq!(token(&applied.game, RED, 0), Token { pos: Position::from_code(105).unwrap(), in_home: true });
    assert!(applied.result.finished);
    assert_eq!(applied.game.winners, vec![pid(RED)]);
    assert!(is_game_over(&applied.game));
}

#[test]
fn reaching_home_with_tokens_left_is_not_a_win() {
    let mut game = two_player_game();
    place(&mut game, RED, 0, 104);
    place(&mut game, RED, 1, 20);
    let game = rolled(&game, 1);

    let applied = apply_move(&game, &pid(RED), 0, 1).unwrap();

    assert!(token(&applied.game, RED, 0).in_home);
    assert!(applied.game.winners.is_empty());
    assert_eq!(applied.game.turn_index, 1);
}

#[test]
fn advance_turn_skips_finished_players() {
    let mut game = started_game(&["a", "b", "c"], GameSettings::default());
    game.winners.push(pid("b"));
    assert_eq!(game.turn_index, 0);
    assert_eq!(advance_turn(&game), 2);
}

#[test]
fn six_on_the_track_grants_one_extra_turn() {
    let mut game = two_player_game();
    place(&mut game, RED, 0, 10);
    let game = rolled(&game, 6);

    let applied = apply_move(&game, &pid(RED), 0, 6).unwrap();

    assert_eq!(token(&applied.game, RED, 0).pos, Position::Track(16));
    assert!(applied.extra_turn());
    assert_eq!(applied.game.turn_index, 0);
}

#[test]
fn six_and_capture_still_grant_a_single_extra_turn() {
    let mut game = two_player_game();
    place(&mut game, RED, 0, 10);
    place(&mut game, GREEN, 0, 16);
    let game = rolled(&game, 6);

    let applied = apply_move(&game, &pid(RED), 0, 6).unwrap();

    assert!(applied.captured().is_some());
    assert!(applied.extra_turn());
    assert_eq!(applied.game.turn_index, 0);
    assert_eq!(applied.game.dice, 0);
}

#[test]
fn only_the_first_opponent_token_on_a_cell_is_captured() {
    let mut game = started_game(&[RED, GREEN, YELLOW], GameSettings::default());
    place(&mut game, RED, 0, 14);
    place(&mut game, GREEN, 2, 16);
    place(&mut game, GREEN, 3, 16);
    place(&mut game, YELLOW, 0, 16);
    let game = rolled(&game, 2);

    let applied = apply_move(&game, &pid(RED), 0, 2).unwrap();

    assert_eq!(
        applied.captured(),
        Some(&Capture { player: pid(GREEN), token: 2, cell: 16 })
    );
    assert_eq!(token(&applied.game, GREEN, 3).pos, Position::Track(16));
    assert_eq!(token(&applied.game, YELLOW, 0).pos, Position::Track(16));
}

#[test]
fn own_tokens_are_never_captured() {
    let mut game = two_player_game();
    place(&mut game, RED, 0, 14);
    place(&mut game, RED, 1, 16);
    let game = rolled(&game, 2);

    let applied = apply_move(&game, &pid(RED), 0, 2).unwrap();

    assert_eq!(applied.captured(), None);
    assert_eq!(token(&applied.game, RED, 1).pos, Position::Track(16));
}

#[test]
fn winning_with_a_six_passes_the_turn() {
    let mut game = started_game(&[RED, GREEN, YELLOW], GameSettings::default());
    place(&mut game, RED, 0, 51);
    home_all_but(&mut game, RED, 0);
    let game = rolled(&game, 6);

    let applied = apply_move(&game, &pid(RED), 0, 6).unwrap();

    assert!(token(&applied.game, RED, 0).in_home);
    assert!(applied.result.finished);
    assert!(!applied.extra_turn());
    assert_eq!(applied.game.turn_index, 1);
    assert!(!is_game_over(&applied.game));
}

#[test]
fn star_shortcut_teleports_before_capture() {
    let mut game = started_game(&[RED, GREEN], GameSettings::with_star_shortcuts(true));
    place(&mut game, RED, 0, 2);
    place(&mut game, GREEN, 0, 18);
    let game = rolled(&game, 3);

    let applied = apply_move(&game, &pid(RED), 0, 3).unwrap();

    assert_eq!(applied.result.shortcut_from, Some(5));
    assert_eq!(token(&applied.game, RED, 0).pos, Position::Track(18));
    assert_eq!(
        applied.captured(),
        Some(&Capture { player: pid(GREEN), token: 0, cell: 18 })
    );
}

#[test]
fn star_shortcut_is_ignored_when_disabled() {
    let mut game = two_player_game();
    place(&mut game, RED, 0, 2);
    let game = rolled(&game, 3);

    let applied = apply_move(&game, &pid(RED), 0, 3).unwrap();

    assert_eq!(applied.result.shortcut_from, None);
    assert_eq!(token(&applied.game, RED, 0).pos, Position::Track(5));
}

#[test]
fn tokens_wrap_the_track_into_their_own_stretch() {
    let mut game = started_game(&[RED, GREEN], GameSettings::default());
    // Green enters at 13; cell 11 is 50 steps along.
    place(&mut game, GREEN, 0, 11);
    game.turn_index = 1;
    let game = rolled(&game, 4);

    let applied = apply_move(&game, &pid(GREEN), 0, 4).unwrap();

    assert_eq!(token(&applied.game, GREEN, 0).pos, Position::from_code(112).unwrap());
    assert_eq!(color_of(&applied.game, GREEN).home_base(), 110);
}

#[test]
fn action_id_increases_on_every_transition() {
    let game = two_player_game();
    let before = game.last_action_id;
    let game = rolled(&game, 6);
    assert_eq!(game.last_action_id, before + 1);
    let applied = apply_move(&game, &pid(RED), 0, 6).unwrap();
    assert_eq!(applied.action_id, before + 2);
    assert_eq!(applied.game.last_action_id, before + 2);
}
