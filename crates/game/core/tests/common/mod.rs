#![allow(dead_code)]

use ludo_core::{Color, DieValue, Game, GameSettings, PlayerId, Position, Token, apply_roll};

pub const RED: &str = "red";
pub const GREEN: &str = "green";
pub const YELLOW: &str = "yellow";

/// Started game with one player per id, seated in order.
pub fn started_game(ids: &[&str], settings: GameSettings) -> Game {
    let mut game = Game::new(ids[0], ids[0], settings);
    for id in &ids[1..] {
        game.seat_player(*id, *id).unwrap();
    }
    game.start().unwrap();
    game
}

pub fn two_player_game() -> Game {
    started_game(&[RED, GREEN], GameSettings::default())
}

pub fn pid(id: &str) -> PlayerId {
    PlayerId::from(id)
}

pub fn die(value: u8) -> DieValue {
    DieValue::new(value).unwrap()
}

pub fn place(game: &mut Game, player: &str, index: usize, code: i16) {
    let color = game.player(&pid(player)).unwrap().color;
    let pos = Position::from_code(code).unwrap();
    game.tokens_of_mut(&pid(player)).unwrap()[index] = Token::at(pos, color);
}

pub fn home_all_but(game: &mut Game, player: &str, keep: usize) {
    let color = game.player(&pid(player)).unwrap().color;
    for (index, token) in game.tokens_of_mut(&pid(player)).unwrap().iter_mut().enumerate() {
        if index != keep {
            *token = Token::at(Position::final_cell(color), color);
        }
    }
}

/// Rolls `value` for the current player and returns the game holding it.
pub fn rolled(game: &Game, value: u8) -> Game {
    let current = game.current_player().unwrap().id.clone();
    apply_roll(game, &current, die(value)).unwrap().game
}

pub fn token(game: &Game, player: &str, index: usize) -> Token {
    game.tokens_of(&pid(player)).unwrap()[index]
}

pub fn color_of(game: &Game, player: &str) -> Color {
    game.player(&pid(player)).unwrap().color
}
