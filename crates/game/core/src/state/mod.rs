//! Authoritative game state representation.
//!
//! [`Game`] is the aggregate a session repository stores. Runtime layers clone
//! or query it, and mutate it only through the lobby helpers here or through
//! [`GameEngine`](crate::engine::GameEngine).
mod error;
mod player;
mod token;

use std::collections::{BTreeMap, BTreeSet};

use arrayvec::ArrayVec;

pub use error::{InvariantViolation, LobbyError};
pub use player::{Player, PlayerId};
pub use token::{Token, TokenIndex};

use crate::board::{Color, Position};
use crate::config::GameSettings;
use crate::turn;

/// A player's four tokens. The array length is the "exactly four" invariant.
pub type TokenSet = [Token; GameSettings::TOKENS_PER_PLAYER];

/// Movable token indices keyed by the player holding the pending roll.
pub type AvailableMoves = BTreeMap<PlayerId, ArrayVec<TokenIndex, { GameSettings::TOKENS_PER_PLAYER }>>;

/// Canonical snapshot of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Game {
    /// Seated players in join order.
    pub players: Vec<Player>,

    pub tokens: BTreeMap<PlayerId, TokenSet>,

    /// Index into `players` of the player holding the turn.
    pub turn_index: usize,

    /// Pending die value, `0` when nothing has been rolled.
    pub dice: u8,

    /// Set exactly when `dice != 0`.
    pub available_moves: Option<AvailableMoves>,

    /// Finished players in finish order. Append-only.
    #[cfg_attr(feature = "serde", serde(rename = "winnerIds"))]
    pub winners: Vec<PlayerId>,

    pub settings: GameSettings,

    /// Incremented on every committed transition.
    pub last_action_id: u64,

    pub started: bool,
}

impl Game {
    /// Creates a lobby holding only the host, seated as red.
    pub fn new(host: impl Into<PlayerId>, host_name: impl Into<String>, settings: GameSettings) -> Self {
        let host = Player::new(host, host_name, Color::Red, 0);
        let mut tokens = BTreeMap::new();
        tokens.insert(host.id.clone(), [Token::YARD; GameSettings::TOKENS_PER_PLAYER]);

        Self {
            players: vec![host],
            tokens,
            turn_index: 0,
            dice: 0,
            available_moves: None,
            winners: Vec::new(),
            settings,
            last_action_id: 0,
            started: false,
        }
    }

    /// Seats a new player with the next free color and four yard tokens.
    pub fn seat_player(
        &mut self,
        id: impl Into<PlayerId>,
        name: impl Into<String>,
    ) -> Result<&Player, LobbyError> {
        let id = id.into();
        if self.started {
            return Err(LobbyError::AlreadyStarted);
        }
        if self.player(&id).is_some() {
            return Err(LobbyError::AlreadyJoined(id));
        }
        let seat = self.players.len();
        let color = Color::for_seat(seat).ok_or(LobbyError::RoomFull {
            max: GameSettings::MAX_PLAYERS,
        })?;

        self.tokens
            .insert(id.clone(), [Token::YARD; GameSettings::TOKENS_PER_PLAYER]);
        self.players.push(Player::new(id, name, color, seat as u8));
        self.last_action_id += 1;

        Ok(&self.players[seat])
    }

    /// Closes the lobby. The host (seat 0) takes the first turn.
    pub fn start(&mut self) -> Result<(), LobbyError> {
        if self.started {
            return Err(LobbyError::AlreadyStarted);
        }
        if self.players.len() < GameSettings::MIN_PLAYERS {
            return Err(LobbyError::NotEnoughPlayers {
                min: GameSettings::MIN_PLAYERS,
                current: self.players.len(),
            });
        }

        self.started = true;
        self.turn_index = 0;
        self.last_action_id += 1;
        Ok(())
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn_index)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == id)
    }

    pub fn player_index(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|player| &player.id == id)
    }

    pub fn tokens_of(&self, id: &PlayerId) -> Option<&TokenSet> {
        self.tokens.get(id)
    }

    pub fn tokens_of_mut(&mut self, id: &PlayerId) -> Option<&mut TokenSet> {
        self.tokens.get_mut(id)
    }

    pub fn is_winner(&self, id: &PlayerId) -> bool {
        self.winners.contains(id)
    }

    /// Movable tokens from the pending roll, if `id` holds it.
    pub fn available_for(&self, id: &PlayerId) -> Option<&[TokenIndex]> {
        self.available_moves
            .as_ref()
            .and_then(|moves| moves.get(id))
            .map(|indices| indices.as_slice())
    }

    /// Verifies every structural invariant of the aggregate.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let count = self.players.len();
        let allowed = if self.started {
            GameSettings::MIN_PLAYERS..=GameSettings::MAX_PLAYERS
        } else {
            1..=GameSettings::MAX_PLAYERS
        };
        if !allowed.contains(&count) {
            return Err(InvariantViolation::PlayerCount(count));
        }

        let seated: BTreeSet<&PlayerId> = self.players.iter().map(|player| &player.id).collect();
        if seated.len() != count || self.tokens.len() != count || !self.tokens.keys().all(|id| seated.contains(id)) {
            return Err(InvariantViolation::TokenOwners);
        }

        for player in &self.players {
            let tokens = self.tokens_of(&player.id).ok_or(InvariantViolation::TokenOwners)?;
            for (index, token) in tokens.iter().enumerate() {
                if let Position::Stretch { color, .. } = token.pos
                    && color != player.color
                {
                    return Err(InvariantViolation::ForeignStretch {
                        player: player.id.clone(),
                        index,
                        pos: token.pos,
                    });
                }
                if token.in_home != token.pos.is_final_cell_of(player.color) {
                    return Err(InvariantViolation::HomeFlag {
                        player: player.id.clone(),
                        index,
                        pos: token.pos,
                        in_home: token.in_home,
                    });
                }
            }
        }

        if self.dice > 6 {
            return Err(InvariantViolation::DiceOutOfRange(self.dice));
        }
        if (self.dice != 0) != self.available_moves.is_some() {
            return Err(InvariantViolation::DiceMovesMismatch {
                dice: self.dice,
                has_moves: self.available_moves.is_some(),
            });
        }

        if self.turn_index >= count {
            return Err(InvariantViolation::TurnIndex(self.turn_index));
        }
        let current = &self.players[self.turn_index].id;

        if let Some(moves) = &self.available_moves {
            for (owner, indices) in moves {
                if owner != current {
                    return Err(InvariantViolation::MovesOwner(owner.clone()));
                }
                let tokens = self.tokens_of(owner).ok_or(InvariantViolation::TokenOwners)?;
                for &index in indices {
                    if tokens.get(index).is_none_or(|token| token.in_home) {
                        return Err(InvariantViolation::MoveTarget {
                            player: owner.clone(),
                            index,
                        });
                    }
                }
            }
        }

        let mut finished = BTreeSet::new();
        for winner in &self.winners {
            if !seated.contains(winner) || !finished.insert(winner) {
                return Err(InvariantViolation::Winners(winner.clone()));
            }
        }

        if self.started && !turn::is_game_over(self) && self.is_winner(current) {
            return Err(InvariantViolation::TurnOnWinner(current.clone()));
        }

        Ok(())
    }
}
