/// Per-game rule settings.
///
/// Fixed when the game is created and carried inside the game value; nothing
/// in the engine reads settings from anywhere else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameSettings {
    /// Landing on a star cell teleports the token to the next star.
    #[cfg_attr(feature = "serde", serde(default))]
    pub star_shortcuts: bool,
}

impl GameSettings {
    // ===== compile-time constants =====
    /// Minimum number of seated players required to start.
    pub const MIN_PLAYERS: usize = 2;
    /// One player per color.
    pub const MAX_PLAYERS: usize = 4;
    pub const TOKENS_PER_PLAYER: usize = 4;

    pub const fn new() -> Self {
        Self {
            star_shortcuts: false,
        }
    }

    pub const fn with_star_shortcuts(star_shortcuts: bool) -> Self {
        Self { star_shortcuts }
    }
}
