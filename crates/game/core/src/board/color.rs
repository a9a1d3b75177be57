/// Player color. Seats are colored in join order: red, green, yellow, blue.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Yellow, Color::Blue];

    /// Color assigned to the player joining at `seat` (0-based).
    pub const fn for_seat(seat: usize) -> Option<Color> {
        if seat < Self::ALL.len() {
            Some(Self::ALL[seat])
        } else {
            None
        }
    }

    /// Track cell where this color's tokens leave the yard.
    pub const fn entry_index(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Green => 13,
            Color::Yellow => 26,
            Color::Blue => 39,
        }
    }

    /// Encoded position of the first cell of this color's home stretch.
    pub const fn home_base(self) -> i16 {
        match self {
            Color::Red => 100,
            Color::Green => 110,
            Color::Yellow => 120,
            Color::Blue => 130,
        }
    }

    /// Inverse of [`Color::home_base`].
    pub const fn from_home_base(base: i16) -> Option<Color> {
        match base {
            100 => Some(Color::Red),
            110 => Some(Color::Green),
            120 => Some(Color::Yellow),
            130 => Some(Color::Blue),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn seats_follow_join_order() {
        assert_eq!(Color::for_seat(0), Some(Color::Red));
        assert_eq!(Color::for_seat(3), Some(Color::Blue));
        assert_eq!(Color::for_seat(4), None);
    }

    #[test]
    fn home_base_round_trips_for_every_color() {
        for color in Color::iter() {
            assert_eq!(Color::from_home_base(color.home_base()), Some(color));
        }
        assert_eq!(Color::from_home_base(105), None);
    }

    #[test]
    fn names_are_lowercase() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
        assert_eq!(Color::from_str("blue").unwrap(), Color::Blue);
    }
}
