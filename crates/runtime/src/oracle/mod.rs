//! Trusted randomness for the session layer.
//!
//! The engine never rolls dice itself; it accepts a [`ludo_core::DieValue`]
//! from whichever [`DiceOracle`] the session was built with.
mod dice;

pub use dice::{DiceError, DiceOracle, RandomDice, ScriptedDice};
