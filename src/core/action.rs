//! Turn actions.
//!
//! The state machine only ever sees a valid [`Action`]; anything a
//! controller cannot parse stays at the input boundary and is re-asked
//! there without touching game state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// What the active player chooses to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll the die, risking the turn total.
    Roll,
    /// Bank the turn total and end the turn.
    Hold,
}

/// An action string the console front end could not interpret.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized action {input:?}, expected 'r' to roll or 'h' to hold")]
pub struct ParseActionError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "roll" => Ok(Action::Roll),
            "h" | "hold" => Ok(Action::Hold),
            _ => Err(ParseActionError {
                input: s.trim().to_string(),
            }),
        }
    }
}
