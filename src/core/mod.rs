//! Core building blocks: players, the die, roll sources, actions.
//!
//! These are the leaf types the game layer orchestrates. None of them
//! know about turn order or the win threshold.

pub mod action;
pub mod die;
pub mod player;
pub mod rng;

pub use action::{Action, ParseActionError};
pub use die::{Die, BUST_FACE, DIE_SIDES};
pub use player::{Player, PlayerId};
pub use rng::{GameRng, RollSource, ScriptedRolls};
