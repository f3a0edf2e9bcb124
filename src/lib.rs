//! # pig-dice
//!
//! The dice game Pig as a deterministic, fully testable turn engine.
//!
//! ## Rules
//!
//! Players take turns rolling a shared six-sided die. Each roll of
//! 2..=6 adds to the turn total; rolling a 1 busts, forfeiting the
//! turn total. Holding banks the turn total into the player's score.
//! The first player to hold at a score of 100 or more wins.
//!
//! ## Design Principles
//!
//! 1. **Injectable randomness**: The die takes any [`core::RollSource`].
//!    Production uses a seeded ChaCha8 RNG; tests script exact face
//!    sequences, so every rule has a deterministic test.
//!
//! 2. **No I/O in the core**: Decisions come in through
//!    [`game::ActionProvider`] and observations go out through
//!    [`game::EventSink`]. The terminal front end is one implementation
//!    of each, not a privileged caller.
//!
//! 3. **Invariants by construction**: Banked scores only grow through
//!    `hold`, the winner slot is written at most once, and player
//!    counts outside 2..=255 are rejected before a game exists.
//!
//! ## Modules
//!
//! - `core`: players, the die, roll sources, actions
//! - `game`: the turn state machine, events, controllers, errors

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, Die, GameRng, ParseActionError, Player, PlayerId, RollSource, ScriptedRolls,
    BUST_FACE, DIE_SIDES,
};

pub use crate::game::{
    ActionProvider, EventSink, Game, GameError, GameEvent, HoldAt, ScriptedActions, Standing,
    TurnOutcome, WIN_THRESHOLD,
};
