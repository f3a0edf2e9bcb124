//! The orchestration layer: the turn state machine and its seams.
//!
//! [`Game`] drives turns by asking an [`ActionProvider`] for roll/hold
//! decisions and publishing [`GameEvent`]s to an [`EventSink`]. Both
//! seams are traits, so the same state machine serves the terminal
//! front end, scripted tests, and bots.

pub mod controller;
pub mod error;
pub mod events;
pub mod state;

pub use controller::{ActionProvider, HoldAt, ScriptedActions};
pub use error::GameError;
pub use events::{EventSink, GameEvent, Standing};
pub use state::{Game, TurnOutcome, WIN_THRESHOLD};
