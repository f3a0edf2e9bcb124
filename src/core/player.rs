//! Player identity and scoring state.
//!
//! ## PlayerId
//!
//! Type-safe index into the game's fixed roster, in the style of a
//! small opaque newtype. Indices are 0-based; the display label is
//! 1-based to match the seat names.
//!
//! ## Player
//!
//! A player's banked `score` and in-flight `turn_total`. The fields
//! are private so that banked points can only grow through [`Player::hold`]:
//! nothing else moves points from the turn to the score.

use serde::{Deserialize, Serialize};

/// Index of a player in the turn order, supporting up to 255 seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` seats.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 as u16 + 1)
    }
}

/// One seat at the table: name, banked score, and current turn total.
///
/// ## Example
///
/// ```
/// use pig_dice::core::Player;
///
/// let mut player = Player::new("Player 1");
/// player.add_to_turn_total(4);
/// player.add_to_turn_total(5);
/// assert_eq!(player.turn_total(), 9);
///
/// player.hold();
/// assert_eq!(player.score(), 9);
/// assert_eq!(player.turn_total(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    score: u32,
    turn_total: u32,
}

impl Player {
    /// Create a player with zero score.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            turn_total: 0,
        }
    }

    /// The player's name, fixed at creation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Banked score. Only [`Player::hold`] increases it.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Points accumulated in the current turn, not yet banked.
    #[must_use]
    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    /// Add a rolled face to the turn total.
    ///
    /// The caller enforces that `face` is a valid die face.
    pub fn add_to_turn_total(&mut self, face: u8) {
        debug_assert!((1..=6).contains(&face), "die face out of range: {face}");
        self.turn_total += u32::from(face);
    }

    /// Forfeit the current turn's points.
    pub fn reset_turn_total(&mut self) {
        self.turn_total = 0;
    }

    /// Bank the turn total into the score and start a fresh turn.
    pub fn hold(&mut self) {
        self.score += self.turn_total;
        self.reset_turn_total();
    }

    /// Zero the banked score. Used only when a new game starts.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
