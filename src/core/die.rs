//! The six-sided die shared by all players.

use crate::core::rng::{GameRng, RollSource};

/// Number of faces on the die.
pub const DIE_SIDES: u8 = 6;

/// The face that ends a turn with no points banked.
pub const BUST_FACE: u8 = 1;

/// A six-sided die over an injectable roll source.
///
/// One die is shared across the whole game. The last rolled face is
/// cached for display; it carries no game-rule weight.
///
/// ## Example
///
/// ```
/// use pig_dice::core::{Die, ScriptedRolls};
///
/// let mut die = Die::new(ScriptedRolls::sequence([4]));
/// assert_eq!(die.last(), None);
/// assert_eq!(die.roll(), 4);
/// assert_eq!(die.last(), Some(4));
/// ```
#[derive(Clone, Debug)]
pub struct Die<R = GameRng> {
    source: R,
    last: Option<u8>,
}

impl Die<GameRng> {
    /// Create a die backed by a seeded [`GameRng`].
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl<R: RollSource> Die<R> {
    /// Create a die over the given roll source.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self { source, last: None }
    }

    /// Roll the die, returning a face in `1..=6`.
    pub fn roll(&mut self) -> u8 {
        let face = self.source.next_face(DIE_SIDES);
        debug_assert!((1..=DIE_SIDES).contains(&face));
        self.last = Some(face);
        face
    }

    /// The most recently rolled face, if any.
    #[must_use]
    pub fn last(&self) -> Option<u8> {
        self.last
    }
}
