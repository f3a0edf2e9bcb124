//! Deterministic roll sources.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: The die takes any [`RollSource`], so tests can
//!   substitute a scripted sequence of faces for real randomness
//!
//! ## Test Usage
//!
//! ```
//! use pig_dice::core::{RollSource, ScriptedRolls};
//!
//! let mut rolls = ScriptedRolls::sequence([3, 1, 5]);
//! assert_eq!(rolls.next_face(6), 3);
//! assert_eq!(rolls.next_face(6), 1);
//! assert_eq!(rolls.next_face(6), 5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of die faces.
///
/// `next_face(sides)` must return a value in `1..=sides`. Production
/// code uses [`GameRng`]; tests use [`ScriptedRolls`].
pub trait RollSource {
    /// Produce the next face for a die with the given number of sides.
    fn next_face(&mut self, sides: u8) -> u8;
}

/// Seeded RNG backing the die in real games.
///
/// Uses ChaCha8 for speed while keeping the sequence fully determined
/// by the seed, so a game can be replayed exactly.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RollSource for GameRng {
    fn next_face(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides)
    }
}

/// A scripted roll source for deterministic tests.
///
/// Yields a fixed sequence of faces, or repeats a single face forever.
/// A finite sequence panics when exhausted: a test that rolls more
/// times than it scripted is broken and should fail loudly.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    faces: Vec<u8>,
    next: usize,
    cycle: bool,
}

impl ScriptedRolls {
    /// Yield the given faces in order, panicking once they run out.
    #[must_use]
    pub fn sequence(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            next: 0,
            cycle: false,
        }
    }

    /// Yield the same face forever.
    #[must_use]
    pub fn repeating(face: u8) -> Self {
        Self {
            faces: vec![face],
            next: 0,
            cycle: true,
        }
    }

    /// Number of scripted faces not yet consumed.
    ///
    /// Always reports 1 for a repeating source.
    #[must_use]
    pub fn remaining(&self) -> usize {
        if self.cycle {
            1
        } else {
            self.faces.len() - self.next
        }
    }
}

impl RollSource for ScriptedRolls {
    fn next_face(&mut self, sides: u8) -> u8 {
        assert!(
            self.next < self.faces.len(),
            "scripted roll sequence exhausted after {} faces",
            self.faces.len()
        );

        let face = self.faces[self.next];
        assert!(
            (1..=sides).contains(&face),
            "scripted face {} out of range 1..={}",
            face,
            sides
        );

        self.next += 1;
        if self.cycle && self.next == self.faces.len() {
            self.next = 0;
        }
        face
    }
}
