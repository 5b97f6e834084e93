//! Face generation for die rolls.
//!
//! The only source of randomness in the program. Dice never talk to an RNG
//! directly — they draw from a [`FaceSource`], so production code injects a
//! thread-local RNG while tests inject a scripted sequence and the CLI can
//! inject a seeded one for reproducible rolls.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Number of faces on every die.
pub const SIDES: u8 = 6;

/// A supplier of die faces, uniform over `1..=SIDES`.
pub trait FaceSource {
    /// Draw the next face.
    fn next_face(&mut self) -> u8;
}

/// [`FaceSource`] backed by any [`rand::Rng`].
#[derive(Debug)]
pub struct RngFaces<R: Rng> {
    rng: R,
}

impl RngFaces<ThreadRng> {
    /// The default production source: the thread-local RNG.
    pub fn thread_local() -> Self {
        RngFaces { rng: rand::rng() }
    }
}

impl RngFaces<StdRng> {
    /// A deterministic source — equal seeds yield equal face sequences.
    pub fn seeded(seed: u64) -> Self {
        RngFaces {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> FaceSource for RngFaces<R> {
    fn next_face(&mut self) -> u8 {
        self.rng.random_range(1..=SIDES)
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

/// Scripted face sequence for deterministic tests. Cycles when exhausted.
#[cfg(test)]
pub(crate) struct FixedFaces {
    faces: Vec<u8>,
    next: usize,
}

#[cfg(test)]
impl FixedFaces {
    pub(crate) fn new(faces: &[u8]) -> Self {
        assert!(!faces.is_empty(), "FixedFaces needs at least one face");
        FixedFaces {
            faces: faces.to_vec(),
            next: 0,
        }
    }
}

#[cfg(test)]
impl FaceSource for FixedFaces {
    fn next_face(&mut self) -> u8 {
        let face = self.faces[self.next];
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}

// ============================================================================
// TESTS
// ============================================================================
