use crate::data::types::{AnnotatedSequence, Label, Nucleotides};
use rand::Rng;
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

/// The pseudo-random generator threaded through sequence generation and label
/// insertion.
pub type SeededRng = Xoshiro256PlusPlus;

/// Seed used when none is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Creates a [`SeededRng`] from a 64-bit seed.
#[inline]
#[must_use]
pub fn seeded_rng(seed: u64) -> SeededRng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Draws `length` symbols uniformly, with replacement, from `alpha`.
///
/// The generator is advanced once per symbol, so a given seed and length
/// always produce the same sequence.
///
/// ## Panics
///
/// `alpha` must be non-empty.
#[must_use]
pub fn synthesize<R: Rng>(alpha: &[u8], length: usize, rng: &mut R) -> Nucleotides {
    assert!(!alpha.is_empty(), "Cannot draw symbols from an empty alphabet!");
    (0..length).map(|_| alpha[rng.random_range(0..alpha.len())]).collect()
}

/// Generates a random sequence of `length` symbols from `alpha` using a fresh
/// generator seeded with `seed`.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = seeded_rng(seed);
    synthesize(alpha, length, &mut rng).into_inner()
}

/// Splices the delimited `label` into `sequence` at an offset drawn uniformly
/// from `0..=sequence.len()`. Returns the annotated copy and the offset.
pub fn insert_label<R: Rng>(sequence: &Nucleotides, label: &Label, rng: &mut R) -> (AnnotatedSequence, usize) {
    let offset = rng.random_range(0..=sequence.len());
    log::debug!("Inserting label of {} bytes at offset {offset}", label.as_str().len());
    (AnnotatedSequence::new(sequence, label, offset), offset)
}
