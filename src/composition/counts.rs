use crate::data::alphas::DNA_CANONICAL_UC;
use std::ops::AddAssign;

/// Nucleotide count statistics for A, C, G, and T, stored in the order of
/// [`DNA_CANONICAL_UC`]. Bytes outside that alphabet are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NucleotideCounts {
    inner: [usize; 4],
}

impl NucleotideCounts {
    #[must_use]
    pub fn new() -> Self {
        NucleotideCounts { inner: [0; 4] }
    }

    /// Tallies every base in `seq`.
    #[must_use]
    pub fn from_seq<Q: AsRef<[u8]>>(seq: Q) -> Self {
        let mut counts = Self::new();
        counts.tally_from_seq(seq);
        counts
    }

    /// Increments the counts using the bytes in `seq`.
    #[inline]
    pub fn tally_from_seq<Q: AsRef<[u8]>>(&mut self, seq: Q) {
        for &byte in seq.as_ref() {
            *self += byte;
        }
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [usize; 4] {
        self.inner
    }

    #[inline]
    #[must_use]
    pub fn a(&self) -> usize {
        self.inner[0]
    }
    #[inline]
    #[must_use]
    pub fn c(&self) -> usize {
        self.inner[1]
    }
    #[inline]
    #[must_use]
    pub fn g(&self) -> usize {
        self.inner[2]
    }
    #[inline]
    #[must_use]
    pub fn t(&self) -> usize {
        self.inner[3]
    }

    /// Retrieves the count of a base, or `None` if it is not in the alphabet.
    #[inline]
    #[must_use]
    pub fn get_count(&self, base: u8) -> Option<usize> {
        index_of(base).map(|i| self.inner[i])
    }

    /// The number of classified bases.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.inner.iter().sum()
    }

    /// Iterates over `(base, count)` in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        DNA_CANONICAL_UC.iter().copied().zip(self.inner.iter().copied())
    }
}

#[inline]
fn index_of(base: u8) -> Option<usize> {
    DNA_CANONICAL_UC.iter().position(|&b| b == base)
}

impl AddAssign<u8> for NucleotideCounts {
    #[inline]
    fn add_assign(&mut self, base: u8) {
        if let Some(i) = index_of(base) {
            self.inner[i] += 1;
        }
    }
}
