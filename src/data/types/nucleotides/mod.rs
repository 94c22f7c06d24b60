#[cfg(test)]
mod test;

/// [`Nucleotides`] is a transparent, new-type wrapper around [`Vec<u8>`] that
/// holds a synthesized DNA sequence. Once generated it is never mutated;
/// annotation produces a separate [`AnnotatedSequence`].
///
/// [`AnnotatedSequence`]: super::AnnotatedSequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Nucleotides(pub(crate) Vec<u8>);

impl Nucleotides {
    /// Create a new `Nucleotides` empty object.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Nucleotides(Vec::new())
    }

    /// The length of the stored sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the sequence empty?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtains the bytes as a slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Create an iterator over the nucleotides as `u8`.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.0.iter()
    }

    /// Returns the bases as a string slice, or `None` if they are not UTF-8.
    /// Sequences built by [`synthesize`] are always ASCII.
    ///
    /// [`synthesize`]: crate::generate::synthesize
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Consumes the wrapper and returns the inner buffer.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Nucleotides {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Nucleotides {
    #[inline]
    fn from(vec: Vec<u8>) -> Self {
        Nucleotides(vec)
    }
}

impl From<&[u8]> for Nucleotides {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Nucleotides(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Nucleotides {
    #[inline]
    fn from(bytes: &[u8; N]) -> Self {
        Nucleotides(bytes.to_vec())
    }
}

impl FromIterator<u8> for Nucleotides {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Nucleotides(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Nucleotides {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Nucleotides {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
