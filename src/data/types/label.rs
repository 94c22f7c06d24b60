use super::Nucleotides;
use crate::data::alphas::{LABEL_CLOSE, LABEL_OPEN};
use std::borrow::Cow;

/// An opaque, user-supplied marker. The text is never checked against the
/// nucleotide alphabet and may contain any characters.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Label(String);

impl Label {
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Label(text.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label wrapped in its delimiter pair, e.g. `[Ada]`.
    #[must_use]
    pub fn delimited(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 2);
        out.push(char::from(LABEL_OPEN));
        out.push_str(&self.0);
        out.push(char::from(LABEL_CLOSE));
        out
    }

    /// Whether the label holds a line break. Such a label splits the FASTA
    /// record it is written into, so the file no longer reads back as one
    /// record.
    #[inline]
    #[must_use]
    pub fn breaks_fasta_lines(&self) -> bool {
        self.0.contains(['\n', '\r'])
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::new(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label(text)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A [`Nucleotides`] sequence with a delimited [`Label`] spliced in at
/// `offset`. This is a derived copy; the source sequence is left untouched.
///
/// The bytes are stored as given, so `offset` counts bases even when the
/// source holds bytes that are not valid UTF-8.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AnnotatedSequence {
    bytes:      Vec<u8>,
    offset:     usize,
    marker_len: usize,
}

impl AnnotatedSequence {
    /// Splices `label` into `sequence` before the base at `offset`.
    ///
    /// ## Panics
    ///
    /// `offset` must be no greater than the length of `sequence`.
    #[must_use]
    pub fn new(sequence: &Nucleotides, label: &Label, offset: usize) -> Self {
        let (head, tail) = sequence.as_bytes().split_at(offset);
        let marker = label.delimited();

        let mut bytes = Vec::with_capacity(sequence.len() + marker.len());
        bytes.extend_from_slice(head);
        bytes.extend_from_slice(marker.as_bytes());
        bytes.extend_from_slice(tail);

        AnnotatedSequence {
            bytes,
            offset,
            marker_len: marker.len(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The sequence as text. Borrowed unless the bases were not UTF-8.
    #[inline]
    #[must_use]
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// The number of bases preceding the label.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The length in characters, including the delimited label.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.to_str_lossy().chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The delimited label as it appears in the sequence.
    #[inline]
    #[must_use]
    pub fn marker(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes[self.offset..self.offset + self.marker_len])
    }

    /// Removes the delimited label, recovering the original bases.
    #[must_use]
    pub fn strip_label(&self) -> Nucleotides {
        let mut out = Vec::with_capacity(self.bytes.len() - self.marker_len);
        out.extend_from_slice(&self.bytes[..self.offset]);
        out.extend_from_slice(&self.bytes[self.offset + self.marker_len..]);
        Nucleotides(out)
    }
}

impl std::fmt::Display for AnnotatedSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.to_str_lossy())
    }
}
