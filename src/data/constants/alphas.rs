/// Canonical uppercase nucleotide bases, in the order used for reporting.
pub const DNA_CANONICAL_UC: &[u8; 4] = b"ACGT";

/// Opens a label spliced into a sequence.
pub const LABEL_OPEN: u8 = b'[';
/// Closes a label spliced into a sequence.
pub const LABEL_CLOSE: u8 = b']';
