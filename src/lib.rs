#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Nucleotide composition statistics.
pub mod composition;
/// Data types, alphabets, error traits, and record I/O.
pub mod data;
/// Generate random sequences and splice labels into them.
pub mod generate;
/// Interactive collection and validation of user input.
pub mod input;
/// The full generate, annotate, analyze, and format pass.
pub mod pipeline;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::composition::{CompositionReport, NucleotideCounts};
    pub use crate::data::types::{AnnotatedSequence, Label, Nucleotides};
    pub use crate::data::{
        err::OrFail,
        fasta::{DEFAULT_LINE_WIDTH, FastaReader, FastaSeq, format_fasta},
    };
    pub use crate::generate::{SeededRng, insert_label, rand_sequence, seeded_rng, synthesize};
    pub use crate::pipeline::{GeneratedRecord, SequenceRequest, generate_record, generate_record_with_rng};
}
