pub mod label;
pub mod nucleotides;

pub use label::{AnnotatedSequence, Label};
pub use nucleotides::Nucleotides;
