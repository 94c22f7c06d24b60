//! ## Data types, alphabets, and record I/O.
//!
//! A generated sequence passes through three types:
//! - [`Nucleotides`] holds the synthesized bases and is never mutated after
//!   generation.
//! - [`Label`] is the opaque marker text supplied by the user.
//! - [`AnnotatedSequence`] is a derived copy of the bases with the label
//!   spliced in, wrapped in [`LABEL_OPEN`] and [`LABEL_CLOSE`].
//!
//! ## IO Errors
//!
//! Enum-style error types such as [`LengthError`] are used where a caller is
//! expected to match on the failure. For working with files and records,
//! [`std::io::Error`] is used instead, with the file path added to the message
//! and the original error kept as its [`Error::source`]. The binary unwraps
//! these with [`unwrap_or_fail`] and [`unwrap_or_die`].
//!
//! [`Nucleotides`]: types::Nucleotides
//! [`Label`]: types::Label
//! [`AnnotatedSequence`]: types::AnnotatedSequence
//! [`LABEL_OPEN`]: alphas::LABEL_OPEN
//! [`LABEL_CLOSE`]: alphas::LABEL_CLOSE
//! [`LengthError`]: crate::input::LengthError
//! [`Error::source`]: std::error::Error::source
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for records types used for I/O.
pub mod records;
/// A module for the sequence and label types.
pub mod types;

/// Alphabets and delimiters.
mod constants;

pub use constants::alphas;
pub use records::fasta;
