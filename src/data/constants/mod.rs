/// Alphabets used for generating sequences, and the delimiters that mark a
/// spliced label.
pub mod alphas;
