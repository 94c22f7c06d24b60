use clap::Parser;
use dnamark::{
    data::err::OrFail,
    generate::DEFAULT_SEED,
    input::{PROMPT_DESCRIPTION, PROMPT_ID, PROMPT_NAME, Prompter, parse_sequence_length},
    pipeline::{SequenceRequest, generate_record},
};
use std::{io::stdin, num::NonZeroUsize, path::PathBuf};

/// Generate a random DNA sequence with your name spliced in, save it as
/// FASTA, and print its base composition.
///
/// Any of length, ID, description, or name not given as an option is asked
/// for interactively.
#[derive(Parser)]
#[command(name = "dnamark")]
#[command(version)]
struct Cli {
    /// Number of bases to generate
    #[arg(short, long, value_parser = parse_sequence_length)]
    length: Option<NonZeroUsize>,

    /// Sequence identifier; also names the output file
    #[arg(short, long)]
    id: Option<String>,

    /// Free-text description for the FASTA header
    #[arg(short, long)]
    description: Option<String>,

    /// Name to splice into the sequence
    #[arg(short, long)]
    name: Option<String>,

    /// Seed for the random generator
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Sequence characters per line in the output
    #[arg(short = 'w', long, default_value = "60")]
    line_width: NonZeroUsize,

    /// Directory to write `<id>.fasta` into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Log progress details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut prompter = Prompter::new(stdin().lock(), std::io::stdout());

    let length = match cli.length {
        Some(length) => length,
        None => prompter.prompt_length().unwrap_or_fail(),
    };
    let id = match cli.id {
        Some(id) => id,
        None => prompter.prompt_line(PROMPT_ID).unwrap_or_fail(),
    };
    let description = match cli.description {
        Some(description) => description,
        None => prompter.prompt_line(PROMPT_DESCRIPTION).unwrap_or_fail(),
    };
    let name = match cli.name {
        Some(name) => name,
        None => prompter.prompt_line(PROMPT_NAME).unwrap_or_fail(),
    };

    let request = SequenceRequest::new(length.get(), id, description, name)
        .with_seed(cli.seed)
        .with_line_width(cli.line_width);

    if request.label.breaks_fasta_lines() {
        log::warn!(
            "The name {:?} contains a line break; {}.fasta will not read back as a single record",
            request.label.as_str(),
            request.id
        );
    }

    let generated = generate_record(&request);
    generated
        .write(&cli.output_dir)
        .unwrap_or_die(&format!("Could not save {}", generated.file_name));

    print!("{generated}");
}
