use crate::{data::records::RecordFile, unwrap_or_return_some_err};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Error as IOError, ErrorKind, Write},
    num::NonZeroUsize,
    path::Path,
};

#[cfg(test)]
mod test;

/// The number of sequence characters written per line.
pub const DEFAULT_LINE_WIDTH: NonZeroUsize = match NonZeroUsize::new(60) {
    Some(width) => width,
    None => unreachable!(),
};

/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file.
///
/// The `name` is everything after the `>` on the header line, so for a
/// record built with [`FastaSeq::from_parts`] it is `"{id} {description}"`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

impl FastaSeq {
    /// Builds a record whose header is the identifier and description
    /// separated by a single space. Neither is validated.
    #[must_use]
    pub fn from_parts(id: &str, description: &str, sequence: impl Into<Vec<u8>>) -> Self {
        FastaSeq {
            name:     format!("{id} {description}"),
            sequence: sequence.into(),
        }
    }

    /// The identifier, which is the header up to the first space.
    #[must_use]
    pub fn id(&self) -> &str {
        self.name.split_once(' ').map_or(self.name.as_str(), |(id, _)| id)
    }

    /// Renders the record with the sequence split into lines of at most
    /// `line_width` characters, each terminated with a newline.
    ///
    /// Wrapping counts characters rather than bytes so that a multi-byte
    /// label is never split mid-character.
    #[must_use]
    pub fn to_wrapped_string(&self, line_width: NonZeroUsize) -> String {
        let sequence = String::from_utf8_lossy(&self.sequence);
        let width = line_width.get();
        let mut out = String::with_capacity(self.name.len() + sequence.len() + sequence.len() / width + 3);

        out.push('>');
        out.push_str(&self.name);
        out.push('\n');

        let mut column = 0;
        for c in sequence.chars() {
            if column == width {
                out.push('\n');
                column = 0;
            }
            out.push(c);
            column += 1;
        }
        if column > 0 {
            out.push('\n');
        }

        out
    }
}

/// Formats a FASTA record from its parts: a `>{id} {description}` header
/// followed by `sequence` wrapped at `line_width` characters.
#[must_use]
pub fn format_fasta(id: &str, description: &str, sequence: &str, line_width: NonZeroUsize) -> String {
    FastaSeq::from_parts(id, description, sequence).to_wrapped_string(line_width)
}

/// Writes `record` to `path`, wrapping the sequence at `line_width`.
///
/// ## Errors
///
/// Any IO failure is returned with the file path added to the message.
pub fn write_fasta<P: AsRef<Path>>(path: P, record: &FastaSeq, line_width: NonZeroUsize) -> std::io::Result<()> {
    let (file, path) = FastaWriter::create_file(path)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(record.to_wrapped_string(line_width).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|err| FastaWriter::new_wrapped("write error", &path, err))?;

    log::info!("Wrote {} sequence characters to '{}'", record.sequence.len(), path.display());
    Ok(())
}

struct FastaWriter;

impl RecordFile for FastaWriter {
    const RECORD_NAME: &str = "FASTA";
}

/// Structure for buffered reading of `FASTA` files.
///
/// Sequence lines are concatenated with their line breaks removed. A line
/// starting with `>` always begins a new record.
#[derive(Debug)]
pub struct FastaReader<R: std::io::Read> {
    reader:       BufReader<R>,
    buffer:       Vec<u8>,
    next_header:  Option<String>,
    first_record: bool,
}

impl<R: std::io::Read> FastaReader<R> {
    /// Creates an iterator over FASTA data, wrapping the input in a buffered
    /// reader.
    pub fn new(inner: R) -> Self {
        FastaReader {
            reader:       BufReader::new(inner),
            buffer:       Vec::new(),
            next_header:  None,
            first_record: true,
        }
    }

    fn get_error(msg: &str, header: Option<&str>) -> std::io::Result<FastaSeq> {
        if let Some(header) = header {
            Err(IOError::new(ErrorKind::InvalidData, format!("{msg} See header: {header}")))
        } else {
            Err(IOError::new(ErrorKind::InvalidData, msg))
        }
    }

    /// Reads the next line into the buffer without its line break. Returns
    /// `false` at the end of input.
    fn read_line(&mut self) -> std::io::Result<bool> {
        self.buffer.clear();
        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(false);
        }
        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }
        Ok(true)
    }

    /// Skips leading blank lines and checks that the data starts with a
    /// header.
    fn read_first_header(&mut self) -> std::io::Result<()> {
        self.first_record = false;

        loop {
            if !self.read_line()? {
                return Err(IOError::new(ErrorKind::InvalidData, "No FASTA data found!"));
            }

            if let Some(header) = self.buffer.strip_prefix(b">") {
                self.next_header = Some(String::from_utf8_lossy(header).into_owned());
                return Ok(());
            } else if !self.buffer.iter().all(u8::is_ascii_whitespace) {
                return Err(IOError::new(
                    ErrorKind::InvalidData,
                    "The FASTA file must start with a '>' symbol!",
                ));
            }
        }
    }
}

impl FastaReader<File> {
    /// Reads a fasta file into an iterator backed by a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if file or permissions do not exist, or if the file is
    /// empty. The file path is included in the error message.
    pub fn from_filename<P>(filename: P) -> std::io::Result<FastaReader<File>>
    where
        P: AsRef<Path>, {
        let file = Self::open_nonempty_file(filename)?;
        Ok(FastaReader::new(file))
    }
}

impl<R: std::io::Read> RecordFile for FastaReader<R> {
    const RECORD_NAME: &str = "FASTA";
}

/// An iterator for buffered reading of
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
impl<R: std::io::Read> Iterator for FastaReader<R> {
    type Item = std::io::Result<FastaSeq>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.first_record {
            unwrap_or_return_some_err!(self.read_first_header());
        }

        let name = self.next_header.take()?;
        let mut sequence = Vec::new();

        while unwrap_or_return_some_err!(self.read_line()) {
            if let Some(header) = self.buffer.strip_prefix(b">") {
                self.next_header = Some(String::from_utf8_lossy(header).into_owned());
                break;
            }
            sequence.extend_from_slice(&self.buffer);
        }

        if name.is_empty() {
            return Some(Self::get_error("Missing FASTA header!", None));
        }

        if sequence.is_empty() {
            return Some(Self::get_error("Missing FASTA sequence!", Some(&name)));
        }

        Some(Ok(FastaSeq { name, sequence }))
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.to_wrapped_string(DEFAULT_LINE_WIDTH))
    }
}
