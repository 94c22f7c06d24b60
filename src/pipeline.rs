use crate::{
    composition::CompositionReport,
    data::{
        alphas::DNA_CANONICAL_UC,
        fasta::{DEFAULT_LINE_WIDTH, FastaSeq, write_fasta},
        types::{AnnotatedSequence, Label, Nucleotides},
    },
    generate::{DEFAULT_SEED, SeededRng, insert_label, seeded_rng, synthesize},
};
use rand::Rng;
use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

/// Everything needed to generate one labelled FASTA record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SequenceRequest {
    pub length:      usize,
    pub id:          String,
    pub description: String,
    pub label:       Label,
    pub seed:        u64,
    pub line_width:  NonZeroUsize,
}

impl SequenceRequest {
    /// Creates a request with the default seed and line width.
    #[must_use]
    pub fn new(length: usize, id: impl Into<String>, description: impl Into<String>, label: impl Into<Label>) -> Self {
        SequenceRequest {
            length,
            id: id.into(),
            description: description.into(),
            label: label.into(),
            seed: DEFAULT_SEED,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: NonZeroUsize) -> Self {
        self.line_width = line_width;
        self
    }

    /// The file name the record is saved under, `<id>.fasta`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.fasta", self.id)
    }
}

/// The products of a single generation pass.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratedRecord {
    /// The synthesized bases, before annotation.
    pub sequence:   Nucleotides,
    /// A copy of `sequence` with the delimited label spliced in.
    pub annotated:  AnnotatedSequence,
    /// The number of bases preceding the label.
    pub offset:     usize,
    /// Statistics over `sequence`, never `annotated`.
    pub report:     CompositionReport,
    /// The record to be written.
    pub record:     FastaSeq,
    /// `<id>.fasta`
    pub file_name:  String,
    pub line_width: NonZeroUsize,
}

/// Runs the pass with a generator seeded from `request.seed`.
#[must_use]
pub fn generate_record(request: &SequenceRequest) -> GeneratedRecord {
    log::debug!("Seeding generator with {}", request.seed);
    let mut rng: SeededRng = seeded_rng(request.seed);
    generate_record_with_rng(request, &mut rng)
}

/// Runs the pass with a caller-supplied generator.
///
/// All sequence draws are taken from `rng` before the insertion offset is
/// drawn, so the result depends only on the generator state and the request.
#[must_use]
pub fn generate_record_with_rng<R: Rng>(request: &SequenceRequest, rng: &mut R) -> GeneratedRecord {
    let sequence = synthesize(DNA_CANONICAL_UC, request.length, rng);
    let (annotated, offset) = insert_label(&sequence, &request.label, rng);
    let report = CompositionReport::analyze(&sequence);
    let record = FastaSeq::from_parts(&request.id, &request.description, annotated.as_bytes());

    log::debug!(
        "Generated {} bases; label at offset {offset}; annotated length {}",
        sequence.len(),
        annotated.len()
    );

    GeneratedRecord {
        sequence,
        annotated,
        offset,
        report,
        record,
        file_name: request.file_name(),
        line_width: request.line_width,
    }
}

impl GeneratedRecord {
    /// The FASTA text exactly as it is written to disk.
    #[must_use]
    pub fn fasta_text(&self) -> String {
        self.record.to_wrapped_string(self.line_width)
    }

    /// Writes `<dir>/<id>.fasta` in a single pass, replacing any existing
    /// file, and returns its path.
    ///
    /// ## Errors
    ///
    /// Any IO failure is returned with the file path added to the message.
    pub fn write<P: AsRef<Path>>(&self, dir: P) -> std::io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        write_fasta(&path, &self.record, self.line_width)?;
        Ok(path)
    }
}

/// The console report printed after the file is saved.
impl std::fmt::Display for GeneratedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "The sequence was saved to the file {}", self.file_name)?;
        writeln!(f, "Sequence statistics:")?;
        write!(f, "{}", self.report)?;
        writeln!(f, "%CG: {:.1}", self.report.gc_percent())?;
        writeln!(f, "CG/AT ratio: {:.1}", self.report.cg_ratio())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::fasta::FastaReader;
    use std::io::Cursor;

    #[test]
    fn ten_bases_with_ada() {
        let request = SequenceRequest::new(10, "seq1", "test run", "Ada");
        let generated = generate_record(&request);

        assert_eq!(generated.sequence.len(), 10);
        assert!(generated.annotated.to_str_lossy().contains("[Ada]"));
        assert!(generated.offset <= 10);
        assert_eq!(generated.annotated.strip_label(), generated.sequence);
        assert_eq!(generated.record.name, "seq1 test run");
        assert_eq!(generated.report.counts().total(), 10);
        assert_eq!(generated.file_name, "seq1.fasta");
    }

    #[test]
    fn deterministic_for_seed() {
        let request = SequenceRequest::new(250, "s", "d", "Grace").with_seed(1234);
        assert_eq!(generate_record(&request), generate_record(&request));
        assert_eq!(generate_record(&request).fasta_text(), generate_record(&request).fasta_text());
    }

    #[test]
    fn matches_manual_draw_order() {
        let request = SequenceRequest::new(40, "s", "d", "x").with_seed(9);
        let generated = generate_record(&request);

        let mut rng = seeded_rng(9);
        let sequence = synthesize(DNA_CANONICAL_UC, 40, &mut rng);
        let (annotated, offset) = insert_label(&sequence, &Label::new("x"), &mut rng);

        assert_eq!(generated.sequence, sequence);
        assert_eq!(generated.annotated, annotated);
        assert_eq!(generated.offset, offset);
    }

    #[test]
    fn seeded_snapshot() {
        let generated = generate_record(&SequenceRequest::new(10, "s", "d", "Ada"));
        assert_eq!(generated.sequence.as_bytes(), b"TCTGTGAGAT");
        assert_eq!(generated.offset, 6);
        assert_eq!(generated.annotated.to_str_lossy(), "TCTGTG[Ada]AGAT");
        assert_eq!(generated.fasta_text(), ">s d\nTCTGTG[Ada]AGAT\n");
    }

    #[test]
    fn length_one() {
        let generated = generate_record(&SequenceRequest::new(1, "one", "d", "n"));
        assert_eq!(generated.sequence.len(), 1);
        assert!(generated.offset <= 1);
        assert_eq!(generated.annotated.len(), 4);
    }

    #[test]
    fn text_round_trip() {
        let request = SequenceRequest::new(500, "rt", "round trip", "Rosalind Franklin");
        let generated = generate_record(&request);

        let mut reader = FastaReader::new(Cursor::new(generated.fasta_text()));
        let record = reader.next().unwrap().unwrap();
        assert_eq!(record.sequence, generated.annotated.as_bytes());
        assert_eq!(record.name, "rt round trip");
        assert!(reader.next().is_none());
    }

    #[test]
    fn summary_lines() {
        let generated = generate_record(&SequenceRequest::new(20, "sum", "d", "L"));
        let summary = generated.to_string();
        let lines: Vec<_> = summary.lines().collect();

        assert_eq!(lines[0], "The sequence was saved to the file sum.fasta");
        assert_eq!(lines[1], "Sequence statistics:");
        assert!(lines[2].starts_with("A: ") && lines[2].ends_with('%'));
        assert!(lines[5].starts_with("T: "));
        assert_eq!(lines[6], format!("%CG: {:.1}", generated.report.gc_percent()));
        assert!(lines[7].starts_with("CG/AT ratio: "));
        assert_eq!(lines.len(), 8);
    }
}
