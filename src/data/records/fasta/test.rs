use super::*;
use std::io::Cursor;

fn width(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn header_line() {
    let formatted = format_fasta("seq1", "a random sequence", "ACGT", DEFAULT_LINE_WIDTH);
    assert_eq!(formatted, ">seq1 a random sequence\nACGT\n");
}

#[test]
fn empty_description_keeps_space() {
    let formatted = format_fasta("seq1", "", "ACGT", DEFAULT_LINE_WIDTH);
    assert_eq!(formatted, ">seq1 \nACGT\n");
}

#[test]
fn wrap_125_at_60() {
    let sequence = "A".repeat(125);
    let formatted = format_fasta("id", "desc", &sequence, DEFAULT_LINE_WIDTH);

    let lines: Vec<_> = formatted.lines().skip(1).map(str::len).collect();
    assert_eq!(lines, vec![60, 60, 5]);
    assert!(formatted.ends_with("AAAAA\n"));
}

#[test]
fn wrap_exact_multiple() {
    let sequence = "C".repeat(120);
    let formatted = format_fasta("id", "desc", &sequence, DEFAULT_LINE_WIDTH);
    let lines: Vec<_> = formatted.lines().skip(1).map(str::len).collect();
    assert_eq!(lines, vec![60, 60]);
    assert!(!formatted.ends_with("\n\n"));
}

#[test]
fn wrap_counts_characters() {
    let formatted = format_fasta("id", "d", "AC[Zoë]GT", width(4));
    assert_eq!(formatted, ">id d\nAC[Z\noë]G\nT\n");
}

#[test]
fn wrap_width_one() {
    assert_eq!(format_fasta("x", "y", "ACG", width(1)), ">x y\nA\nC\nG\n");
}

#[test]
fn id_from_name() {
    let record = FastaSeq::from_parts("seq_7", "some words here", b"A".to_vec());
    assert_eq!(record.id(), "seq_7");

    let bare = FastaSeq {
        name:     "lonely".to_string(),
        sequence: b"A".to_vec(),
    };
    assert_eq!(bare.id(), "lonely");
}

#[test]
fn display_uses_default_width() {
    let record = FastaSeq::from_parts("s", "d", "G".repeat(61));
    assert_eq!(record.to_string(), format!(">s d\n{}\nG\n", "G".repeat(60)));
}

#[test]
fn read_wrapped_record() {
    let text = format_fasta("seq1", "test", &format!("{}[Ada]{}", "T".repeat(58), "G".repeat(70)), DEFAULT_LINE_WIDTH);
    let mut reader = FastaReader::new(Cursor::new(text));

    let record = reader.next().unwrap().unwrap();
    assert_eq!(record.name, "seq1 test");
    assert_eq!(record.sequence.len(), 133);
    assert!(String::from_utf8_lossy(&record.sequence).contains("[Ada]"));
    assert!(reader.next().is_none());
}

#[test]
fn read_multiple_records() {
    let mut reader = FastaReader::new(Cursor::new("\n\n>seq1\r\nGAD GS\r\n\r\nFDS\n>seq2\nAC\nGT"));

    let record1 = reader.next().unwrap().unwrap();
    assert_eq!(record1.name, "seq1");
    assert_eq!(record1.sequence, b"GAD GSFDS");

    let record2 = reader.next().unwrap().unwrap();
    assert_eq!(record2.name, "seq2");
    assert_eq!(record2.sequence, b"ACGT");

    assert!(reader.next().is_none());
}

#[test]
fn empty_file() {
    let mut reader = FastaReader::new(Cursor::new(""));

    assert_eq!(reader.next().unwrap().unwrap_err().to_string(), "No FASTA data found!");

    // Ensure iterator terminates
    assert!(reader.count() < 100);
}

#[test]
fn missing_header() {
    let mut reader = FastaReader::new(Cursor::new("ATGC"));

    assert_eq!(
        reader.next().unwrap().unwrap_err().to_string(),
        "The FASTA file must start with a '>' symbol!"
    );

    // Ensure iterator terminates
    assert!(reader.count() < 100);
}

#[test]
fn empty_header() {
    let mut reader = FastaReader::new(Cursor::new(">\nATGC"));
    assert_eq!(reader.next().unwrap().unwrap_err().to_string(), "Missing FASTA header!");
    assert!(reader.count() < 100);
}

#[test]
fn empty_sequence() {
    let mut reader = FastaReader::new(Cursor::new(">seq1\n>seq2\nGCAT\n"));

    assert_eq!(
        reader.next().unwrap().unwrap_err().to_string(),
        "Missing FASTA sequence! See header: seq1"
    );

    let record2 = reader.next().unwrap().unwrap();
    assert_eq!(record2.sequence, b"GCAT");
    assert!(reader.next().is_none());
}

#[test]
fn missing_file_names_path() {
    let err = FastaReader::from_filename("definitely/not/here.fasta").unwrap_err();
    assert!(err.to_string().contains("definitely/not/here.fasta"));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
