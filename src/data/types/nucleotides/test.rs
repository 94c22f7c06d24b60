use super::*;

#[test]
fn conversions_agree() {
    let from_vec = Nucleotides::from(b"GATTACA".to_vec());
    let from_slice = Nucleotides::from(b"GATTACA".as_slice());
    let from_array = Nucleotides::from(b"GATTACA");
    let collected: Nucleotides = b"GATTACA".iter().copied().collect();

    assert_eq!(from_vec, from_slice);
    assert_eq!(from_vec, from_array);
    assert_eq!(from_vec, collected);
    assert_eq!(from_vec.len(), 7);
}

#[test]
fn display_and_str() {
    let s: Nucleotides = b"ACGT".into();
    assert_eq!(s.to_string(), "ACGT");
    assert_eq!(s.as_str(), Some("ACGT"));
    assert!(Nucleotides::new().is_empty());
}
