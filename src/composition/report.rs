#![allow(clippy::cast_precision_loss)]

use super::NucleotideCounts;
use crate::data::types::Nucleotides;

/// Per-base counts and percentages for a generated sequence, along with the
/// derived C+G to A+T ratio.
///
/// The report is always built from the sequence *before* a label is spliced
/// in, so the label never contributes to any statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositionReport {
    counts: NucleotideCounts,
    length: usize,
}

impl CompositionReport {
    /// Tallies each base of `sequence` by exact match.
    #[must_use]
    pub fn analyze(sequence: &Nucleotides) -> Self {
        CompositionReport {
            counts: NucleotideCounts::from_seq(sequence),
            length: sequence.len(),
        }
    }

    #[inline]
    #[must_use]
    pub fn counts(&self) -> &NucleotideCounts {
        &self.counts
    }

    /// Length of the analyzed sequence.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Count of `base`, or zero if it is not in the alphabet.
    #[inline]
    #[must_use]
    pub fn count(&self, base: u8) -> usize {
        self.counts.get_count(base).unwrap_or_default()
    }

    /// `count / length * 100`. An empty sequence yields zero.
    #[must_use]
    pub fn percentage(&self, base: u8) -> f64 {
        self.percent_of_length(self.count(base))
    }

    /// `(C + G) / (A + T) * 100`, or zero when there are no A or T bases.
    #[must_use]
    pub fn cg_ratio(&self) -> f64 {
        let at = self.counts.a() + self.counts.t();
        if at > 0 {
            (self.counts.c() + self.counts.g()) as f64 / at as f64 * 100.0
        } else {
            0.0
        }
    }

    /// `(C + G) / length * 100`, the percentage of the sequence that is C or G.
    #[must_use]
    pub fn gc_percent(&self) -> f64 {
        self.percent_of_length(self.counts.c() + self.counts.g())
    }

    /// Iterates over `(base, count, percentage)` in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize, f64)> + '_ {
        self.counts
            .iter()
            .map(move |(base, count)| (base, count, self.percent_of_length(count)))
    }

    #[inline]
    fn percent_of_length(&self, count: usize) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            count as f64 / self.length as f64 * 100.0
        }
    }
}

/// One line per base, e.g. `A: 25.0%`.
impl std::fmt::Display for CompositionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (base, _, percent) in self.iter() {
            writeln!(f, "{}: {percent:.1}%", char::from(base))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::types::{AnnotatedSequence, Label};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn percentages() {
        let report = CompositionReport::analyze(&b"AACGTTTG".into());
        assert!(close(report.percentage(b'A'), 25.0));
        assert!(close(report.percentage(b'C'), 12.5));
        assert!(close(report.percentage(b'G'), 25.0));
        assert!(close(report.percentage(b'T'), 37.5));
        assert!(close(report.gc_percent(), 37.5));
        assert_eq!(report.length(), 8);
    }

    #[test]
    fn cg_ratio_regular() {
        let report = CompositionReport::analyze(&b"ACGTTG".into());
        // C + G = 3, A + T = 3
        assert!(close(report.cg_ratio(), 100.0));

        let report = CompositionReport::analyze(&b"AAATC".into());
        assert!(close(report.cg_ratio(), 25.0));
    }

    #[test]
    fn cg_ratio_zero_denominator() {
        for s in [&b"GCGC"[..], b"C", b"GGGGGGGG"] {
            let report = CompositionReport::analyze(&s.into());
            assert_eq!(report.cg_ratio(), 0.0);
        }
    }

    #[test]
    fn empty_sequence_is_all_zero() {
        let report = CompositionReport::analyze(&Nucleotides::new());
        assert!(report.iter().all(|(_, count, pct)| count == 0 && pct == 0.0));
        assert_eq!(report.cg_ratio(), 0.0);
    }

    #[test]
    fn label_is_excluded() {
        let s: Nucleotides = b"ACGTACGTAA".into();
        let annotated = AnnotatedSequence::new(&s, &Label::new("CAT GATTACA"), 4);

        assert_eq!(
            CompositionReport::analyze(&s),
            CompositionReport::analyze(&annotated.strip_label())
        );
    }

    #[test]
    fn display_one_decimal() {
        let report = CompositionReport::analyze(&b"AAC".into());
        assert_eq!(report.to_string(), "A: 66.7%\nC: 33.3%\nG: 0.0%\nT: 0.0%\n");
    }
}
