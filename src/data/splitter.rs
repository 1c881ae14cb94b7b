// ============================================================
// Layer 4 — Paragraph Splitter
// ============================================================
// Divides cleaned text into paragraphs on the literal "\n\n"
// boundary and runs the language analyzer over each of them
// and over the whole text.
//
// Blank paragraphs stay in the list, in document order, so
// the summarizer's per-paragraph quotas line up with their
// position. They are never sent to the analyzer.
//
// Reference: Rust Book §8 (Strings), §13 (Iterators)

use crate::domain::document::{Document, Paragraph};
use crate::domain::language::Analysis;
use crate::domain::traits::LanguageAnalyzer;

pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Split text into paragraph slices. Always yields at least one
/// (possibly empty) slice, like `str::split`.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split(PARAGRAPH_BREAK).collect()
}

/// Build an analysed Document from cleaned text.
pub fn analyze_document<A: LanguageAnalyzer + ?Sized>(
    source:   &str,
    text:     &str,
    analyzer: &A,
) -> Document {
    let paragraphs: Vec<Paragraph> = split_paragraphs(text)
        .into_iter()
        .map(|p| {
            let analysis = if p.trim().is_empty() {
                Analysis::default()
            } else {
                analyzer.analyze(p)
            };
            Paragraph::new(p, analysis)
        })
        .collect();

    let analysis = if text.trim().is_empty() {
        Analysis::default()
    } else {
        analyzer.analyze(text)
    };

    tracing::debug!(
        "Split '{}' into {} paragraphs ({} blank)",
        source,
        paragraphs.len(),
        paragraphs.iter().filter(|p| p.is_blank()).count()
    );

    Document::new(source, text, paragraphs, analysis)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::fixtures::FixtureAnalyzer;

    #[test]
    fn test_split_on_blank_lines() {
        let parts = split_paragraphs("one\n\ntwo\nstill two\n\nthree");
        assert_eq!(parts, vec!["one", "two\nstill two", "three"]);
    }

    #[test]
    fn test_blank_paragraphs_are_kept_in_place() {
        let parts = split_paragraphs("\n\n\n\nreal");
        assert_eq!(parts, vec!["", "", "real"]);
    }

    #[test]
    fn test_blank_paragraphs_get_empty_analysis() {
        let doc = analyze_document("t", "  \n\nAlpha beta. Gamma delta.", &FixtureAnalyzer::new());
        assert_eq!(doc.paragraphs.len(), 2);
        assert!(doc.paragraphs[0].is_blank());
        assert_eq!(doc.paragraphs[0].sentence_count(), 0);
        assert_eq!(doc.paragraphs[1].sentence_count(), 2);
        assert_eq!(doc.analysis.sentences.len(), 2);
    }

    #[test]
    fn test_empty_text_is_empty_document() {
        let doc = analyze_document("t", "", &FixtureAnalyzer::new());
        assert!(doc.is_empty());
    }
}
