// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// A cleaned document and everything the analyzer derived from
// it: the whole-text analysis (used by the quiz) and one
// analysis per paragraph (used by the summarizer and the
// flashcards). Built once per request, never mutated after.

use crate::domain::language::Analysis;

/// A blank-line delimited span of the cleaned text.
///
/// Whitespace-only paragraphs are kept as positional
/// placeholders with an empty analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text:     String,
    pub analysis: Analysis,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, analysis: Analysis) -> Self {
        Self { text: text.into(), analysis }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn sentence_count(&self) -> usize {
        self.analysis.sentences.len()
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    /// The filename the text came from, kept for log lines
    pub source:     String,

    /// Cleaned text the paragraphs were split from
    pub text:       String,

    /// Paragraphs in document order, blank ones included
    pub paragraphs: Vec<Paragraph>,

    /// Analysis of the full text
    pub analysis:   Analysis,
}

impl Document {
    pub fn new(
        source:     impl Into<String>,
        text:       impl Into<String>,
        paragraphs: Vec<Paragraph>,
        analysis:   Analysis,
    ) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
            paragraphs,
            analysis,
        }
    }

    /// True when no paragraph yields a single sentence
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.sentence_count() == 0)
    }
}
