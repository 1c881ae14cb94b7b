// ============================================================
// Layer 5 — Extractive Summarizer
// ============================================================
// Picks existing sentences; never rewrites them.
//
//   1. c_i = sentence count of paragraph i, T = sum of c_i
//   2. quota q_i = max(1, round(c_i / T * target))
//      (round half to even)
//   3. in each non-blank paragraph, score sentences against
//      that paragraph's word-frequency map and keep the q_i
//      best
//   4. join the kept sentences with single spaces, paragraph
//      by paragraph, best-first inside a paragraph
//
// Quotas are not capped globally: with many short paragraphs,
// each is granted at least one sentence and the summary can
// run past `target`.
//
// Reference: Rust Book §13 (Iterators)

use crate::domain::document::Document;
use crate::study::scorer::{top_sentences, WordFrequencyMap};

pub const DEFAULT_SUMMARY_SENTENCES: usize = 7;

pub struct Summarizer {
    target: usize,
}

impl Summarizer {
    pub fn new(target: usize) -> Self {
        Self { target }
    }

    /// Per-paragraph sentence quotas, blank paragraphs included.
    /// Empty when the document has no sentences.
    pub fn quotas(&self, doc: &Document) -> Vec<usize> {
        let total: usize = doc.paragraphs.iter().map(|p| p.sentence_count()).sum();
        if total == 0 {
            return Vec::new();
        }
        doc.paragraphs
            .iter()
            .map(|p| paragraph_quota(p.sentence_count(), total, self.target))
            .collect()
    }

    /// Selected sentences in output order.
    pub fn select<'d>(&self, doc: &'d Document) -> Vec<&'d str> {
        let quotas = self.quotas(doc);

        doc.paragraphs
            .iter()
            .zip(quotas)
            .filter(|(p, _)| !p.is_blank())
            .flat_map(|(p, quota)| {
                let map    = WordFrequencyMap::from_tokens(&p.analysis.tokens);
                let scored = map.score_sentences(&p.analysis.sentences);
                top_sentences(scored, quota)
            })
            .collect()
    }

    pub fn summarize(&self, doc: &Document) -> String {
        let selected = self.select(doc);
        tracing::debug!(
            "Summary of '{}': {} sentences from {} paragraphs",
            doc.source,
            selected.len(),
            doc.paragraphs.len()
        );
        selected.join(" ")
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_SENTENCES)
    }
}

/// max(1, round(count / total * target)), rounding half to even.
pub fn paragraph_quota(count: usize, total: usize, target: usize) -> usize {
    if total == 0 {
        return 1;
    }
    let share = count as f64 / total as f64 * target as f64;
    (share.round_ties_even() as usize).max(1)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::splitter::analyze_document;
    use crate::study::fixtures::FixtureAnalyzer;

    fn summarize(text: &str, target: usize) -> String {
        let doc = analyze_document("test", text, &FixtureAnalyzer::new());
        Summarizer::new(target).summarize(&doc)
    }

    /// Sentence k mentions "rust" k times; the closing "end."
    /// never matches the map because of its period.
    fn ranked_sentence(k: usize) -> String {
        format!("{}end.", "rust ".repeat(k))
    }

    #[test]
    fn test_quota_rounds_half_to_even() {
        assert_eq!(paragraph_quota(1, 2, 7), 4); // 3.5 → 4
        assert_eq!(paragraph_quota(1, 4, 10), 2); // 2.5 → 2
        assert_eq!(paragraph_quota(1, 100, 7), 1); // 0.07 → floor of 1
        assert_eq!(paragraph_quota(2, 2, 7), 7);
    }

    #[test]
    fn test_single_paragraph_keeps_top_seven_best_first() {
        let text: Vec<String> = (1..=10).map(ranked_sentence).collect();
        let summary = summarize(&text.join(" "), 7);

        let expected: Vec<String> = (4..=10).rev().map(ranked_sentence).collect();
        assert_eq!(summary, expected.join(" "));
    }

    #[test]
    fn test_blank_paragraphs_do_not_dilute_quota() {
        let text = "\n\n\n\n\n\nsolar panels work. wind turbines spin.";
        let doc  = analyze_document("test", text, &FixtureAnalyzer::new());
        let s    = Summarizer::new(7);

        assert_eq!(s.quotas(&doc), vec![1, 1, 1, 7]);
        assert_eq!(s.select(&doc), vec!["solar panels work.", "wind turbines spin."]);
    }

    #[test]
    fn test_many_short_paragraphs_over_allocate() {
        let paragraphs: Vec<String> = (0..10).map(|i| format!("topic{i} matters here.")).collect();
        let doc = analyze_document("test", &paragraphs.join("\n\n"), &FixtureAnalyzer::new());
        let selected = Summarizer::new(7).select(&doc);
        // every paragraph is forced to at least one sentence
        assert_eq!(selected.len(), 10);
    }

    #[test]
    fn test_selected_sentences_are_verbatim() {
        let text = "Cells divide often. Cells grow.\n\nGenes encode proteins. Proteins fold.";
        let doc  = analyze_document("test", text, &FixtureAnalyzer::new());
        for sentence in Summarizer::new(2).select(&doc) {
            assert!(doc.paragraphs.iter().any(|p| p.text.contains(sentence)));
        }
    }

    #[test]
    fn test_unscored_sentences_are_never_selected() {
        // "it is." has only stop words and cannot score
        assert_eq!(summarize("solar power works. it is.", 7), "solar power works.");
    }

    #[test]
    fn test_empty_document_gives_empty_summary() {
        assert_eq!(summarize("", 7), "");
        assert_eq!(summarize("\n\n  \n\n", 7), "");
    }

    #[test]
    fn test_summary_is_deterministic() {
        let text = "Atoms bond. Atoms share electrons.\n\nHeat moves. Heat flows outward.";
        assert_eq!(summarize(text, 3), summarize(text, 3));
    }
}
