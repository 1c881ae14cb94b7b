// ============================================================
// Layer 5 — Sentence Scorer
// ============================================================
// Word-frequency weights and sentence salience for one
// paragraph.
//
//   weight(word) = count(word) / count(most frequent word)
//
// Only content tokens (not stop words, not punctuation) are
// counted, so every weight lies in (0, 1].
//
// A sentence's score is the sum of the weights of its
// whitespace-delimited words, looked up lower-cased. Words
// keep any attached punctuation, so "energy." does not match
// the token "energy". A sentence with no matching word has no
// score at all and can never be selected.

use std::collections::HashMap;

use crate::domain::language::Token;

#[derive(Debug, Clone, Default)]
pub struct WordFrequencyMap {
    weights: HashMap<String, f64>,
}

impl WordFrequencyMap {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in tokens.iter().filter(|t| t.is_content()) {
            *counts.entry(token.lower.as_str()).or_insert(0) += 1;
        }

        // An all-stop-word paragraph yields an empty map; 1 keeps
        // the division defined.
        let max = counts.values().copied().max().unwrap_or(1) as f64;

        let weights = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count as f64 / max))
            .collect();

        Self { weights }
    }

    pub fn weight(&self, lower: &str) -> Option<f64> {
        self.weights.get(lower).copied()
    }

    /// Salience of one sentence, or None if no word is in the map.
    pub fn score(&self, sentence: &str) -> Option<f64> {
        sentence
            .split_whitespace()
            .filter_map(|word| self.weight(&word.to_lowercase()))
            .fold(None, |acc, w| Some(acc.unwrap_or(0.0) + w))
    }

    /// Score every sentence, merging identical texts.
    ///
    /// Returns (sentence, score) in first-seen order; a repeated
    /// sentence adds its score to the first entry.
    pub fn score_sentences<'a>(&self, sentences: &'a [String]) -> Vec<(&'a str, f64)> {
        let mut scored: Vec<(&'a str, f64)> = Vec::new();
        let mut index: HashMap<&'a str, usize> = HashMap::new();

        for sentence in sentences {
            let Some(score) = self.score(sentence) else {
                continue;
            };
            match index.get(sentence.as_str()) {
                Some(&i) => scored[i].1 += score,
                None => {
                    index.insert(sentence.as_str(), scored.len());
                    scored.push((sentence.as_str(), score));
                }
            }
        }

        scored
    }
}

/// The `n` highest-scoring sentences, best first.
///
/// The sort is stable, so equal scores keep their original
/// order: the first sentence seen wins a tie.
pub fn top_sentences<'a>(mut scored: Vec<(&'a str, f64)>, n: usize) -> Vec<&'a str> {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().take(n).map(|(s, _)| s).collect()
}
