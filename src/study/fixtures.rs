// Deterministic LanguageAnalyzer for generator tests.
//
// Sentences end at . ! ? followed by whitespace; tokens are
// whitespace words with trailing punctuation split off;
// entities come from a fixed gazetteer, reported in order of
// first character position.

use crate::domain::language::{Analysis, EntityLabel, EntitySpan, Token};
use crate::domain::traits::LanguageAnalyzer;

const STOP_WORDS: &[&str] = &["the", "a", "an", "is", "was", "of", "in", "and", "to", "it", "at"];

#[derive(Debug, Default)]
pub struct FixtureAnalyzer {
    gazetteer: Vec<(String, EntityLabel)>,
}

impl FixtureAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, text: &str, label: EntityLabel) -> Self {
        self.gazetteer.push((text.to_string(), label));
        self
    }

    pub fn with_entities(self, texts: &[&str], label: EntityLabel) -> Self {
        texts.iter().fold(self, |a, t| a.with_entity(t, label))
    }
}

impl LanguageAnalyzer for FixtureAnalyzer {
    fn analyze(&self, text: &str) -> Analysis {
        let sentences = text
            .split_inclusive(|c: char| matches!(c, '.' | '!' | '?'))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            let bare = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
            if !bare.is_empty() {
                let lower = bare.to_lowercase();
                tokens.push(Token {
                    is_stop:  STOP_WORDS.contains(&lower.as_str()),
                    is_punct: false,
                    text:     bare.to_string(),
                    lower,
                });
            }
            for p in word[bare.len()..].chars() {
                tokens.push(Token {
                    text:     p.to_string(),
                    lower:    p.to_string(),
                    is_stop:  false,
                    is_punct: true,
                });
            }
        }

        let mut found: Vec<(usize, EntitySpan)> = self
            .gazetteer
            .iter()
            .flat_map(|(name, label)| {
                text.match_indices(name.as_str())
                    .map(move |(pos, m)| (pos, EntitySpan::new(m, *label)))
            })
            .collect();
        found.sort_by_key(|(pos, _)| *pos);

        Analysis {
            sentences,
            tokens,
            entities: found.into_iter().map(|(_, e)| e).collect(),
        }
    }
}
