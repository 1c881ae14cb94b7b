// ============================================================
// Layer 3 — Language Analysis Types
// ============================================================
// The output contract of the language analyzer: sentences,
// tagged tokens and categorised named entities for one piece
// of text. Every generator in the study layer reads these
// types and nothing else from the analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token with the flags the summarizer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text:     String,
    /// Lower-cased form used as the frequency-map key
    pub lower:    String,
    pub is_stop:  bool,
    pub is_punct: bool,
}

impl Token {
    /// Tokens that carry weight in a word-frequency map
    pub fn is_content(&self) -> bool {
        !self.is_stop && !self.is_punct && self.text != "\n"
    }
}

/// Semantic category of a named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    GeoPolitical,
    /// Nationality, religious or political group
    Norp,
    Product,
    Event,
    WorkOfArt,
    Location,
    Date,
    Misc,
}

impl EntityLabel {
    /// Categories that may become flashcards or quiz answers.
    pub fn is_study_eligible(self) -> bool {
        !matches!(self, EntityLabel::Date | EntityLabel::Misc)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityLabel::Person       => "PERSON",
            EntityLabel::Organization => "ORG",
            EntityLabel::GeoPolitical => "GPE",
            EntityLabel::Norp         => "NORP",
            EntityLabel::Product      => "PRODUCT",
            EntityLabel::Event        => "EVENT",
            EntityLabel::WorkOfArt    => "WORK_OF_ART",
            EntityLabel::Location     => "LOC",
            EntityLabel::Date         => "DATE",
            EntityLabel::Misc         => "MISC",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub text:  String,
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self { text: text.into(), label }
    }
}

/// Everything the analyzer derived from one text, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub sentences: Vec<String>,
    pub tokens:    Vec<Token>,
    pub entities:  Vec<EntitySpan>,
}

impl Analysis {
    /// First sentence whose text contains `needle`
    pub fn containing_sentence(&self, needle: &str) -> Option<&str> {
        self.sentences
            .iter()
            .map(String::as_str)
            .find(|s| s.contains(needle))
    }

    /// Entities whose category is on the study allow-list
    pub fn eligible_entities(&self) -> impl Iterator<Item = &EntitySpan> {
        self.entities.iter().filter(|e| e.label.is_study_eligible())
    }
}
