// ============================================================
// Layer 3 — Study Artifacts
// ============================================================
// The three outputs of the pipeline and the bundle that is
// serialised and stored per upload. Field names are the JSON
// wire names read by the viewers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::StudyError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// The entity text
    pub question: String,

    /// The containing sentence plus a "(Definition: ...)" suffix
    pub answer:   String,
}

impl Flashcard {
    pub fn new(entity: &str, sentence: &str) -> Self {
        Self {
            question: entity.to_string(),
            answer:   format!("{} (Definition: {})", sentence.trim(), entity),
        }
    }
}

/// A fill-in-the-blank question with multiple-choice options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// The sentence with the answer removed
    pub question:       String,
    pub options:        Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyGuide {
    pub summary:         String,
    pub flashcards:      Vec<Flashcard>,
    pub rapid_fire_quiz: Vec<QuizQuestion>,
}

impl StudyGuide {
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.flashcards.is_empty() && self.rapid_fire_quiz.is_empty()
    }
}

// ─── JobId ────────────────────────────────────────────────────────────────────
/// Storage key of one generated study guide.
///
/// Format: `{sanitised upload stem}-{uuid v4}`. The uuid keeps
/// two uploads with the same filename from overwriting each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(String);

const MAX_STEM_LEN: usize = 40;

impl JobId {
    /// Mint a fresh id for an upload named `source_name`.
    pub fn generate(source_name: &str) -> Self {
        let stem = std::path::Path::new(source_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("upload");

        let mut clean: String = stem
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .take(MAX_STEM_LEN)
            .collect();
        if clean.is_empty() {
            clean.push_str("upload");
        }

        Self(format!("{}-{}", clean, Uuid::new_v4()))
    }

    /// Accept an id typed by a user; rejects anything that could
    /// escape the store directory.
    pub fn parse(raw: &str) -> Result<Self, StudyError> {
        let raw = raw.trim();
        let valid = !raw.is_empty()
            && !raw.contains("..")
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(StudyError::InvalidJobId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
