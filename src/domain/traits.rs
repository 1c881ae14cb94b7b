// ============================================================
// Layer 3 — Collaborator Traits
// ============================================================
// The seams between the study pipeline and the things it
// consumes as black boxes: PDF text extraction, language
// analysis and result storage. The application layer only
// sees these traits.
//
// Implementations:
//   - PdfLoader        → PdfTextSource  (lopdf)
//   - RuleBasedAnalyzer → LanguageAnalyzer
//   - JsonGuideStore   → GuideStore     (JSON files on disk)

use crate::domain::error::StudyError;
use crate::domain::language::Analysis;
use crate::domain::study::{JobId, StudyGuide};

// ─── PdfTextSource ────────────────────────────────────────────────────────────
pub trait PdfTextSource {
    /// Raw text of every page, in page order.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, StudyError>;
}

// ─── LanguageAnalyzer ─────────────────────────────────────────────────────────
pub trait LanguageAnalyzer {
    /// Segment, tokenise and tag entities in `text`.
    fn analyze(&self, text: &str) -> Analysis;
}

// ─── GuideStore ───────────────────────────────────────────────────────────────
pub trait GuideStore {
    /// Persist a bundle and return the id it can be loaded by.
    fn save(&self, source_name: &str, guide: &StudyGuide) -> Result<JobId, StudyError>;

    fn load(&self, id: &JobId) -> Result<StudyGuide, StudyError>;
}
