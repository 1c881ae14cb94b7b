// ============================================================
// Layer 6 — Result Store
// ============================================================
// Persists each generated StudyGuide as pretty-printed JSON.
//
// File naming convention:
//   uploads/
//     lecture-notes-3f1c…e9_output.json   ← one file per job
//
// The job id embeds the upload's file stem for readability
// and a fresh UUID, so concurrent uploads of files with the
// same name never write to the same path.
//
// Reference: serde_json crate documentation
//            Rust Book §9 (Error Handling)

use std::{fs, io, path::PathBuf};

use crate::domain::error::StudyError;
use crate::domain::study::{JobId, StudyGuide};
use crate::domain::traits::GuideStore;

/// Stores study guides in a directory on disk.
/// Implements the GuideStore trait from Layer 3.
pub struct JsonGuideStore {
    dir: PathBuf,
}

impl JsonGuideStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path a job's bundle is (or would be) stored at
    pub fn path_for(&self, id: &JobId) -> PathBuf {
        self.dir.join(format!("{id}_output.json"))
    }
}

impl GuideStore for JsonGuideStore {
    fn save(&self, source_name: &str, guide: &StudyGuide) -> Result<JobId, StudyError> {
        fs::create_dir_all(&self.dir)?;

        let id   = JobId::generate(source_name);
        let path = self.path_for(&id);
        let json = serde_json::to_string_pretty(guide)?;
        fs::write(&path, json)?;

        tracing::info!("Saved study guide for '{}' to {}", source_name, path.display());
        Ok(id)
    }

    fn load(&self, id: &JobId) -> Result<StudyGuide, StudyError> {
        let path = self.path_for(id);
        let json = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StudyError::UnknownJob(id.to_string()),
            _ => StudyError::Io(e),
        })?;

        tracing::debug!("Loaded study guide {}", path.display());
        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::study::{Flashcard, QuizQuestion};

    fn sample() -> StudyGuide {
        StudyGuide {
            summary:    "Cells divide.".to_string(),
            flashcards: vec![Flashcard::new("Mendel", "Mendel bred peas.")],
            rapid_fire_quiz: vec![QuizQuestion {
                question:       " bred peas.".to_string(),
                options:        vec!["Mendel".into(), "Darwin".into(), "Curie".into(), "Bohr".into()],
                correct_answer: "Mendel".to_string(),
            }],
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir   = tempfile::tempdir().unwrap();
        let store = JsonGuideStore::new(dir.path());

        let id = store.save("genetics.pdf", &sample()).unwrap();
        assert!(store.path_for(&id).exists());
        assert_eq!(store.load(&id).unwrap(), sample());
    }

    #[test]
    fn test_same_filename_does_not_collide() {
        let dir   = tempfile::tempdir().unwrap();
        let store = JsonGuideStore::new(dir.path());

        let first  = store.save("notes.pdf", &sample()).unwrap();
        let second = store.save("notes.pdf", &StudyGuide::default()).unwrap();

        assert_ne!(first, second);
        assert_eq!(store.load(&first).unwrap(), sample());
        assert_eq!(store.load(&second).unwrap(), StudyGuide::default());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir   = tempfile::tempdir().unwrap();
        let store = JsonGuideStore::new(dir.path().join("nested/uploads"));
        assert!(store.save("a.pdf", &sample()).is_ok());
    }

    #[test]
    fn test_unknown_job() {
        let dir   = tempfile::tempdir().unwrap();
        let store = JsonGuideStore::new(dir.path());
        let id    = JobId::parse("missing-job").unwrap();
        assert!(matches!(store.load(&id), Err(StudyError::UnknownJob(_))));
    }

    #[test]
    fn test_stored_json_uses_wire_names() {
        let dir   = tempfile::tempdir().unwrap();
        let store = JsonGuideStore::new(dir.path());
        let id    = store.save("bio.pdf", &sample()).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path_for(&id)).unwrap()).unwrap();
        assert_eq!(raw["flashcards"][0]["question"], "Mendel");
        assert_eq!(raw["rapid_fire_quiz"][0]["options"].as_array().unwrap().len(), 4);
    }
}
