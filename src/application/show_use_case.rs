// ============================================================
// Layer 2 — ShowUseCase
// ============================================================
// Fetches a previously generated study guide by the job id
// that `generate` printed.

use anyhow::Result;

use crate::domain::study::{JobId, StudyGuide};
use crate::domain::traits::GuideStore;
use crate::infra::result_store::JsonGuideStore;

pub struct ShowUseCase {
    store: JsonGuideStore,
}

impl ShowUseCase {
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self { store: JsonGuideStore::new(output_dir.into()) }
    }

    pub fn load(&self, job_id: &str) -> Result<StudyGuide> {
        let id = JobId::parse(job_id)?;
        Ok(self.store.load(&id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::StudyError;

    #[test]
    fn test_rejects_traversal_ids() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShowUseCase::new(dir.path().to_string_lossy()).load("../x").unwrap_err();
        assert!(matches!(err.downcast_ref::<StudyError>(), Some(StudyError::InvalidJobId(_))));
    }

    #[test]
    fn test_loads_saved_guide() {
        let dir   = tempfile::tempdir().unwrap();
        let guide = StudyGuide { summary: "x".to_string(), ..Default::default() };
        let id    = JsonGuideStore::new(dir.path()).save("a.pdf", &guide).unwrap();

        let shown = ShowUseCase::new(dir.path().to_string_lossy()).load(id.as_str()).unwrap();
        assert_eq!(shown, guide);
    }
}
