// ============================================================
// Layer 2 — GenerateUseCase
// ============================================================
// Orchestrates one upload from file to stored study guide:
//
//   Step 1: Read the input file          (Layer 4 - data)
//   Step 2: Extract + normalise the text (Layer 4 - data)
//   Step 3: Build the study artifacts    (Layer 5 - study)
//   Step 4: Store the bundle             (Layer 6 - infra)
//
// A `.txt` input is taken as already-cleaned text and skips
// Step 2; anything else is parsed as a PDF.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::data::{analyzer::RuleBasedAnalyzer, loader::PdfLoader, preprocessor::Normalizer};
use crate::domain::study::{JobId, StudyGuide};
use crate::domain::traits::GuideStore;
use crate::infra::result_store::JsonGuideStore;
use crate::study::{generate_guide, StudyOptions};

// ─── Generate Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    pub input:             String,
    pub output_dir:        String,
    pub summary_sentences: usize,
    pub flashcards:        usize,
    pub questions:         usize,
    /// Fixed seed for reproducible flashcards and quizzes
    pub seed:              Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        let options = StudyOptions::default();
        Self {
            input:             String::new(),
            output_dir:        "uploads".to_string(),
            summary_sentences: options.summary_sentences,
            flashcards:        options.flashcards,
            questions:         options.questions,
            seed:              None,
        }
    }
}

impl GenerateConfig {
    pub fn study_options(&self) -> StudyOptions {
        StudyOptions {
            summary_sentences: self.summary_sentences,
            flashcards:        self.flashcards,
            questions:         self.questions,
        }
    }
}

/// What a successful run hands back to the caller.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub job_id: JobId,
    pub guide:  StudyGuide,
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
pub struct GenerateUseCase {
    config: GenerateConfig,
}

impl GenerateUseCase {
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<GenerateOutcome> {
        let cfg   = &self.config;
        let input = Path::new(&cfg.input);
        let source = input
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        // ── Steps 1-2: Cleaned text ──────────────────────────────────────────
        tracing::info!("Reading '{}'", input.display());
        let text = load_clean_text(input)?;
        tracing::info!("Cleaned text: {} chars", text.len());

        // ── Step 3: Study artifacts ──────────────────────────────────────────
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        let guide = generate_guide(
            &source,
            &text,
            &RuleBasedAnalyzer::new(),
            &cfg.study_options(),
            &mut rng,
        );

        // ── Step 4: Store ────────────────────────────────────────────────────
        let store  = JsonGuideStore::new(&cfg.output_dir);
        let job_id = store
            .save(&source, &guide)
            .with_context(|| format!("Cannot store study guide in '{}'", cfg.output_dir))?;

        Ok(GenerateOutcome { job_id, guide })
    }
}

fn load_clean_text(input: &Path) -> Result<String> {
    let is_text = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"));

    if is_text {
        return fs::read_to_string(input)
            .with_context(|| format!("Cannot read '{}'", input.display()));
    }

    let pages = PdfLoader::new().load_file(input)?;
    Ok(Normalizer::new().clean_pages(pages.as_slice()))
}
