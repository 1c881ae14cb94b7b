// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `generate` and `show`, and
// all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::generate_use_case::GenerateConfig;
use crate::study::{
    flashcards::DEFAULT_FLASHCARDS, quiz::DEFAULT_QUESTIONS,
    summarizer::DEFAULT_SUMMARY_SENTENCES,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a summary, flashcards and a quiz from a PDF
    Generate(GenerateArgs),

    /// Print a previously generated study guide
    Show(ShowArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// PDF to study (a .txt file is read as already-cleaned text)
    #[arg(long)]
    pub input: String,

    /// Directory the study guide JSON is written to
    #[arg(long, default_value = "uploads")]
    pub output_dir: String,

    /// Target number of summary sentences across all paragraphs
    #[arg(long, default_value_t = DEFAULT_SUMMARY_SENTENCES)]
    pub summary_sentences: usize,

    /// Maximum number of flashcards
    #[arg(long, default_value_t = DEFAULT_FLASHCARDS)]
    pub flashcards: usize,

    /// Maximum number of quiz questions
    #[arg(long, default_value_t = DEFAULT_QUESTIONS)]
    pub questions: usize,

    /// Seed for paragraph shuffling and distractor sampling.
    /// The same seed and input give the same study guide.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Convert CLI GenerateArgs into the application-layer config.
impl From<GenerateArgs> for GenerateConfig {
    fn from(a: GenerateArgs) -> Self {
        GenerateConfig {
            input:             a.input,
            output_dir:        a.output_dir,
            summary_sentences: a.summary_sentences,
            flashcards:        a.flashcards,
            questions:         a.questions,
            seed:              a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Job id printed by `generate`
    #[arg(long)]
    pub job_id: String,

    /// Directory the study guide JSON was written to
    #[arg(long, default_value = "uploads")]
    pub output_dir: String,

    /// Print the stored JSON instead of the formatted view
    #[arg(long)]
    pub json: bool,
}
