// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands the work to Layer 2 and
// prints what comes back. No text processing happens here.
//
// Two commands are supported:
//   1. `generate` — turns a PDF into a stored study guide
//   2. `show`     — prints a stored study guide by job id
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, GenerateArgs, ShowArgs};

use crate::domain::study::StudyGuide;

#[derive(Parser, Debug)]
#[command(
    name = "study-guide",
    version,
    about = "Turn a PDF into a summary, flashcards and a rapid-fire quiz."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args) => run_generate(args),
            Commands::Show(args)     => run_show(args),
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    use crate::application::generate_use_case::GenerateUseCase;

    let outcome = GenerateUseCase::new(args.into()).execute()?;

    if outcome.guide.is_empty() {
        println!("No usable text was found; the study guide is empty.");
    } else {
        print_guide(&outcome.guide);
    }
    println!("\nJob id: {}", outcome.job_id);
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<()> {
    use crate::application::show_use_case::ShowUseCase;

    let guide = ShowUseCase::new(args.output_dir).load(&args.job_id)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&guide)?);
    } else {
        print_guide(&guide);
    }
    Ok(())
}

fn print_guide(guide: &StudyGuide) {
    println!("Summary\n=======\n{}", guide.summary);

    println!("\nFlashcards\n==========");
    if guide.flashcards.is_empty() {
        println!("(none)");
    }
    for (i, card) in guide.flashcards.iter().enumerate() {
        println!("{}. {}\n   {}", i + 1, card.question, card.answer);
    }

    println!("\nRapid-fire quiz\n===============");
    if guide.rapid_fire_quiz.is_empty() {
        println!("(none)");
    }
    for (i, q) in guide.rapid_fire_quiz.iter().enumerate() {
        println!("{}. {}", i + 1, q.question.trim());
        for (letter, option) in ('a'..='d').zip(&q.options) {
            println!("   {letter}) {option}");
        }
    }
}
