// ============================================================
// Layer 5 — Quiz Generator
// ============================================================
// Fill-in-the-blank questions with four options.
//
// Sentences are visited in document order. For each one, the
// first entity of the pool that occurs in the sentence and has
// not yet been an answer becomes the answer: it is removed
// from the sentence text and marked used.
//
// Distractors are drawn without replacement from the entity
// pool minus every answer used so far. When fewer than three
// remain, that sentence yields no question (its answer stays
// used) and the walk moves on.
//
// Reference: rand crate documentation (SliceRandom)
//            Rust Book §13 (Iterators)

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::domain::document::Document;
use crate::domain::language::Analysis;
use crate::domain::study::QuizQuestion;

pub const DEFAULT_QUESTIONS: usize = 3;

/// Options per question, the correct answer included
pub const OPTION_COUNT: usize = 4;

/// Distinct allow-listed entity texts in order of first appearance
pub fn entity_pool(analysis: &Analysis) -> Vec<&str> {
    let mut seen = HashSet::new();
    analysis
        .eligible_entities()
        .map(|e| e.text.as_str())
        .filter(|text| seen.insert(*text))
        .collect()
}

pub fn generate_quiz<R: Rng + ?Sized>(
    doc:           &Document,
    num_questions: usize,
    rng:           &mut R,
) -> Vec<QuizQuestion> {
    let pool = entity_pool(&doc.analysis);
    let mut used: HashSet<&str> = HashSet::new();

    let questions: Vec<QuizQuestion> = doc
        .analysis
        .sentences
        .iter()
        .filter_map(|sentence| {
            let answer = pool
                .iter()
                .copied()
                .find(|e| sentence.contains(e) && !used.contains(e))?;
            used.insert(answer);

            let question = build_question(sentence, answer, &pool, &used, &mut *rng);
            if question.is_none() {
                tracing::debug!(
                    "Skipping question on '{}': fewer than {} distractors left",
                    answer,
                    OPTION_COUNT - 1
                );
            }
            question
        })
        .take(num_questions)
        .collect();

    tracing::debug!(
        "Generated {} of {} quiz questions for '{}'",
        questions.len(),
        num_questions,
        doc.source
    );
    questions
}

fn build_question<R: Rng + ?Sized>(
    sentence: &str,
    answer:   &str,
    pool:     &[&str],
    used:     &HashSet<&str>,
    rng:      &mut R,
) -> Option<QuizQuestion> {
    let candidates: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|e| !used.contains(e))
        .collect();

    if candidates.len() < OPTION_COUNT - 1 {
        return None;
    }

    let mut options: Vec<String> = std::iter::once(answer)
        .chain(candidates.choose_multiple(rng, OPTION_COUNT - 1).copied())
        .map(str::to_string)
        .collect();
    options.shuffle(rng);

    Some(QuizQuestion {
        question:       blank_out(sentence, answer),
        options,
        correct_answer: answer.to_string(),
    })
}

/// Remove every occurrence of `answer`, including any that the
/// removal itself stitches together.
pub fn blank_out(sentence: &str, answer: &str) -> String {
    let mut text = sentence.replace(answer, "");
    while !answer.is_empty() && text.contains(answer) {
        text = text.replace(answer, "");
    }
    text
}
