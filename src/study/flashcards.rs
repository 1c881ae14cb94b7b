// ============================================================
// Layer 5 — Flashcard Generator
// ============================================================
// One flashcard per (entity, sentence) pair:
//   question = entity text
//   answer   = first sentence of the paragraph containing it,
//              with a "(Definition: entity)" suffix
//
// Paragraphs are visited in a random order so the cards are
// not always drawn from the opening pages. Candidate pairs
// are produced lazily; a pair is dropped when its entity text
// or its sentence text was already used by an earlier card.
// Generation stops at the quota, even mid-paragraph.
//
// Reference: rand crate documentation (SliceRandom)
//            Rust Book §13 (Iterators)

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::domain::document::Document;
use crate::domain::language::EntitySpan;
use crate::domain::study::Flashcard;

pub const DEFAULT_FLASHCARDS: usize = 3;

/// Every (entity, containing sentence) pair, visiting paragraphs
/// in `order`. Entities outside the allow-list are skipped.
pub fn candidate_pairs<'d>(
    doc:   &'d Document,
    order: &'d [usize],
) -> impl Iterator<Item = (&'d EntitySpan, &'d str)> + 'd {
    order
        .iter()
        .filter_map(move |&i| doc.paragraphs.get(i))
        .flat_map(|paragraph| {
            let analysis = &paragraph.analysis;
            analysis.eligible_entities().filter_map(move |entity| {
                analysis
                    .containing_sentence(&entity.text)
                    .map(|sentence| (entity, sentence))
            })
        })
}

pub fn generate_flashcards<R: Rng + ?Sized>(
    doc:   &Document,
    quota: usize,
    rng:   &mut R,
) -> Vec<Flashcard> {
    let mut order: Vec<usize> = (0..doc.paragraphs.len()).collect();
    order.shuffle(rng);

    let mut used_entities:  HashSet<&str> = HashSet::new();
    let mut used_sentences: HashSet<&str> = HashSet::new();

    let cards: Vec<Flashcard> = candidate_pairs(doc, &order)
        .filter(|&(entity, sentence)| {
            let sentence = sentence.trim();
            if used_entities.contains(entity.text.as_str()) || used_sentences.contains(sentence) {
                return false;
            }
            used_entities.insert(entity.text.as_str());
            used_sentences.insert(sentence);
            true
        })
        .take(quota)
        .map(|(entity, sentence)| {
            tracing::debug!("Flashcard on {} '{}'", entity.label, entity.text);
            Flashcard::new(&entity.text, sentence)
        })
        .collect();

    tracing::debug!("Generated {} of {} flashcards for '{}'", cards.len(), quota, doc.source);
    cards
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::splitter::analyze_document;
    use crate::domain::language::EntityLabel;
    use crate::study::fixtures::FixtureAnalyzer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TEXT: &str = "Curie lived in Paris. Curie won prizes.\n\n\
                        Nothing named here at all.\n\n\
                        Darwin sailed with FitzRoy. Darwin visited Chile.\n\n\
                        Newton studied in Cambridge.";

    fn analyzer() -> FixtureAnalyzer {
        FixtureAnalyzer::new()
            .with_entities(&["Curie", "Darwin", "FitzRoy", "Newton"], EntityLabel::Person)
            .with_entities(&["Paris", "Chile", "Cambridge"], EntityLabel::GeoPolitical)
            .with_entity("prizes", EntityLabel::Misc)
    }

    #[test]
    fn test_stops_at_quota() {
        let doc   = analyze_document("t", TEXT, &analyzer());
        let cards = generate_flashcards(&doc, 3, &mut StdRng::seed_from_u64(1));
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn test_entities_and_sentences_used_once() {
        let doc = analyze_document("t", TEXT, &analyzer());
        for seed in 0..20 {
            let cards = generate_flashcards(&doc, 10, &mut StdRng::seed_from_u64(seed));

            let entities: HashSet<&str> = cards.iter().map(|c| c.question.as_str()).collect();
            assert_eq!(entities.len(), cards.len());

            let sentences: HashSet<&str> = cards
                .iter()
                .map(|c| c.answer.split(" (Definition:").next().unwrap())
                .collect();
            assert_eq!(sentences.len(), cards.len());
        }
    }

    #[test]
    fn test_all_distinct_pairs_found_when_quota_allows() {
        // Curie/Paris, Darwin/FitzRoy and Newton/Cambridge share
        // sentences, and "Curie won prizes." is never a first match.
        let doc   = analyze_document("t", TEXT, &analyzer());
        let cards = generate_flashcards(&doc, 10, &mut StdRng::seed_from_u64(3));
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.question != "prizes"));
    }

    #[test]
    fn test_paragraph_without_entities_contributes_nothing() {
        let doc   = analyze_document("t", "Nothing named here.\n\nNor here.", &analyzer());
        let cards = generate_flashcards(&doc, 3, &mut StdRng::seed_from_u64(9));
        assert!(cards.is_empty());
    }

    #[test]
    fn test_answer_uses_containing_sentence() {
        let doc   = analyze_document("t", "Newton studied in Cambridge.", &analyzer());
        let cards = generate_flashcards(&doc, 3, &mut StdRng::seed_from_u64(0));
        assert_eq!(cards[0].question, "Newton");
        assert_eq!(cards[0].answer, "Newton studied in Cambridge. (Definition: Newton)");
        // Cambridge lives in the same sentence, which is now used
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn test_same_seed_same_cards() {
        let doc = analyze_document("t", TEXT, &analyzer());
        let a   = generate_flashcards(&doc, 3, &mut StdRng::seed_from_u64(42));
        let b   = generate_flashcards(&doc, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_candidate_pairs_follow_given_order() {
        let doc   = analyze_document("t", TEXT, &analyzer());
        let order = [3, 0];
        let pairs: Vec<(&str, &str)> = candidate_pairs(&doc, &order)
            .map(|(entity, sentence)| (entity.text.as_str(), sentence))
            .collect();
        assert_eq!(pairs[0], ("Newton", "Newton studied in Cambridge."));
        assert_eq!(pairs[2], ("Curie", "Curie lived in Paris."));
    }
}
