// ============================================================
// Layer 4 — Rule-Based Language Analyzer
// ============================================================
// A dependency-light implementation of the LanguageAnalyzer
// trait for English prose:
//
//   Sentences → Unicode sentence boundaries (UAX #29), then
//               re-joined after titles ("Dr."), name initials
//               ("J. R.") and dotted acronyms ("U.S.") that
//               run on into a name
//   Tokens    → regex word tokens and single punctuation marks,
//               tagged with lower case, stop-word and
//               punctuation flags
//   Entities  → runs of capitalised words inside a sentence,
//               double-quoted titles, years and month names,
//               categorised from cue-word tables and small
//               gazetteers
//
// The entity rules are heuristics. They favour precision:
// a lone capitalised word at the start of a sentence is only
// kept when a gazetteer recognises it.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings), §13 (Iterators)

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::domain::language::{Analysis, EntityLabel, EntitySpan, Token};
use crate::domain::traits::LanguageAnalyzer;

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:['’.\-]\w+)*|[^\w\s]").expect("token pattern is valid")
});

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+(?:['’.\-]\w+)*").expect("word pattern is valid")
});

static QUOTED_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["“]([A-Z][^"“”]{0,80}?)["”]"#).expect("quote pattern is valid")
});

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "among",
        "an", "and", "any", "are", "as", "at", "be", "became", "because", "been", "before",
        "being", "below", "between", "both", "but", "by", "can", "could", "did", "do",
        "does", "doing", "down", "during", "each", "either", "else", "even", "every", "few",
        "for", "from", "further", "had", "has", "have", "having", "he", "hence", "her",
        "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if",
        "in", "into", "is", "it", "its", "itself", "just", "many", "may", "me", "meanwhile",
        "might", "more", "moreover", "most", "much", "must", "my", "myself", "neither", "no",
        "nor", "not", "now", "of", "off", "often", "on", "once", "only", "or", "other",
        "our", "ours", "ourselves", "out", "over", "own", "per", "perhaps", "rather", "same",
        "she", "should", "since", "so", "some", "such", "than", "that", "the", "their",
        "theirs", "them", "themselves", "then", "there", "therefore", "these", "they",
        "this", "those", "though", "through", "thus", "to", "too", "under", "until", "up",
        "upon", "us", "very", "was", "we", "well", "were", "what", "whatever", "when",
        "where", "whether", "which", "while", "who", "whom", "whose", "why", "will", "with",
        "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    ])
});

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "mr", "mrs", "ms", "dr", "prof", "st", "mt", "ft", "gen", "gov", "sen", "rep",
        "capt", "col", "lt", "sgt", "rev", "vs", "e.g", "i.e", "cf",
    ])
});

static HONORIFICS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "Mr", "Mrs", "Ms", "Dr", "Prof", "Professor", "President", "King", "Queen",
        "Prince", "Princess", "Sir", "Lady", "Lord", "General", "Senator", "Pope",
        "Emperor", "Empress", "Captain", "Judge", "Governor",
    ])
});

const CONNECTORS: &[&str] = &["of", "for", "de"];

static MONTHS_AND_DAYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "January", "February", "March", "April", "June", "July", "August", "September",
        "October", "November", "December", "Monday", "Tuesday", "Wednesday", "Thursday",
        "Friday", "Saturday", "Sunday",
    ])
});

static EVENT_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "War", "Wars", "Revolution", "Olympics", "Games", "Cup", "Summit", "Conference",
        "Festival", "Crisis", "Battle", "Expo", "Championship", "Election", "Rebellion",
        "Depression", "Massacre", "Uprising", "Crusade", "Crusades", "Siege",
    ])
});

static ORG_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "Inc", "Corp", "Corporation", "Company", "University", "Institute", "Association",
        "Agency", "Party", "Council", "Committee", "Bank", "Ltd", "Foundation", "Ministry",
        "Department", "Court", "Church", "Society", "Union", "College", "School", "Academy",
        "Organization", "Organisation", "Group", "Congress", "Parliament", "Senate", "Army",
        "Navy", "Commission", "Federation", "League", "Museum", "Laboratory", "Press",
    ])
});

static LOC_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "River", "Mountain", "Mountains", "Mount", "Lake", "Ocean", "Sea", "Valley",
        "Desert", "Island", "Islands", "Peninsula", "Bay", "Gulf", "Forest", "Coast",
        "Canyon", "Plateau", "Strait", "Basin",
    ])
});

static LOC_GAZETTEER: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "Europe", "Asia", "Africa", "North America", "South America", "Antarctica",
        "Oceania", "Amazon", "Sahara", "Himalayas", "Alps", "Andes", "Mediterranean",
        "Atlantic", "Pacific", "Arctic", "Middle East", "Siberia", "Balkans", "Caribbean",
        "Scandinavia",
    ])
});

static GPE_GAZETTEER: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "United States", "America", "Canada", "Mexico", "Brazil", "Argentina", "Chile",
        "United Kingdom", "Britain", "Great Britain", "England", "Scotland", "Wales",
        "Ireland", "France", "Germany", "Italy", "Spain", "Portugal", "Netherlands",
        "Belgium", "Switzerland", "Austria", "Poland", "Russia", "Ukraine", "Greece",
        "Turkey", "Egypt", "Israel", "Iran", "Iraq", "India", "Pakistan", "China", "Japan",
        "Korea", "Vietnam", "Australia", "Nigeria", "Kenya", "South Africa", "Ethiopia",
        "Sweden", "Norway", "Denmark", "Finland", "London", "Paris", "Berlin", "Rome",
        "Madrid", "Moscow", "Tokyo", "Beijing", "Delhi", "New York", "Los Angeles",
        "Chicago", "Toronto", "Boston", "Washington", "Athens", "Cairo", "Vienna",
        "Sydney", "Jerusalem", "Constantinople", "California", "Texas", "Florida",
        "Ontario", "Quebec", "Virginia",
    ])
});

static NORP_GAZETTEER: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "American", "British", "English", "French", "German", "Italian", "Spanish",
        "Chinese", "Japanese", "Russian", "Greek", "Roman", "Christian", "Muslim",
        "Jewish", "Jew", "Buddhist", "Hindu", "Catholic", "Protestant", "Democrat",
        "Republican", "Communist", "Socialist", "European", "African", "Asian",
        "Egyptian", "Indian", "Mexican", "Canadian", "Persian", "Ottoman", "Viking",
        "Soviet", "Irish", "Dutch", "Polish", "Portuguese",
    ])
});

/// A word inside a sentence with its byte range.
#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    start: usize,
    end:   usize,
    text:  &'a str,
}

#[derive(Debug, Default)]
pub struct RuleBasedAnalyzer;

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Analysis {
        let sentences = split_sentences(text);
        let tokens    = tokenize(text);
        let entities  = sentences
            .iter()
            .flat_map(|s| sentence_entities(s))
            .collect();

        Analysis {
            sentences: sentences.into_iter().map(str::to_string).collect(),
            tokens,
            entities,
        }
    }
}

// ─── Sentences ────────────────────────────────────────────────────────────────

/// Split text into trimmed, non-empty sentence slices.
pub fn split_sentences(text: &str) -> Vec<&str> {
    // Line breaks inside a paragraph are layout, not sentence ends.
    // Both are one byte wide, so offsets carry over to `text`.
    let flat = text.replace(|c: char| c == '\n' || c == '\r', " ");
    let bounds: Vec<(usize, usize)> = flat
        .split_sentence_bound_indices()
        .map(|(pos, segment)| (pos, pos + segment.len()))
        .collect();

    let mut sentences = Vec::new();
    let mut start     = 0usize;

    for (i, &(_, end)) in bounds.iter().enumerate() {
        let joined = bounds
            .get(i + 1)
            .is_some_and(|&(next_start, next_end)| {
                runs_on(&text[start..end], &text[next_start..next_end])
            });
        if !joined {
            push_trimmed(&mut sentences, &text[start..end]);
            start = end;
        }
    }

    sentences
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, span: &'a str) {
    let span = span.trim();
    if !span.is_empty() {
        out.push(span);
    }
}

/// Whether a boundary after `span` falls inside a name rather
/// than at the end of a sentence.
fn runs_on(span: &str, next: &str) -> bool {
    let Some(stem) = span.trim_end().strip_suffix('.') else {
        return false;
    };
    let mut words = stem.split_whitespace().rev();
    let last = words
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    if ABBREVIATIONS.contains(last.to_lowercase().as_str()) {
        return true;
    }

    let next_word = next
        .split_whitespace()
        .next()
        .unwrap_or("")
        .trim_matches(|c: char| !c.is_alphanumeric());
    let name_follows = is_capitalised(next_word)
        && !STOP_WORDS.contains(next_word.to_lowercase().as_str());

    if is_dotted_acronym(last) {
        return name_follows;
    }
    if is_initial(last) {
        // "Harry S. Truman", not "was I. Nobody"
        let prev_is_name = words
            .next()
            .map(|w| w.trim_start_matches(|c: char| !c.is_alphanumeric()))
            .map_or(true, is_capitalised);
        return name_follows && prev_is_name;
    }
    false
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// "U.S", "D.C" (the final dot already stripped)
fn is_dotted_acronym(word: &str) -> bool {
    word.contains('.') && word.split('.').all(is_initial)
}

// ─── Tokens ───────────────────────────────────────────────────────────────────

pub fn tokenize(text: &str) -> Vec<Token> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| {
            let text  = m.as_str();
            let lower = text.to_lowercase();
            Token {
                is_stop:  STOP_WORDS.contains(lower.as_str()),
                is_punct: !text.chars().any(char::is_alphanumeric),
                text:     text.to_string(),
                lower,
            }
        })
        .collect()
}

// ─── Entities ─────────────────────────────────────────────────────────────────

fn is_capitalised(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_year(word: &str) -> bool {
    word.len() == 4
        && word.chars().all(|c| c.is_ascii_digit())
        && matches!(word.parse::<u32>(), Ok(1000..=2099))
}

/// Entities of one sentence, in order of appearance.
fn sentence_entities(sentence: &str) -> Vec<EntitySpan> {
    let mut found: Vec<(usize, EntitySpan)> = Vec::new();

    // Quoted titles first; words inside them are not re-used.
    let mut quoted: Vec<(usize, usize)> = Vec::new();
    for caps in QUOTED_TITLE.captures_iter(sentence) {
        if let Some(title) = caps.get(1) {
            let text = title.as_str().trim();
            if !text.is_empty() && text.split_whitespace().count() <= 8 {
                quoted.push((title.start(), title.end()));
                found.push((title.start(), EntitySpan::new(text, EntityLabel::WorkOfArt)));
            }
        }
    }

    let words: Vec<Word> = WORD_PATTERN
        .find_iter(sentence)
        .map(|m| Word { start: m.start(), end: m.end(), text: m.as_str() })
        .filter(|w| !quoted.iter().any(|&(s, e)| w.start >= s && w.end <= e))
        .collect();

    let adjacent = |a: &Word, b: &Word| sentence[a.end..b.start].chars().all(char::is_whitespace);

    let mut i = 0;
    while i < words.len() {
        let word = words[i];

        if is_year(word.text) {
            found.push((word.start, EntitySpan::new(word.text, EntityLabel::Date)));
            i += 1;
            continue;
        }
        if !is_capitalised(word.text) {
            i += 1;
            continue;
        }

        // Grow the run of capitalised words
        let mut end = i + 1;
        while end < words.len() && adjacent(&words[end - 1], &words[end]) {
            let next = words[end].text;
            let numeral = next.chars().all(|c| c.is_ascii_digit()) && !is_year(next);
            if is_capitalised(next) || numeral {
                end += 1;
            } else if CONNECTORS.contains(&next)
                && end + 1 < words.len()
                && adjacent(&words[end], &words[end + 1])
                && is_capitalised(words[end + 1].text)
            {
                end += 2;
            } else {
                break;
            }
        }

        if let Some(entity) = classify_run(sentence, &words, i, end) {
            found.push((words[i].start, entity));
        }
        i = end;
    }

    found.sort_by_key(|(start, _)| *start);
    found.into_iter().map(|(_, e)| e).collect()
}

/// Turn words[first..end] into an entity, or drop it.
fn classify_run(sentence: &str, words: &[Word], first: usize, end: usize) -> Option<EntitySpan> {
    let mut start = first;

    // Leading stop words ("The", "In", "However") and honorifics
    // are not part of the name.
    let mut titled = false;
    while start < end {
        let text = words[start].text;
        if STOP_WORDS.contains(text.to_lowercase().as_str()) {
            start += 1;
        } else if HONORIFICS.contains(text) {
            titled = true;
            start += 1;
        } else {
            break;
        }
    }
    if start == end {
        return None;
    }

    let run: Vec<&str> = words[start..end].iter().map(|w| w.text).collect();
    let text = &sentence[words[start].start..words[end - 1].end];

    // "Dr. Smith": the honorific is a separate run before this one
    if !titled && start > 0 {
        let prev = words[start - 1];
        let gap  = &sentence[prev.end..words[start].start];
        titled = HONORIFICS.contains(prev.text) && gap.trim() == ".";
    }

    let label = label_for(text, &run, titled);

    // A lone capitalised word opening the sentence is usually
    // just capitalisation; keep it only when a table knows it.
    let sentence_initial = start == 0 && run.len() == 1;
    if sentence_initial && matches!(label, EntityLabel::Misc | EntityLabel::Person) {
        return None;
    }

    Some(EntitySpan::new(text, label))
}

fn label_for(text: &str, run: &[&str], titled: bool) -> EntityLabel {
    let any = |table: &HashSet<&'static str>| run.iter().any(|w| table.contains(w));
    let singular = text.strip_suffix('s').unwrap_or(text);

    if run.iter().all(|w| MONTHS_AND_DAYS.contains(w) || w.chars().all(|c| c.is_ascii_digit())) {
        EntityLabel::Date
    } else if any(&*EVENT_WORDS) {
        EntityLabel::Event
    } else if any(&*ORG_WORDS) {
        EntityLabel::Organization
    } else if any(&*LOC_WORDS) || LOC_GAZETTEER.contains(text) {
        EntityLabel::Location
    } else if GPE_GAZETTEER.contains(text) {
        EntityLabel::GeoPolitical
    } else if run.len() == 1 && (NORP_GAZETTEER.contains(text) || NORP_GAZETTEER.contains(singular)) {
        EntityLabel::Norp
    } else if run.len() >= 2 && run.last().is_some_and(|w| w.chars().all(|c| c.is_ascii_digit())) {
        EntityLabel::Product
    } else if titled || (2..=4).contains(&run.len()) {
        EntityLabel::Person
    } else {
        EntityLabel::Misc
    }
}
