// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits describing what a study
// guide is made of. No file I/O, no PDF parsing, no
// randomness lives here.

// A cleaned document split into analysed paragraphs
pub mod document;

// Sentences, tokens and named entities
pub mod language;

// Flashcards, quiz questions and the result bundle
pub mod study;

// Abstractions over extraction, analysis and storage
pub mod traits;

pub mod error;
