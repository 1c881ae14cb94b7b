// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the uploaded bytes and an analysed
// Document:
//
//   PDF bytes
//       │
//       ▼
//   PdfLoader          → raw text per page (lopdf)
//       │
//       ▼
//   Normalizer         → drops headers, page numbers, fragments
//       │
//       ▼
//   split_paragraphs   → blank-line delimited paragraphs
//       │
//       ▼
//   RuleBasedAnalyzer  → sentences, tokens, named entities
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Extracts per-page text from PDF bytes
pub mod loader;

/// Filters low-information lines out of extracted text
pub mod preprocessor;

/// Splits cleaned text into analysed paragraphs
pub mod splitter;

/// Sentence segmentation, tokenisation and entity tagging
pub mod analyzer;
