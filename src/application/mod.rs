// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers for one user goal each:
// generating a study guide from an upload, and showing a
// stored one. No text processing and no printing here.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Upload → extraction → study artifacts → storage
pub mod generate_use_case;

// Retrieval of a stored study guide by job id
pub mod show_use_case;
