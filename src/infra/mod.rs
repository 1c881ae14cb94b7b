// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Durable storage for generated study guides. Results are
// keyed by a generated job id that is handed back to the
// caller, so retrieval needs no session state.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling)

/// JSON files on disk, one per job
pub mod result_store;
