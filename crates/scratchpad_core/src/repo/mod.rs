//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value storage contract used by the note store.
//! - Isolate SQLite query details from service orchestration.

pub mod kv_repo;
