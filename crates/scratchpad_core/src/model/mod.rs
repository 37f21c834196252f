//! Domain model for the scratchpad.
//!
//! # Responsibility
//! - Define the single persisted notes value and its storage key.
//!
//! # Invariants
//! - Exactly one notes blob exists per installation.

pub mod notes;
