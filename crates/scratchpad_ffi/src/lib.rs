//! Flutter-facing bridge for the scratchpad core.

pub mod api;
