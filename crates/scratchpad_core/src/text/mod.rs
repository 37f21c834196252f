//! Pure text transforms offered by the scratchpad popover.

pub mod normalize;
