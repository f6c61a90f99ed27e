//! Human-readable formatting for prices, market caps, and percentages.

pub mod num;
