//! CLI library components for the contact normalizer.

pub mod logging;
pub mod output;
pub mod pipeline;
