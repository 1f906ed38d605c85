//! Command implementations for the chorale CLI.

pub mod durations;
pub mod harmonize;
pub mod json_output;
