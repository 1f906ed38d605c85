//! Chorale CLI library.
//!
//! Command implementations for the `chorale` binary: four-voice (SATB)
//! melody harmonization and rhythm-notation durations.

pub mod commands;
