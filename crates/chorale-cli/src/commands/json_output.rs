//! Machine-readable output envelopes for CLI commands.

use chorale_core::{Harmonization, RhythmicNote};
use serde::Serialize;

/// JSON envelope for the harmonize command.
///
/// The voices flatten into the envelope, so consumers see
/// `{key, seed, soprano, alto, tenor, bass, durations}` with all pitches
/// as note names.
#[derive(Debug, Serialize)]
pub struct HarmonizeOutput<'a> {
    /// Key the harmony was transposed into, as supplied.
    pub key: &'a str,
    /// Seed the run used (drawn at random when the caller gave none).
    pub seed: u32,
    #[serde(flatten)]
    pub voices: &'a Harmonization,
    /// Beat multiplier per melody note.
    pub durations: Vec<f64>,
}

/// JSON envelope for the durations command.
#[derive(Debug, Serialize)]
pub struct DurationsOutput {
    /// Each token's note name and beat multiplier, in input order.
    pub notes: Vec<RhythmicNote>,
    /// Sum of all beat multipliers.
    pub total_beats: f64,
}
