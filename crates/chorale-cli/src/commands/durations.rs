//! Durations command implementation.
//!
//! Parses a rhythm-annotated melody line and prints each note's beat
//! multiplier (quarter note = 1).

use std::process::ExitCode;

use anyhow::Result;
use chorale_core::parse_melody;
use colored::Colorize;

use super::json_output::DurationsOutput;

/// Run the durations command
///
/// # Arguments
/// * `line` - Rhythm-annotated melody line (barlines `|` are ignored)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: always 0 (the rhythm notation is total)
pub fn run(line: &str, json_output: bool) -> Result<ExitCode> {
    let notes = parse_melody(line);
    let total_beats: f64 = notes.iter().map(|n| n.duration).sum();

    if json_output {
        let output = DurationsOutput { notes, total_beats };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    for note in &notes {
        println!("{:<4} {}", note.note, note.duration);
    }
    println!("{} {}", "Total beats:".cyan().bold(), total_beats);

    Ok(ExitCode::SUCCESS)
}
