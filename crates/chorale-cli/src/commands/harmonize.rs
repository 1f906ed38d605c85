//! Harmonize command implementation.
//!
//! Tokenizes the melody arguments, harmonizes them in the requested key
//! with a seeded RNG, and prints the four voices.

use std::process::ExitCode;

use anyhow::Result;
use chorale_core::rhythm::split_token;
use chorale_core::{harmonize, parse_melody, Harmonization, RhythmicNote, Voice};
use colored::Colorize;

use super::json_output::HarmonizeOutput;

/// Run the harmonize command
///
/// # Arguments
/// * `melody` - Melody tokens, each a note name with an optional rhythm suffix
/// * `key` - Key note name the harmony is transposed into
/// * `seed` - RNG seed; a random one is drawn and echoed when absent
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success; invalid input surfaces as an error
pub fn run(melody: &[String], key: &str, seed: Option<u32>, json_output: bool) -> Result<ExitCode> {
    let seed = seed.unwrap_or_else(rand::random);

    let line = melody.join(" ");
    let notes = parse_melody(&line);
    let names: Vec<String> = notes.iter().map(|n| n.note.clone()).collect();
    let chords = harmonize(&names, key, seed)?;

    if json_output {
        run_json(key, seed, &chords, &notes)
    } else {
        run_human(key, seed, &chords, &notes, is_annotated(&line))
    }
}

/// True when any melody token carries an explicit rhythm suffix.
fn is_annotated(line: &str) -> bool {
    line.split_whitespace()
        .filter(|token| *token != "|")
        .any(|token| !split_token(token).1.is_empty())
}

fn run_json(
    key: &str,
    seed: u32,
    chords: &Harmonization,
    notes: &[RhythmicNote],
) -> Result<ExitCode> {
    let output = HarmonizeOutput {
        key,
        seed,
        voices: chords,
        durations: notes.iter().map(|n| n.duration).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::SUCCESS)
}

fn run_human(
    key: &str,
    seed: u32,
    chords: &Harmonization,
    notes: &[RhythmicNote],
    annotated: bool,
) -> Result<ExitCode> {
    println!(
        "{} {}    {} {}",
        "Key:".cyan().bold(),
        key,
        "Seed:".cyan().bold(),
        seed
    );
    println!();

    for voice in Voice::ALL {
        // Pad before coloring so the escape codes do not break alignment.
        let label = format!("{:<8}", format!("{}:", voice.label()));
        println!("{} {}", label.bold(), chords.voice_names(voice).join(" "));
    }

    if annotated {
        let beats: Vec<String> = notes.iter().map(|n| n.duration.to_string()).collect();
        let label = format!("{:<8}", "Beats:");
        println!("{} {}", label.dimmed(), beats.join(" "));
    }

    Ok(ExitCode::SUCCESS)
}
