//! Chorale CLI - Four-voice melody harmonization from the command line
//!
//! This binary harmonizes melody lines into SATB voices and computes
//! rhythm-notation durations.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use chorale_cli::commands;

/// Chorale - Four-Voice Melody Harmonizer
#[derive(Parser)]
#[command(name = "chorale")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Harmonize a melody into four voices (SATB)
    Harmonize {
        /// Melody notes, each with an optional rhythm suffix
        /// (e.g. C D. G) Co); barlines (|) are ignored
        #[arg(required = true)]
        melody: Vec<String>,

        /// Key to transpose the harmony into (e.g. C, D#, Bb)
        #[arg(short, long)]
        key: String,

        /// Seed for reproducible output (random when omitted)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print beat multipliers for a rhythm-annotated melody line
    Durations {
        /// Melody line with rhythm suffixes (e.g. "C E G | C D. G) | Co C | Go.")
        #[arg(required = true)]
        line: Vec<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Harmonize {
            melody,
            key,
            seed,
            json,
        } => commands::harmonize::run(&melody, &key, seed, json),
        Commands::Durations { line, json } => commands::durations::run(&line.join(" "), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_parses_harmonize() {
        let cli =
            Cli::try_parse_from(["chorale", "harmonize", "C", "E", "G", "--key", "C"]).unwrap();
        match cli.command {
            Commands::Harmonize {
                melody,
                key,
                seed,
                json,
            } => {
                assert_eq!(melody, ["C", "E", "G"]);
                assert_eq!(key, "C");
                assert_eq!(seed, None);
                assert!(!json);
            }
            _ => panic!("expected harmonize command"),
        }
    }

    #[test]
    fn test_cli_parses_harmonize_with_seed() {
        let cli = Cli::try_parse_from([
            "chorale",
            "harmonize",
            "--key",
            "D",
            "--seed",
            "42",
            "D",
            "F#",
            "A",
        ])
        .unwrap();
        match cli.command {
            Commands::Harmonize {
                melody, key, seed, ..
            } => {
                assert_eq!(melody, ["D", "F#", "A"]);
                assert_eq!(key, "D");
                assert_eq!(seed, Some(42));
            }
            _ => panic!("expected harmonize command"),
        }
    }

    #[test]
    fn test_cli_parses_harmonize_with_json() {
        let cli = Cli::try_parse_from(["chorale", "harmonize", "C", "--key", "C", "--json"])
            .unwrap();
        match cli.command {
            Commands::Harmonize { json, .. } => assert!(json),
            _ => panic!("expected harmonize command"),
        }
    }

    #[test]
    fn test_cli_keeps_rhythm_suffixes_in_melody_tokens() {
        let cli = Cli::try_parse_from([
            "chorale",
            "harmonize",
            "C",
            "D.",
            "G)",
            "Co",
            "--key",
            "G",
        ])
        .unwrap();
        match cli.command {
            Commands::Harmonize { melody, .. } => {
                assert_eq!(melody, ["C", "D.", "G)", "Co"]);
            }
            _ => panic!("expected harmonize command"),
        }
    }

    #[test]
    fn test_cli_requires_key_for_harmonize() {
        let err = Cli::try_parse_from(["chorale", "harmonize", "C", "E"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("--key"));
    }

    #[test]
    fn test_cli_requires_melody_for_harmonize() {
        let err = Cli::try_parse_from(["chorale", "harmonize", "--key", "C"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("MELODY"));
    }

    #[test]
    fn test_cli_rejects_non_numeric_seed() {
        let err = Cli::try_parse_from([
            "chorale",
            "harmonize",
            "C",
            "--key",
            "C",
            "--seed",
            "abc",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("--seed"));
    }

    #[test]
    fn test_cli_parses_durations() {
        let cli =
            Cli::try_parse_from(["chorale", "durations", "C E G | C D. G) | Co C | Go."]).unwrap();
        match cli.command {
            Commands::Durations { line, json } => {
                assert_eq!(line, ["C E G | C D. G) | Co C | Go."]);
                assert!(!json);
            }
            _ => panic!("expected durations command"),
        }
    }

    #[test]
    fn test_cli_parses_durations_as_separate_tokens() {
        let cli = Cli::try_parse_from(["chorale", "durations", "Co", "C", "Go."]).unwrap();
        match cli.command {
            Commands::Durations { line, .. } => {
                assert_eq!(line, ["Co", "C", "Go."]);
            }
            _ => panic!("expected durations command"),
        }
    }

    #[test]
    fn test_cli_parses_durations_with_json() {
        let cli = Cli::try_parse_from(["chorale", "durations", "Go.", "--json"]).unwrap();
        match cli.command {
            Commands::Durations { json, .. } => assert!(json),
            _ => panic!("expected durations command"),
        }
    }

    #[test]
    fn test_cli_requires_line_for_durations() {
        let err = Cli::try_parse_from(["chorale", "durations"]).err().unwrap();
        assert!(err.to_string().contains("LINE"));
    }
}
