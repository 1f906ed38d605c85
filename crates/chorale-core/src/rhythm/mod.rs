//! Rhythm notation: duration suffixes and melody-line tokenization.
//!
//! A rhythm token is a suffix attached to a note name: `oo` whole, `o`
//! half, `)` eighth, `))` sixteenth, nothing for a quarter; a trailing `.`
//! dots the value (1.5x). [`parse_melody`] tokenizes a whole annotated
//! line such as `C E G | C D. G) | Co C | Go.`, skipping `|` barlines.

#[cfg(test)]
mod tests;

use serde::Serialize;

/// Beat multiplier for a rhythm token (quarter note = 1.0).
///
/// Splits at the first `.` into base and dot flag, looks the base up, and
/// applies the dot. Unknown bases, the empty string included, count as a
/// quarter note, so the function is total and never fails.
///
/// # Examples
/// ```
/// use chorale_core::duration;
///
/// assert_eq!(duration("oo"), 4.0);
/// assert_eq!(duration("o"), 2.0);
/// assert_eq!(duration(""), 1.0);
/// assert_eq!(duration(")"), 0.5);
/// assert_eq!(duration("))"), 0.25);
/// assert_eq!(duration("o."), 3.0);
/// assert_eq!(duration("."), 1.5);
/// ```
pub fn duration(token: &str) -> f64 {
    let (base, dotted) = match token.split_once('.') {
        Some((base, _)) => (base, true),
        None => (token, false),
    };

    let beats = match base {
        "oo" => 4.0,
        "o" => 2.0,
        ")" => 0.5,
        "))" => 0.25,
        _ => 1.0,
    };

    if dotted {
        beats * 1.5
    } else {
        beats
    }
}

/// A melody token split into note name and beat count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RhythmicNote {
    /// The note-name part, unvalidated (the harmonizer checks it).
    pub note: String,
    /// Beat multiplier from the rhythm suffix.
    pub duration: f64,
}

/// Split a melody token into its note name and rhythm suffix.
///
/// The suffix starts at the first rhythm character (`o`, `)`, or `.`).
/// Note letters are `A`-`G`, so the split is unambiguous for valid input;
/// either part may be empty.
pub fn split_token(token: &str) -> (&str, &str) {
    match token.find(|c| matches!(c, 'o' | ')' | '.')) {
        Some(at) => token.split_at(at),
        None => (token, ""),
    }
}

/// Tokenize a rhythm-annotated melody line.
///
/// Tokens are whitespace-separated; `|` barlines are dropped. Each token
/// is split with [`split_token`] and its suffix fed through [`duration`].
/// Note names are not validated here.
///
/// # Examples
/// ```
/// use chorale_core::parse_melody;
///
/// let notes = parse_melody("C D. G) | Go.");
/// let names: Vec<&str> = notes.iter().map(|n| n.note.as_str()).collect();
/// assert_eq!(names, ["C", "D", "G", "G"]);
/// let beats: Vec<f64> = notes.iter().map(|n| n.duration).collect();
/// assert_eq!(beats, [1.0, 1.5, 0.5, 3.0]);
/// ```
pub fn parse_melody(line: &str) -> Vec<RhythmicNote> {
    line.split_whitespace()
        .filter(|token| *token != "|")
        .map(|token| {
            let (note, rhythm) = split_token(token);
            RhythmicNote {
                note: note.to_string(),
                duration: duration(rhythm),
            }
        })
        .collect()
}
