//! Tests for rhythm-notation parsing.

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_duration_base_table() {
    assert_eq!(duration("oo"), 4.0);
    assert_eq!(duration("o"), 2.0);
    assert_eq!(duration(""), 1.0);
    assert_eq!(duration(")"), 0.5);
    assert_eq!(duration("))"), 0.25);
}

#[test]
fn test_duration_dotted() {
    assert_eq!(duration("oo."), 6.0);
    assert_eq!(duration("o."), 3.0);
    assert_eq!(duration("."), 1.5);
    assert_eq!(duration(")."), 0.75);
    assert_eq!(duration("))."), 0.375);
}

#[test]
fn test_duration_unknown_bases_are_quarters() {
    assert_eq!(duration("x"), 1.0);
    assert_eq!(duration("xyz"), 1.0);
    // The notation is lowercase; an uppercase O is not a half note.
    assert_eq!(duration("O"), 1.0);
    assert_eq!(duration("ooo"), 1.0);
}

#[test]
fn test_duration_splits_at_first_dot() {
    // Only the presence of a dot matters; anything after it is ignored.
    assert_eq!(duration("o.."), 3.0);
    assert_eq!(duration("o.x"), 3.0);
    assert_eq!(duration(".."), 1.5);
}

#[test]
fn test_split_token() {
    assert_eq!(split_token("C"), ("C", ""));
    assert_eq!(split_token("Co"), ("C", "o"));
    assert_eq!(split_token("D."), ("D", "."));
    assert_eq!(split_token("G)"), ("G", ")"));
    assert_eq!(split_token("F#o."), ("F#", "o."));
    assert_eq!(split_token("Bboo"), ("Bb", "oo"));
    assert_eq!(split_token("))"), ("", "))"));
    assert_eq!(split_token(""), ("", ""));
}

#[test]
fn test_split_token_multibyte_names() {
    // The flat sign is multi-byte; the split must stay on a char boundary.
    assert_eq!(split_token("B♭o"), ("B♭", "o"));
    assert_eq!(split_token("E♭."), ("E♭", "."));
}

#[test]
fn test_parse_melody_annotated_line() {
    let notes = parse_melody("C E G | C D. G) | Co C | Go.");

    let names: Vec<&str> = notes.iter().map(|n| n.note.as_str()).collect();
    assert_eq!(names, ["C", "E", "G", "C", "D", "G", "C", "C", "G"]);

    let beats: Vec<f64> = notes.iter().map(|n| n.duration).collect();
    assert_eq!(beats, [1.0, 1.0, 1.0, 1.0, 1.5, 0.5, 2.0, 1.0, 3.0]);
}

#[test]
fn test_parse_melody_skips_barlines() {
    let notes = parse_melody("| C | D |");
    let names: Vec<&str> = notes.iter().map(|n| n.note.as_str()).collect();
    assert_eq!(names, ["C", "D"]);
}

#[test]
fn test_parse_melody_empty_line() {
    assert!(parse_melody("").is_empty());
    assert!(parse_melody("   ").is_empty());
    assert!(parse_melody("| | |").is_empty());
}

#[test]
fn test_parse_melody_defers_note_validation() {
    // Unknown note names pass through; the harmonizer rejects them later.
    let notes = parse_melody("Z Qo");
    assert_eq!(notes[0].note, "Z");
    assert_eq!(notes[0].duration, 1.0);
    assert_eq!(notes[1].note, "Q");
    assert_eq!(notes[1].duration, 2.0);
}

#[test]
fn test_rhythmic_note_serializes() {
    let note = RhythmicNote {
        note: "G".to_string(),
        duration: 3.0,
    };
    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json, serde_json::json!({ "note": "G", "duration": 3.0 }));
}
