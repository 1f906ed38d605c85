//! Constants for pitch-class resolution and rendering.

/// Canonical chromatic note names, indexed by pitch class.
///
/// Rendering always uses these sharp spellings; flats only exist on the
/// input side.
pub const CHROMATIC_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Semitone offsets for note letters (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub(super) const SEMITONE_MAP: [(char, i8); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];
