//! The fixed chord table: melody degree to candidate shapes.

use super::shape::ChordShape;

/// Shape variants per melody degree, indexed by pitch class.
///
/// Offsets are root-relative chromatic steps. The first shape of each
/// degree starts on the degree itself; later shapes are alternate
/// colorings rooted on the tonic.
pub(super) const DEGREE_SHAPES: [&[ChordShape]; 12] = [
    // C: major triad (I)
    &[ChordShape::new(&[0, 4, 7])],
    // C#: major triad (bII)
    &[ChordShape::new(&[1, 5, 8])],
    // D: minor triad (ii), added ninth, sus2
    &[
        ChordShape::new(&[2, 5, 9]),
        ChordShape::new(&[0, 4, 7, 2]),
        ChordShape::new(&[0, 2, 7]),
    ],
    // D#: major triad (bIII), minor seventh
    &[ChordShape::new(&[3, 7, 10]), ChordShape::new(&[0, 3, 7, 10])],
    // E: minor triad (iii), sus4
    &[ChordShape::new(&[4, 7, 11]), ChordShape::new(&[0, 5, 7])],
    // F: major triad (IV)
    &[ChordShape::new(&[5, 9, 0])],
    // F#: major triad (#IV)
    &[ChordShape::new(&[6, 10, 1])],
    // G: major triad (V)
    &[ChordShape::new(&[7, 11, 2])],
    // G#: major triad (bVI), augmented
    &[ChordShape::new(&[8, 0, 3]), ChordShape::new(&[0, 4, 8])],
    // A: minor triad (vi)
    &[ChordShape::new(&[9, 0, 4])],
    // A#: minor triad (bVII), 7sus4
    &[ChordShape::new(&[10, 1, 5]), ChordShape::new(&[10, 2, 7])],
    // B: diminished triad (vii)
    &[ChordShape::new(&[11, 2, 5])],
];
