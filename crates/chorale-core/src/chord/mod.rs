//! Chord shapes and the fixed melody-degree chord table.
//!
//! Each melody pitch class (its "degree") maps to one or more chord shapes:
//! ordered, root-relative chromatic offsets. A shape transposed into a key
//! becomes a [`VoicedChord`], the pool of members the inner voices draw
//! from. The table is fixed and total over all 12 degrees.

mod shape;
mod table;


pub use shape::{ChordShape, VoicedChord};

use crate::pitch::PitchClass;

/// The chord-shape variants for a melody degree.
///
/// Every degree has at least one shape; the first is the primary voicing
/// and begins with the degree itself.
///
/// # Examples
/// ```
/// use chorale_core::{shapes_for, PitchClass};
///
/// let d = PitchClass::parse("D").unwrap();
/// assert_eq!(shapes_for(d).len(), 3);
///
/// let c = PitchClass::parse("C").unwrap();
/// assert_eq!(shapes_for(c)[0].intervals(), &[0, 4, 7]);
/// ```
pub fn shapes_for(degree: PitchClass) -> &'static [ChordShape] {
    table::DEGREE_SHAPES[degree.semitones() as usize]
}
