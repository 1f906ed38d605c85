//! Chord shapes and their realization as voiced chords.

use rand::Rng;

use crate::pitch::PitchClass;

/// A chord voicing as ordered, root-relative chromatic offsets.
///
/// Table shapes carry 3 or 4 offsets, already reduced into `0..12`; the
/// primary shape of each degree begins with the degree itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordShape {
    intervals: &'static [u8],
}

impl ChordShape {
    pub(crate) const fn new(intervals: &'static [u8]) -> Self {
        Self { intervals }
    }

    /// The root-relative chromatic offsets of this shape.
    pub fn intervals(&self) -> &'static [u8] {
        self.intervals
    }

    /// Transpose every member by `offset` semitones, wrapping modulo 12.
    ///
    /// # Examples
    /// ```
    /// use chorale_core::{shapes_for, PitchClass};
    ///
    /// let c_major = shapes_for(PitchClass::parse("C").unwrap())[0];
    /// let in_d = c_major.transposed(2);
    /// let names: Vec<&str> = in_d.members().iter().map(|p| p.name()).collect();
    /// assert_eq!(names, ["D", "F#", "A"]);
    /// ```
    pub fn transposed(&self, offset: i32) -> VoicedChord {
        VoicedChord {
            members: self
                .intervals
                .iter()
                .map(|&step| PitchClass::from_semitones(step as i32 + offset))
                .collect(),
        }
    }
}

/// A chord realized in a key: the members the inner voices draw from.
///
/// Always has at least one member (table shapes have 3-4, the unison
/// fallback has 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicedChord {
    members: Vec<PitchClass>,
}

impl VoicedChord {
    /// A single-member chord, used when a degree has no tabled shapes.
    pub fn unison(pitch: PitchClass) -> Self {
        Self {
            members: vec![pitch],
        }
    }

    /// The chord members, in shape order.
    pub fn members(&self) -> &[PitchClass] {
        &self.members
    }

    /// Draw one member uniformly at random.
    ///
    /// Repeated draws are independent (with replacement); drawing never
    /// removes a member.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> PitchClass {
        self.members[rng.gen_range(0..self.members.len())]
    }
}
