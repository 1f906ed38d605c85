//! The `PitchClass` type: a chromatic pitch reduced modulo 12.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::constants::{CHROMATIC_NAMES, SEMITONE_MAP};

/// A chromatic pitch class in `0..12` (C = 0, C# = 1, .., B = 11).
///
/// The value is always reduced modulo 12; constructors and arithmetic keep
/// that invariant, so a `PitchClass` can index [`CHROMATIC_NAMES`] directly.
/// Serialized as its canonical note name (`"F#"`, never a number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Construct from a raw semitone count, reducing modulo 12.
    ///
    /// Negative values wrap Euclidean-style: `-1` is B (11).
    pub const fn from_semitones(semitones: i32) -> Self {
        Self(semitones.rem_euclid(12) as u8)
    }

    /// Parse a note name into a pitch class.
    ///
    /// Accepts the 12 canonical sharp-spelled names plus enharmonic
    /// variants: a letter `A`-`G` (case-insensitive) followed by at most
    /// one accidental, where `#`/`♯` raises a semitone and `b`/`♭` lowers
    /// one. Surrounding whitespace is ignored.
    ///
    /// # Returns
    /// `None` if the name does not denote a pitch.
    ///
    /// # Examples
    /// ```
    /// use chorale_core::PitchClass;
    ///
    /// assert_eq!(PitchClass::parse("C#"), Some(PitchClass::from_semitones(1)));
    /// assert_eq!(PitchClass::parse("Db"), PitchClass::parse("C#"));
    /// assert_eq!(PitchClass::parse("Cb"), PitchClass::parse("B"));
    /// assert_eq!(PitchClass::parse("Z"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let mut chars = name.trim().chars();

        let letter = chars.next()?.to_ascii_uppercase();
        let base = SEMITONE_MAP
            .iter()
            .find(|(c, _)| *c == letter)
            .map(|(_, s)| *s as i32)?;

        let accidental = match chars.next() {
            None => 0,
            Some('#') | Some('♯') => 1,
            Some('b') | Some('♭') => -1,
            Some(_) => return None,
        };

        // Nothing may follow the accidental.
        if chars.next().is_some() {
            return None;
        }

        Some(Self::from_semitones(base + accidental))
    }

    /// The canonical (sharp-spelled) name of this pitch class.
    pub fn name(self) -> &'static str {
        CHROMATIC_NAMES[self.0 as usize]
    }

    /// Semitones above C, in `0..12`.
    pub const fn semitones(self) -> u8 {
        self.0
    }

    /// Transpose by a signed number of semitones, wrapping modulo 12.
    ///
    /// Transposing by any multiple of 12 is the identity.
    ///
    /// # Examples
    /// ```
    /// use chorale_core::PitchClass;
    ///
    /// let b = PitchClass::from_semitones(11);
    /// assert_eq!(b.transposed(2).name(), "C#");
    /// assert_eq!(b.transposed(-12), b);
    /// ```
    pub const fn transposed(self, semitones: i32) -> Self {
        Self::from_semitones(self.0 as i32 + semitones)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PitchClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PitchClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NameVisitor;

        impl<'de> Visitor<'de> for NameVisitor {
            type Value = PitchClass;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a chromatic note name such as \"C\" or \"F#\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                PitchClass::parse(value)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
