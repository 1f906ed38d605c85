//! Four-voice (SATB) harmonization of a melody line.
//!
//! For each melody note: resolve it to a pitch class, choose one of that
//! degree's chord shapes at random, transpose the shape by the key offset,
//! and let alto, tenor, and bass each draw one member of the transposed
//! chord. The soprano restates the melody pitch itself, untransposed, so
//! the tune stays on top while the harmony sits in the requested key.


use rand::Rng;
use serde::Serialize;

use crate::chord::{shapes_for, VoicedChord};
use crate::error::HarmonizeError;
use crate::pitch::PitchClass;
use crate::rng::create_rng;

/// One of the four choral voices, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Soprano,
    Alto,
    Tenor,
    Bass,
}

impl Voice {
    /// All four voices in score order.
    pub const ALL: [Voice; 4] = [Voice::Soprano, Voice::Alto, Voice::Tenor, Voice::Bass];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Voice::Soprano => "Soprano",
            Voice::Alto => "Alto",
            Voice::Tenor => "Tenor",
            Voice::Bass => "Bass",
        }
    }
}

/// A complete harmonization: one pitch per voice per melody note.
///
/// All four sequences share the melody's length. Serializes with one
/// note-name array per voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Harmonization {
    /// The melody itself, resolved to pitch classes.
    pub soprano: Vec<PitchClass>,
    /// Upper inner voice, drawn from each transposed chord.
    pub alto: Vec<PitchClass>,
    /// Lower inner voice, drawn from each transposed chord.
    pub tenor: Vec<PitchClass>,
    /// Lowest voice, drawn from each transposed chord.
    pub bass: Vec<PitchClass>,
}

impl Harmonization {
    fn with_capacity(len: usize) -> Self {
        Self {
            soprano: Vec::with_capacity(len),
            alto: Vec::with_capacity(len),
            tenor: Vec::with_capacity(len),
            bass: Vec::with_capacity(len),
        }
    }

    /// Number of harmonized melody notes.
    pub fn len(&self) -> usize {
        self.soprano.len()
    }

    /// True when the melody was empty.
    pub fn is_empty(&self) -> bool {
        self.soprano.is_empty()
    }

    /// The pitch sequence of one voice.
    pub fn voice(&self, voice: Voice) -> &[PitchClass] {
        match voice {
            Voice::Soprano => &self.soprano,
            Voice::Alto => &self.alto,
            Voice::Tenor => &self.tenor,
            Voice::Bass => &self.bass,
        }
    }

    /// The rendered note names of one voice.
    pub fn voice_names(&self, voice: Voice) -> Vec<&'static str> {
        self.voice(voice).iter().map(|p| p.name()).collect()
    }
}

/// Harmonize `melody` in `key` with a seeded RNG.
///
/// Convenience over [`harmonize_with_rng`]: equal `(melody, key, seed)`
/// triples produce identical harmonizations across runs and platforms.
///
/// # Errors
/// [`HarmonizeError::InvalidKey`] if the key does not name a pitch,
/// [`HarmonizeError::InvalidNote`] if any melody entry does not. Either
/// way, no partial harmonization is returned.
///
/// # Examples
/// ```
/// use chorale_core::{harmonize, Voice};
///
/// let chords = harmonize(&["C", "E", "G"], "C", 7)?;
/// assert_eq!(chords.voice_names(Voice::Soprano), ["C", "E", "G"]);
/// # Ok::<(), chorale_core::HarmonizeError>(())
/// ```
pub fn harmonize<S: AsRef<str>>(
    melody: &[S],
    key: &str,
    seed: u32,
) -> Result<Harmonization, HarmonizeError> {
    let mut rng = create_rng(seed);
    harmonize_with_rng(melody, key, &mut rng)
}

/// Harmonize `melody` in `key`, drawing all randomness from `rng`.
///
/// Random consumption order is fixed: per melody note, the shape choice,
/// then the alto, tenor, and bass draws. An empty melody yields an empty
/// harmonization, not an error.
pub fn harmonize_with_rng<S, R>(
    melody: &[S],
    key: &str,
    rng: &mut R,
) -> Result<Harmonization, HarmonizeError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let key_offset = PitchClass::parse(key).ok_or_else(|| HarmonizeError::InvalidKey {
        name: key.to_string(),
    })?;

    let mut voices = Harmonization::with_capacity(melody.len());

    for name in melody {
        let name = name.as_ref();
        let degree = PitchClass::parse(name).ok_or_else(|| HarmonizeError::InvalidNote {
            name: name.to_string(),
        })?;

        let chord = select_chord(degree, key_offset, rng);

        // The soprano restates the melody pitch; only the harmony under it
        // is transposed into the key.
        voices.soprano.push(degree);
        voices.alto.push(chord.draw(rng));
        voices.tenor.push(chord.draw(rng));
        voices.bass.push(chord.draw(rng));
    }

    Ok(voices)
}

/// Pick a shape for `degree` and transpose it by the key offset.
///
/// Selection happens on the untransposed degree: the melody note's
/// absolute pitch class decides the chord color, the key only shifts it.
fn select_chord<R: Rng + ?Sized>(
    degree: PitchClass,
    key_offset: PitchClass,
    rng: &mut R,
) -> VoicedChord {
    let offset = key_offset.semitones() as i32;
    let shapes = shapes_for(degree);
    if shapes.is_empty() {
        // Degrees without tabled shapes still harmonize: the bare melody
        // pitch carried into the key.
        return VoicedChord::unison(degree.transposed(offset));
    }
    shapes[rng.gen_range(0..shapes.len())].transposed(offset)
}
