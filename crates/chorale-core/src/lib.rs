//! Chorale Core - Four-Voice Melody Harmonization
//!
//! This crate harmonizes a melody line into the four standard choral voices
//! (SATB: Soprano, Alto, Tenor, Bass) and parses a small rhythm notation for
//! note durations. Chord material comes from a fixed table of shape variants
//! per melody pitch class; randomness covers shape choice and inner-voice
//! draws, and always flows from a caller-supplied seed or RNG.
//!
//! # Features
//!
//! - **Pitch model**: note-name resolution (sharps, flats, Unicode
//!   accidentals) to chromatic pitch classes, canonical rendering, mod-12
//!   transposition
//! - **Chord table**: 12 melody degrees, each with one or more voicing
//!   variants as root-relative chromatic offsets
//! - **Harmonizer**: soprano restates the melody; alto, tenor, and bass draw
//!   from the chosen chord transposed into the requested key
//! - **Rhythm notation**: `oo` whole, `o` half, `)` eighth, `))` sixteenth,
//!   `.` dotted, bare names quarter
//!
//! # Determinism
//!
//! All random choices go through a PCG32 generator. Given the same melody,
//! key, and seed, the output is identical across runs and platforms. There
//! is no global RNG state; callers either pass a seed or inject any
//! [`rand::Rng`] of their own.
//!
//! # Example
//!
//! ```
//! use chorale_core::{harmonize, Voice};
//!
//! let chords = harmonize(&["D", "F#", "A", "D"], "D", 42)?;
//!
//! // The soprano always carries the melody itself.
//! assert_eq!(chords.voice_names(Voice::Soprano), ["D", "F#", "A", "D"]);
//! assert_eq!(chords.voice(Voice::Bass).len(), 4);
//! # Ok::<(), chorale_core::HarmonizeError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: pitch-class resolution, rendering, and transposition
//! - [`chord`]: the chord table, shapes, and voiced (transposed) chords
//! - [`harmonize`]: the SATB harmonization pipeline
//! - [`rhythm`]: duration notation and melody-line tokenization
//! - [`rng`]: seeded RNG construction
//! - [`error`]: typed harmonization errors

pub mod chord;
pub mod error;
pub mod harmonize;
pub mod pitch;
pub mod rhythm;
pub mod rng;

pub use chord::{shapes_for, ChordShape, VoicedChord};
pub use error::HarmonizeError;
pub use harmonize::{harmonize, harmonize_with_rng, Harmonization, Voice};
pub use pitch::{PitchClass, CHROMATIC_NAMES};
pub use rhythm::{duration, parse_melody, RhythmicNote};
