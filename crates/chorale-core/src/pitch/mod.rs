//! Pitch-class resolution, rendering, and transposition.
//!
//! Note names map to chromatic pitch classes (C = 0 .. B = 11). Rendering
//! always produces one of the 12 canonical sharp-spelled names; parsing
//! additionally accepts flat and Unicode accidental spellings and resolves
//! them enharmonically.

mod class;
mod constants;


pub use class::PitchClass;
pub use constants::CHROMATIC_NAMES;
