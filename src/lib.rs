//! `chordsheet` - inline chord transposition for plain-text song sheets.
//!
//! Recognizes chord tokens embedded in lyric lines, shifts their roots by a
//! semitone offset with enharmonic normalization, and exposes the result as
//! styled lines (text plus chord spans) for a downstream renderer. All
//! non-chord text is preserved byte for byte.


// Re-export public modules for use in integration tests and as a library
pub mod chords;
pub mod config;
pub mod constants;
pub mod error;
pub mod library;
pub mod pitch;
pub mod render;
pub mod song;
