//! Song sheet assembly.
//!
//! Splits raw song text into lines, expands tabs, and transposes chord
//! tokens in place, preserving every non-chord byte and the line structure
//! exactly.

use regex::Regex;
use serde::Serialize;

use crate::chords;
use crate::constants::text::TAB_WIDTH;

/// A fully transposed song sheet, ready for a renderer.
///
/// Built once per request and immutable afterwards; the crate holds no
/// state between requests.
#[derive(Debug, Clone, Serialize)]
pub struct Song {
    /// Display title of the song.
    pub title: String,
    /// Semitone shift that was applied.
    pub steps: i32,
    /// Transposed lines with tabs already expanded.
    pub lines: Vec<String>,
}

impl Song {
    /// Build a song sheet from raw text and a semitone shift.
    #[must_use]
    pub fn build(title: impl Into<String>, text: &str, steps: i32) -> Self {
        Self {
            title: title.into(),
            steps,
            lines: format_song(text, steps),
        }
    }
}

/// Transpose raw song text line by line.
///
/// Tabs are normalized to spaces before chord scanning so spacing survives
/// fixed-width rendering. Lines without a chord token skip the transpose
/// pass; either way each line comes back byte-identical outside its chord
/// tokens. Empty input yields zero lines.
#[must_use]
pub fn format_song(text: &str, steps: i32) -> Vec<String> {
    format_song_with_tab_width(text, steps, TAB_WIDTH)
}

/// [`format_song`] with an explicit tab expansion width.
#[must_use]
pub fn format_song_with_tab_width(text: &str, steps: i32, tab_width: usize) -> Vec<String> {
    let tab = " ".repeat(tab_width);
    text.lines()
        .map(|line| {
            let line = line.replace('\t', &tab);
            if chords::has_chords(&line) {
                chords::transpose_line(&line, steps)
            } else {
                line
            }
        })
        .collect()
}

/// Build a safe output filename from a song title.
///
/// Mirrors the download flow: the title becomes the file stem, with
/// filesystem-hostile characters replaced.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn output_filename(title: &str) -> String {
    lazy_static::lazy_static! {
        static ref RE_UNSAFE: Regex = Regex::new(r"[^\w \-.,()]").unwrap();
    }
    let trimmed = title.trim();
    let base = if trimmed.is_empty() { "Untitled Song" } else { trimmed };
    let safe = RE_UNSAFE.replace_all(base, "_");
    format!("{safe}.txt")
}
