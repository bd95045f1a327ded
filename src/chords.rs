//! Chord token recognition and line transposition.
//!
//! A chord token is a whole word consisting of a root (`A`..`G` with an
//! optional `#`/`b`), an optional quality suffix, and optional extension
//! digits. Transposition rewrites only the root of each token; every other
//! byte of the line, including all whitespace, is preserved exactly.

use std::sync::LazyLock;

use regex::Regex;

use crate::pitch;

/// Regex matching a chord token at a word start: root, optional quality,
/// optional extension digits.
///
/// Quality alternatives are ordered longest-first so `Cmaj7` is not cut
/// short at `Cm`. The trailing word boundary is checked separately in
/// [`next_token`] because `#` is not a word character, which would make a
/// trailing `\b` reject sharp-spelled tokens like `C#`.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-G](#|b)?(maj7|sus4|sus2|dim|aug|m)?\d*")
        .expect("valid regex: RE_CHORD")
});

/// Regex matching the root prefix of a chord token.
#[allow(clippy::expect_used)]
static RE_ROOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-G](#|b)?").expect("valid regex: RE_ROOT")
});

/// Whether the token ending at byte `end` stops at a word edge.
///
/// Tokens must not be a prefix of a longer alphanumeric run; `Cat` is a
/// lyric word, not the chord `C`.
fn ends_at_boundary(line: &str, end: usize) -> bool {
    line[end..]
        .chars()
        .next()
        .is_none_or(|c| !(c.is_alphanumeric() || c == '_'))
}

/// Find the next accepted chord token at or after `pos`.
///
/// Candidates whose trailing edge falls inside a word are skipped. A token
/// cannot start inside a rejected candidate (every interior position is a
/// word character), so scanning resumes at the candidate's end.
fn next_token(line: &str, pos: usize) -> Option<regex::Match<'_>> {
    let mut at = pos;
    while at <= line.len() {
        let m = RE_CHORD.find_at(line, at)?;
        if ends_at_boundary(line, m.end()) {
            return Some(m);
        }
        at = m.end();
    }
    None
}

/// Transpose a single chord token by `steps` semitones.
///
/// The root prefix is shifted; the quality/extension remainder is copied
/// verbatim. Tokens with no parseable root, or a root outside the chromatic
/// table, come back unchanged.
#[must_use]
pub fn transpose_chord(chord: &str, steps: i32) -> String {
    let Some(root) = RE_ROOT.find(chord) else {
        return chord.to_string();
    };
    let rest = &chord[root.end()..];
    let shifted = pitch::shift(root.as_str(), steps);
    format!("{shifted}{rest}")
}

/// Transpose every chord token in a line, leaving all other bytes intact.
///
/// Matches are found leftmost, greedy, non-overlapping, in document order.
/// Zero steps is the byte-level identity on every line, so enharmonic
/// spellings survive an unshifted pass untouched.
#[must_use]
pub fn transpose_line(line: &str, steps: i32) -> String {
    if steps == 0 {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    while let Some(m) = next_token(line, last) {
        out.push_str(&line[last..m.start()]);
        out.push_str(&transpose_chord(m.as_str(), steps));
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Whether the line contains at least one chord token.
///
/// Callers use this to skip the transpose pass; skipping is purely an
/// optimization since transposing a chord-free line is a no-op.
#[must_use]
pub fn has_chords(line: &str) -> bool {
    next_token(line, 0).is_some()
}

/// Byte spans `(start, end)` of every chord token in the line.
///
/// Spans are in document order and non-overlapping. Renderers use these to
/// style chords distinctly from lyrics without re-deriving the grammar.
#[must_use]
pub fn chord_spans(line: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut last = 0;
    while let Some(m) = next_token(line, last) {
        spans.push((m.start(), m.end()));
        last = m.end();
    }
    spans
}
