//! Renderer-facing output: chord spans and styled line segments.
//!
//! The page-drawing collaborator (PDF, terminal, whatever) consumes lines
//! plus per-line chord spans so it can set chords in bold while keeping
//! column alignment. Spans are derived over the already-transposed text, so
//! a renderer never re-runs the transposition.

use std::fmt::Write;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::chords;
use crate::constants::layout::{CHAR_WIDTH, LEFT_MARGIN};
use crate::song::Song;

/// Byte span of one chord token within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordSpan {
    /// Byte offset of the first byte of the chord.
    pub start: usize,
    /// Byte offset one past the last byte of the chord.
    pub end: usize,
}

/// One line of output text together with its chord spans.
#[derive(Debug, Clone, Serialize)]
pub struct StyledLine {
    /// The transposed line, tabs already expanded.
    pub text: String,
    /// Chord token spans in document order, non-overlapping.
    pub spans: Vec<ChordSpan>,
}

/// Visual style of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    /// Ordinary lyric text, regular weight.
    Lyric,
    /// Chord token, rendered bold.
    Chord,
}

/// A maximal run of same-styled characters within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The segment text.
    pub text: &'a str,
    /// How the segment should be styled.
    pub style: SegmentStyle,
    /// Display column at which the segment starts.
    pub column: usize,
}

impl Segment<'_> {
    /// Horizontal position in points for a fixed-width page renderer.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn x_position(&self) -> f32 {
        LEFT_MARGIN + self.column as f32 * CHAR_WIDTH
    }
}

impl StyledLine {
    /// Derive spans for an already-transposed line.
    #[must_use]
    pub fn new(text: String) -> Self {
        let spans = chords::chord_spans(&text)
            .into_iter()
            .map(|(start, end)| ChordSpan { start, end })
            .collect();
        Self { text, spans }
    }

    /// Split the line into alternating lyric/chord segments in column order.
    ///
    /// Segments cover the entire line; empty lyric gaps between adjacent
    /// spans are omitted. Columns are display widths, matching a monospace
    /// cursor advancing over the preceding text.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        let mut column = 0;
        let mut last = 0;

        for span in &self.spans {
            let lyric = &self.text[last..span.start];
            if !lyric.is_empty() {
                segments.push(Segment { text: lyric, style: SegmentStyle::Lyric, column });
                column += lyric.width();
            }
            let chord = &self.text[span.start..span.end];
            segments.push(Segment { text: chord, style: SegmentStyle::Chord, column });
            column += chord.width();
            last = span.end;
        }

        let rest = &self.text[last..];
        if !rest.is_empty() {
            segments.push(Segment { text: rest, style: SegmentStyle::Lyric, column });
        }
        segments
    }
}

/// A whole styled document: the hand-off format for an external renderer.
#[derive(Debug, Clone, Serialize)]
pub struct SheetDocument {
    /// Song title, rendered as a bold heading.
    pub title: String,
    /// Semitone shift that produced these lines.
    pub steps: i32,
    /// Styled lines in document order.
    pub lines: Vec<StyledLine>,
}

/// Derive styled lines for every line of a transposed song.
#[must_use]
pub fn styled_lines(song: &Song) -> Vec<StyledLine> {
    song.lines.iter().map(|line| StyledLine::new(line.clone())).collect()
}

/// Package a transposed song for an external renderer.
#[must_use]
pub fn to_document(song: &Song) -> SheetDocument {
    SheetDocument {
        title: song.title.clone(),
        steps: song.steps,
        lines: styled_lines(song),
    }
}

/// Render a plain-text preview, optionally with ANSI-bold chords.
///
/// Without ANSI this is exactly the transposed text, suitable for piping.
#[must_use]
pub fn render_preview(song: &Song, ansi_bold: bool) -> String {
    let mut out = String::new();
    if ansi_bold {
        let _ = write!(out, "\x1b[1m{}\x1b[0m\n\n", song.title);
    } else {
        out.push_str(&song.title);
        out.push_str("\n\n");
    }

    for line in &song.lines {
        if ansi_bold {
            let styled = StyledLine::new(line.clone());
            for segment in styled.segments() {
                match segment.style {
                    SegmentStyle::Chord => {
                        out.push_str("\x1b[1m");
                        out.push_str(segment.text);
                        out.push_str("\x1b[0m");
                    }
                    SegmentStyle::Lyric => out.push_str(segment.text),
                }
            }
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn styled_line_finds_spans() {
        let line = StyledLine::new("C  G7 Am".to_string());
        assert_eq!(
            line.spans,
            vec![
                ChordSpan { start: 0, end: 1 },
                ChordSpan { start: 3, end: 5 },
                ChordSpan { start: 6, end: 8 },
            ]
        );
    }

    #[test]
    fn segments_alternate_and_cover_line() {
        let line = StyledLine::new("G   sing it".to_string());
        let segments = line.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "G");
        assert_eq!(segments[0].style, SegmentStyle::Chord);
        assert_eq!(segments[0].column, 0);
        assert_eq!(segments[1].text, "   sing it");
        assert_eq!(segments[1].style, SegmentStyle::Lyric);
        assert_eq!(segments[1].column, 1);

        let rebuilt: String = segments.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, line.text);
    }

    #[test]
    fn segments_track_columns_through_leading_lyrics() {
        let line = StyledLine::new("  Cmaj7   Dsus4".to_string());
        let segments = line.segments();
        assert_eq!(segments[0].style, SegmentStyle::Lyric);
        assert_eq!(segments[1].text, "Cmaj7");
        assert_eq!(segments[1].column, 2);
        assert_eq!(segments[3].text, "Dsus4");
        assert_eq!(segments[3].column, 10);
    }

    #[test]
    fn x_position_uses_fixed_char_width() {
        let segment = Segment { text: "G", style: SegmentStyle::Chord, column: 10 };
        assert!((segment.x_position() - (50.0 + 72.0)).abs() < 1e-3);
    }

    #[test]
    fn chord_free_line_is_one_lyric_segment() {
        let line = StyledLine::new("just lyrics here".to_string());
        let segments = line.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].style, SegmentStyle::Lyric);
    }

    #[test]
    fn empty_line_has_no_segments() {
        let line = StyledLine::new(String::new());
        assert!(line.segments().is_empty());
        assert!(line.spans.is_empty());
    }

    #[test]
    fn plain_preview_is_exact_text() {
        let song = Song::build("Test", "C G\nla la", 0);
        let preview = render_preview(&song, false);
        assert_eq!(preview, "Test\n\nC G\nla la\n");
    }

    #[test]
    fn ansi_preview_bolds_chords_only() {
        let song = Song::build("T", "C la", 0);
        let preview = render_preview(&song, true);
        assert!(preview.contains("\x1b[1mC\x1b[0m"));
        assert!(preview.contains(" la"));
    }

    #[test]
    fn document_serializes_with_spans() {
        let song = Song::build("T", "G", 1);
        let doc = to_document(&song);
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"text\":\"G#\""));
        assert!(json.contains("\"start\":0"));
        assert!(json.contains("\"end\":2"));
    }
}
