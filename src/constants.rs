//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Text preprocessing constants.
pub mod text {
    /// Number of spaces a tab expands to before chord scanning.
    ///
    /// Expansion happens upstream of tokenization so column positions are
    /// stable for fixed-width rendering.
    pub const TAB_WIDTH: usize = 4;
}

/// Page layout constants for downstream fixed-width renderers.
///
/// The crate does no page drawing itself; these values describe the layout
/// contract a paginating renderer is expected to honor (letter page,
/// Courier metrics).
pub mod layout {
    /// Monospace font size in points.
    pub const FONT_SIZE: f32 = 15.0;

    /// Title font size in points.
    pub const TITLE_FONT_SIZE: f32 = FONT_SIZE + 2.0;

    /// Vertical distance between baselines in points.
    pub const LINE_HEIGHT: f32 = 20.0;

    /// Left page margin in points.
    pub const LEFT_MARGIN: f32 = 50.0;

    /// First baseline position from the page bottom in points.
    pub const TOP_MARGIN: f32 = 750.0;

    /// Advance width of one monospace character in points.
    pub const CHAR_WIDTH: f32 = 7.2;

    /// Baseline position at which a renderer should start a new page.
    pub const PAGE_BREAK_Y: f32 = 50.0;
}

/// Song library constants.
pub mod library {
    /// Minimum fuzzy-match score for a title lookup.
    pub const MIN_TITLE_SCORE: i64 = 80;
}
