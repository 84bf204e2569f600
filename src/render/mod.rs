//! Row rendering.
//!
//! Takes a built row sequence and produces the visual layout as text:
//! side-by-side panes ([`ViewMode::Split`]) or a single shared column with
//! `+`/`-` markers ([`ViewMode::Unified`]). All configuration travels in an
//! explicit [`RenderOptions`] value per call; the renderer holds no state.

pub mod split;
pub mod unified;

use owo_colors::{OwoColorize, Style};
use unicode_width::UnicodeWidthStr;

use crate::rows::{DiffRow, RowKind};
use crate::words::{SegmentKind, Side, word_segments};

/// Layout selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Four columns: old number, old text, new number, new text.
    Split,
    /// One shared text column with a leading change marker.
    Unified,
}

/// Granularity of in-row change highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMethod {
    /// Whole-line styling only.
    Lines,
    /// Word-level highlighting inside changed rows.
    Words,
}

/// Per-call render configuration.
///
/// Defaults to the split layout with line granularity and no color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Layout to produce.
    pub view: ViewMode,
    /// Highlighting granularity for changed rows.
    pub compare: CompareMethod,
    /// Emit ANSI styling. When off the output contains no escape bytes.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            view: ViewMode::Split,
            compare: CompareMethod::Lines,
            color: false,
        }
    }
}

/// Render a row sequence according to the given options.
///
/// Pure and total: any row sequence renders, and identical inputs produce
/// identical output. One output line per row, each `\n`-terminated, with
/// trailing whitespace trimmed.
pub fn render(rows: &[DiffRow], options: &RenderOptions) -> String {
    match options.view {
        ViewMode::Split => split::render(rows, options),
        ViewMode::Unified => unified::render(rows, options),
    }
}

/// ANSI style set, inert when color is off.
pub(crate) struct Theme {
    color: bool,
}

impl Theme {
    pub(crate) fn new(color: bool) -> Self {
        Self { color }
    }

    /// Apply a style, or pass the text through untouched without color.
    pub(crate) fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub(crate) fn removed_line() -> Style {
        Style::new().red()
    }

    pub(crate) fn added_line() -> Style {
        Style::new().green()
    }

    pub(crate) fn removed_word() -> Style {
        Style::new().red().bold()
    }

    pub(crate) fn added_word() -> Style {
        Style::new().green().bold()
    }

    pub(crate) fn line_no() -> Style {
        Style::new().dimmed()
    }
}

/// Paint one side of a row's text.
///
/// Changed rows under [`CompareMethod::Words`] get segment-level styling
/// with the other side's insertions suppressed; every other case styles
/// the whole line by row kind. A side without content yields an empty
/// string.
pub(crate) fn paint_row_text(
    row: &DiffRow,
    side: Side,
    options: &RenderOptions,
    theme: &Theme,
) -> String {
    let text = match side {
        Side::Left => row.left_text.as_deref(),
        Side::Right => row.right_text.as_deref(),
    };
    let Some(text) = text else {
        return String::new();
    };

    if row.kind == RowKind::Changed
        && options.compare == CompareMethod::Words
        && let (Some(left), Some(right)) = (row.left_text.as_deref(), row.right_text.as_deref())
    {
        return paint_word_segments(left, right, side, theme);
    }

    match (row.kind, side) {
        (RowKind::Context, _) => text.to_string(),
        (RowKind::Added, _) | (RowKind::Changed, Side::Right) => {
            theme.paint(text, Theme::added_line())
        }
        (RowKind::Removed, _) | (RowKind::Changed, Side::Left) => {
            theme.paint(text, Theme::removed_line())
        }
    }
}

/// Word-diff a changed row's pair and paint the segments visible on `side`.
pub(crate) fn paint_word_segments(left: &str, right: &str, side: Side, theme: &Theme) -> String {
    word_segments(left, right)
        .iter()
        .filter(|segment| segment.visible_on(side))
        .map(|segment| match segment.kind {
            SegmentKind::Unchanged => segment.text.clone(),
            SegmentKind::Removed => theme.paint(&segment.text, Theme::removed_word()),
            SegmentKind::Added => theme.paint(&segment.text, Theme::added_word()),
        })
        .collect()
}

/// Format a line-number gutter cell of the given width.
pub(crate) fn format_no(no: Option<u32>, width: usize, theme: &Theme) -> String {
    match no {
        Some(n) => theme.paint(&format!("{n:>width$}"), Theme::line_no()),
        None => " ".repeat(width),
    }
}

/// Gutter width for one side: digits of the largest line number shown.
pub(crate) fn side_no_width(rows: &[DiffRow], side: Side) -> usize {
    rows.iter()
        .filter_map(|row| match side {
            Side::Left => row.left_no,
            Side::Right => row.right_no,
        })
        .max()
        .map_or(1, digits)
}

/// Display width of one side's text, zero when absent.
pub(crate) fn text_width(text: Option<&str>) -> usize {
    text.map_or(0, UnicodeWidthStr::width)
}

fn digits(n: u32) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
