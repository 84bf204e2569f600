//! Word-level segmentation of a changed row.
//!
//! A changed row carries both an old and a new text; diffing the pair at
//! word granularity yields an ordered [`Segment`] sequence the renderer
//! uses for inline highlighting. Segments tagged `Added` are suppressed on
//! the left side and `Removed` segments on the right, so each side shows
//! exactly its own text with the changed span emphasized.

use similar::{ChangeTag, TextDiff};

/// Classification of one word-level segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Word run present in both texts.
    Unchanged,
    /// Word run present only in the new text.
    Added,
    /// Word run present only in the old text.
    Removed,
}

impl From<ChangeTag> for SegmentKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Delete => SegmentKind::Removed,
            ChangeTag::Equal => SegmentKind::Unchanged,
        }
    }
}

/// Which side of a row a segment is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The old version's column.
    Left,
    /// The new version's column.
    Right,
}

/// A word-level diff unit within a single changed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Segment classification.
    pub kind: SegmentKind,
    /// The segment's text, whitespace included.
    pub text: String,
}

impl Segment {
    /// Whether this segment is displayed on the given side.
    ///
    /// Concatenating the segments visible on a side reproduces that side's
    /// full text.
    pub fn visible_on(&self, side: Side) -> bool {
        match side {
            Side::Left => self.kind != SegmentKind::Added,
            Side::Right => self.kind != SegmentKind::Removed,
        }
    }
}

/// Diff two line texts at word granularity.
///
/// Word bounds follow Unicode segmentation, so CJK text splits into
/// sensible units rather than whole lines. Adjacent segments of the same
/// kind are coalesced. Total and deterministic; either text may be empty.
///
/// # Examples
///
/// ```
/// use docdiff::words::{SegmentKind, Side, word_segments};
///
/// let segments = word_segments("The cat sat", "The dog sat");
/// let right: String = segments
///     .iter()
///     .filter(|s| s.visible_on(Side::Right))
///     .map(|s| s.text.as_str())
///     .collect();
/// assert_eq!(right, "The dog sat");
/// assert!(segments.iter().any(|s| s.kind == SegmentKind::Removed && s.text == "cat"));
/// ```
pub fn word_segments(left: &str, right: &str) -> Vec<Segment> {
    let diff = TextDiff::from_unicode_words(left, right);

    let mut segments: Vec<Segment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = SegmentKind::from(change.tag());
        match segments.last_mut() {
            Some(segment) if segment.kind == kind => segment.text.push_str(change.value()),
            _ => segments.push(Segment {
                kind,
                text: change.value().to_string(),
            }),
        }
    }
    segments
}
