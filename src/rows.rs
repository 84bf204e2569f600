//! Diff row construction.
//!
//! This module turns two full document texts into an ordered sequence of
//! [`DiffRow`]s, the row model both the split and unified layouts render
//! from. A row aligns at most one old line and at most one new line; a
//! removed block immediately followed by an added block is zipped into
//! paired replacement rows so the two versions sit side by side.

use similar::{ChangeTag, TextDiff};

/// Classification of a single display row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Line present and identical in both versions.
    Context,
    /// Line present only in the new version.
    Added,
    /// Line present only in the old version.
    Removed,
    /// Paired removal and addition at the same row position.
    Changed,
}

/// One visual line unit aligning at most one old line and at most one new line.
///
/// Line numbers are 1-based and strictly increasing on each side across a
/// row sequence; a side's number and text are `None` exactly when that side
/// contributes nothing to the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffRow {
    /// Row classification.
    pub kind: RowKind,
    /// Line number in the old version, `None` for pure additions.
    pub left_no: Option<u32>,
    /// Line number in the new version, `None` for pure removals.
    pub right_no: Option<u32>,
    /// Old-side line content, `None` for pure additions.
    pub left_text: Option<String>,
    /// New-side line content, `None` for pure removals.
    pub right_text: Option<String>,
}

impl DiffRow {
    /// Create a context row (same text on both sides).
    pub fn context(text: &str, left_no: u32, right_no: u32) -> Self {
        Self {
            kind: RowKind::Context,
            left_no: Some(left_no),
            right_no: Some(right_no),
            left_text: Some(text.to_string()),
            right_text: Some(text.to_string()),
        }
    }

    /// Create an added row (new side only).
    pub fn added(text: &str, right_no: u32) -> Self {
        Self {
            kind: RowKind::Added,
            left_no: None,
            right_no: Some(right_no),
            left_text: None,
            right_text: Some(text.to_string()),
        }
    }

    /// Create a removed row (old side only).
    pub fn removed(text: &str, left_no: u32) -> Self {
        Self {
            kind: RowKind::Removed,
            left_no: Some(left_no),
            right_no: None,
            left_text: Some(text.to_string()),
            right_text: None,
        }
    }

    /// Create a changed row (both sides present, texts differing).
    pub fn changed(left: &str, right: &str, left_no: u32, right_no: u32) -> Self {
        Self {
            kind: RowKind::Changed,
            left_no: Some(left_no),
            right_no: Some(right_no),
            left_text: Some(left.to_string()),
            right_text: Some(right.to_string()),
        }
    }
}

/// Addition and deletion counts derived from a row sequence.
///
/// A `Changed` row counts as one addition and one deletion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Number of added lines.
    pub additions: usize,
    /// Number of deleted lines.
    pub deletions: usize,
}

impl DiffStats {
    /// Count additions and deletions across a row sequence.
    pub fn from_rows(rows: &[DiffRow]) -> Self {
        let mut stats = Self::default();
        for row in rows {
            match row.kind {
                RowKind::Added => stats.additions += 1,
                RowKind::Removed => stats.deletions += 1,
                RowKind::Changed => {
                    stats.additions += 1;
                    stats.deletions += 1;
                }
                RowKind::Context => {}
            }
        }
        stats
    }

    /// Whether any line differs between the two versions.
    pub fn has_changes(&self) -> bool {
        self.additions > 0 || self.deletions > 0
    }

    /// Short summary in the conventional `+N -M` form.
    pub fn summary(&self) -> String {
        format!("+{} -{}", self.additions, self.deletions)
    }
}

/// A maximal contiguous run of equally-tagged lines from the line diff.
struct LineHunk {
    tag: ChangeTag,
    lines: Vec<String>,
}

/// Build the ordered row sequence for two document texts.
///
/// Inputs use `\n` line separators; CRLF normalization is the caller's
/// responsibility (see [`Comparison`](crate::Comparison)). A final line
/// terminator does not produce a trailing empty row. The function is total:
/// any pair of strings yields a valid row sequence, and empty input on a
/// side simply contributes no rows for that side.
///
/// A removed hunk immediately followed by an added hunk becomes a paired
/// replacement: the two line blocks are zipped index by index, surplus
/// lines on the longer side falling through as plain added/removed rows in
/// the same visual block. The pairing checks only the immediately next
/// hunk; blocks separated by unchanged lines stay independent.
///
/// # Examples
///
/// ```
/// use docdiff::rows::{RowKind, build_rows};
///
/// let rows = build_rows("A\nB\nC\n", "A\nX\nC\n");
/// assert_eq!(rows.len(), 3);
/// assert_eq!(rows[1].kind, RowKind::Changed);
/// assert_eq!(rows[1].left_text.as_deref(), Some("B"));
/// assert_eq!(rows[1].right_text.as_deref(), Some("X"));
/// ```
pub fn build_rows(old_text: &str, new_text: &str) -> Vec<DiffRow> {
    let old = ensure_trailing_newline(old_text);
    let new = ensure_trailing_newline(new_text);
    let hunks = line_hunks(&old, &new);

    let mut rows = Vec::new();
    let mut left_no = 1u32;
    let mut right_no = 1u32;

    let mut i = 0;
    while i < hunks.len() {
        let hunk = &hunks[i];

        // Paired replacement: removed hunk directly followed by an added one.
        if hunk.tag == ChangeTag::Delete
            && let Some(next) = hunks.get(i + 1)
            && next.tag == ChangeTag::Insert
        {
            let removed = &hunk.lines;
            let added = &next.lines;
            for j in 0..removed.len().max(added.len()) {
                match (removed.get(j), added.get(j)) {
                    (Some(left), Some(right)) => {
                        rows.push(DiffRow::changed(left, right, left_no, right_no));
                        left_no += 1;
                        right_no += 1;
                    }
                    (Some(left), None) => {
                        rows.push(DiffRow::removed(left, left_no));
                        left_no += 1;
                    }
                    (None, Some(right)) => {
                        rows.push(DiffRow::added(right, right_no));
                        right_no += 1;
                    }
                    (None, None) => {}
                }
            }
            i += 2;
            continue;
        }

        match hunk.tag {
            ChangeTag::Insert => {
                for line in &hunk.lines {
                    rows.push(DiffRow::added(line, right_no));
                    right_no += 1;
                }
            }
            ChangeTag::Delete => {
                for line in &hunk.lines {
                    rows.push(DiffRow::removed(line, left_no));
                    left_no += 1;
                }
            }
            ChangeTag::Equal => {
                for line in &hunk.lines {
                    rows.push(DiffRow::context(line, left_no, right_no));
                    left_no += 1;
                    right_no += 1;
                }
            }
        }
        i += 1;
    }

    rows
}

/// Run the line-level diff and regroup its per-line changes into maximal
/// equally-tagged hunks, stripping each line's terminator.
fn line_hunks(old: &str, new: &str) -> Vec<LineHunk> {
    let diff = TextDiff::from_lines(old, new);

    let mut hunks: Vec<LineHunk> = Vec::new();
    for change in diff.iter_all_changes() {
        let value = change.value();
        let line = value.strip_suffix('\n').unwrap_or(value).to_string();
        match hunks.last_mut() {
            Some(hunk) if hunk.tag == change.tag() => hunk.lines.push(line),
            _ => hunks.push(LineHunk {
                tag: change.tag(),
                lines: vec![line],
            }),
        }
    }
    hunks
}

/// Give the line diff a uniform view of the final line: a missing trailing
/// terminator alone must not surface as a change.
fn ensure_trailing_newline(text: &str) -> String {
    if text.is_empty() || text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Generate a document: a handful of short lines, newline-terminated.
    fn arb_document() -> impl Strategy<Value = String> {
        prop::collection::vec("[ -~]{0,8}", 0..16).prop_map(|lines| {
            if lines.is_empty() {
                String::new()
            } else {
                lines.join("\n") + "\n"
            }
        })
    }

    /// The lines a document splits into, final terminator dropped.
    fn document_lines(text: &str) -> Vec<String> {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines
    }

    proptest! {
        /// Left texts in row order reconstruct the old document's lines;
        /// right texts reconstruct the new document's.
        #[test]
        fn rows_reconstruct_both_documents(
            old in arb_document(),
            new in arb_document()
        ) {
            let rows = build_rows(&old, &new);

            let lefts: Vec<String> =
                rows.iter().filter_map(|r| r.left_text.clone()).collect();
            let rights: Vec<String> =
                rows.iter().filter_map(|r| r.right_text.clone()).collect();

            prop_assert_eq!(lefts, document_lines(&old));
            prop_assert_eq!(rights, document_lines(&new));
        }

        /// Each side's line numbers are exactly 1..=count, in order.
        #[test]
        fn line_numbers_count_up_from_one(
            old in arb_document(),
            new in arb_document()
        ) {
            let rows = build_rows(&old, &new);

            let left_nos: Vec<u32> = rows.iter().filter_map(|r| r.left_no).collect();
            let right_nos: Vec<u32> = rows.iter().filter_map(|r| r.right_no).collect();

            let expected_left: Vec<u32> = (1..=left_nos.len() as u32).collect();
            let expected_right: Vec<u32> = (1..=right_nos.len() as u32).collect();
            prop_assert_eq!(left_nos, expected_left);
            prop_assert_eq!(right_nos, expected_right);
        }

        /// Every row satisfies its kind's field invariants, and a changed
        /// row never carries two equal texts.
        #[test]
        fn row_fields_match_kind(
            old in arb_document(),
            new in arb_document()
        ) {
            for row in build_rows(&old, &new) {
                match row.kind {
                    RowKind::Context => {
                        prop_assert!(row.left_no.is_some() && row.right_no.is_some());
                        prop_assert_eq!(&row.left_text, &row.right_text);
                        prop_assert!(row.left_text.is_some());
                    }
                    RowKind::Added => {
                        prop_assert!(row.left_no.is_none() && row.left_text.is_none());
                        prop_assert!(row.right_no.is_some() && row.right_text.is_some());
                    }
                    RowKind::Removed => {
                        prop_assert!(row.right_no.is_none() && row.right_text.is_none());
                        prop_assert!(row.left_no.is_some() && row.left_text.is_some());
                    }
                    RowKind::Changed => {
                        prop_assert!(row.left_text.is_some() && row.right_text.is_some());
                        prop_assert!(row.left_no.is_some() && row.right_no.is_some());
                        prop_assert_ne!(&row.left_text, &row.right_text);
                    }
                }
            }
        }

        /// Diffing a document against itself yields only context rows.
        #[test]
        fn identical_documents_are_all_context(doc in arb_document()) {
            let rows = build_rows(&doc, &doc);
            prop_assert_eq!(rows.len(), document_lines(&doc).len());
            for row in rows {
                prop_assert_eq!(row.kind, RowKind::Context);
            }
        }
    }
}
