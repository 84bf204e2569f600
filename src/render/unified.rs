//! Unified layout.
//!
//! Both line-number gutters followed by one shared text column with a
//! leading `+`/`-`/space marker. A changed row renders its new-side text
//! with a space marker; the old-side text of a changed row is not
//! separately surfaced in this layout. This is a known limitation: the old
//! text stays reachable through the split view or the row model, and word
//! highlighting still marks the changed span when enabled.

use super::{CompareMethod, RenderOptions, Theme, format_no, paint_word_segments, side_no_width};
use crate::rows::{DiffRow, RowKind};
use crate::words::Side;

pub(super) fn render(rows: &[DiffRow], options: &RenderOptions) -> String {
    let theme = Theme::new(options.color);
    let left_no_width = side_no_width(rows, Side::Left);
    let right_no_width = side_no_width(rows, Side::Right);

    let mut out = String::new();
    for row in rows {
        let line = format!(
            "{} {} {}",
            format_no(row.left_no, left_no_width, &theme),
            format_no(row.right_no, right_no_width, &theme),
            body(row, options, &theme),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Marker plus text for one row.
fn body(row: &DiffRow, options: &RenderOptions, theme: &Theme) -> String {
    let left = row.left_text.as_deref().unwrap_or_default();
    let right = row.right_text.as_deref().unwrap_or_default();

    match row.kind {
        RowKind::Added => theme.paint(&format!("+{right}"), Theme::added_line()),
        RowKind::Removed => theme.paint(&format!("-{left}"), Theme::removed_line()),
        RowKind::Context => format!(" {right}"),
        RowKind::Changed => {
            if options.compare == CompareMethod::Words {
                format!(" {}", paint_word_segments(left, right, Side::Right, theme))
            } else {
                format!(" {right}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CompareMethod, RenderOptions, ViewMode, render};
    use crate::rows::build_rows;
    use similar_asserts::assert_eq;

    fn unified_options() -> RenderOptions {
        RenderOptions {
            view: ViewMode::Unified,
            compare: CompareMethod::Lines,
            color: false,
        }
    }

    #[test]
    fn replacement_shows_only_the_new_text() {
        let rows = build_rows("A\nB\nC\n", "A\nX\nC\n");
        let out = render(&rows, &unified_options());
        assert_eq!(out, "1 1  A\n2 2  X\n3 3  C\n");
    }

    #[test]
    fn added_row_gets_plus_marker_and_blank_old_gutter() {
        let rows = build_rows("A\nB\n", "A\nB\nC\n");
        let out = render(&rows, &unified_options());
        assert_eq!(out, "1 1  A\n2 2  B\n  3 +C\n");
    }

    #[test]
    fn removed_row_gets_minus_marker_and_blank_new_gutter() {
        let rows = build_rows("A\nB\nC\n", "A\nC\n");
        let out = render(&rows, &unified_options());
        assert_eq!(out, "1 1  A\n2   -B\n3 2  C\n");
    }

    #[test]
    fn word_mode_keeps_removed_words_out_of_changed_rows() {
        let rows = build_rows("The cat sat\n", "The dog sat\n");
        let out = render(
            &rows,
            &RenderOptions {
                compare: CompareMethod::Words,
                ..unified_options()
            },
        );
        assert!(out.contains("dog"));
        assert!(!out.contains("cat"));
    }

    #[test]
    fn mixed_block_keeps_marker_order() {
        // Replacement block with a surplus addition: changed, changed,
        // added, all between context lines.
        let rows = build_rows("A\nB\nC\nD\n", "A\nx\ny\nz\nD\n");
        let out = render(&rows, &unified_options());
        assert_eq!(
            out,
            "1 1  A\n2 2  x\n3 3  y\n  4 +z\n4 5  D\n"
        );
    }

    #[test]
    fn empty_input_renders_nothing() {
        let out = render(&[], &unified_options());
        assert_eq!(out, "");
    }
}
