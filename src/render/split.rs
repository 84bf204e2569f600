//! Side-by-side layout.
//!
//! Four columns per row: old line number, old text, new line number, new
//! text. The old-text column is padded to the widest old line by display
//! width, so documents with wide (CJK) characters keep their panes
//! aligned.

use super::{RenderOptions, Theme, format_no, paint_row_text, side_no_width, text_width};
use crate::rows::DiffRow;
use crate::words::Side;

const PANE_SEPARATOR: &str = " │ ";

pub(super) fn render(rows: &[DiffRow], options: &RenderOptions) -> String {
    let theme = Theme::new(options.color);
    let left_no_width = side_no_width(rows, Side::Left);
    let right_no_width = side_no_width(rows, Side::Right);
    let left_col_width = rows
        .iter()
        .map(|row| text_width(row.left_text.as_deref()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let pad = left_col_width.saturating_sub(text_width(row.left_text.as_deref()));
        let line = format!(
            "{} {}{}{}{} {}",
            format_no(row.left_no, left_no_width, &theme),
            paint_row_text(row, Side::Left, options, &theme),
            " ".repeat(pad),
            PANE_SEPARATOR,
            format_no(row.right_no, right_no_width, &theme),
            paint_row_text(row, Side::Right, options, &theme),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::super::{CompareMethod, RenderOptions, ViewMode, render};
    use crate::rows::build_rows;
    use similar_asserts::assert_eq;
    use unicode_width::UnicodeWidthStr;

    fn split_options() -> RenderOptions {
        RenderOptions {
            view: ViewMode::Split,
            compare: CompareMethod::Lines,
            color: false,
        }
    }

    #[test]
    fn replacement_renders_both_panes() {
        let rows = build_rows("A\nB\nC\n", "A\nX\nC\n");
        let out = render(&rows, &split_options());
        assert_eq!(out, "1 A │ 1 A\n2 B │ 2 X\n3 C │ 3 C\n");
    }

    #[test]
    fn added_row_leaves_old_pane_empty() {
        let rows = build_rows("A\nB\n", "A\nB\nC\n");
        let out = render(&rows, &split_options());
        assert_eq!(out, "1 A │ 1 A\n2 B │ 2 B\n    │ 3 C\n");
    }

    #[test]
    fn removed_row_leaves_new_pane_empty() {
        let rows = build_rows("A\nB\nC\n", "A\nC\n");
        let out = render(&rows, &split_options());
        assert_eq!(out, "1 A │ 1 A\n2 B │\n3 C │ 2 C\n");
    }

    #[test]
    fn wide_characters_keep_panes_aligned() {
        let rows = build_rows("あい\nX\n", "あい\nY\n");
        let out = render(&rows, &split_options());
        assert_eq!(out, "1 あい │ 1 あい\n2 X    │ 2 Y\n");

        // Both pane boundaries sit at the same display column.
        let widths: Vec<usize> = out
            .lines()
            .map(|line| {
                line.split('│')
                    .next()
                    .map(UnicodeWidthStr::width)
                    .unwrap_or(0)
            })
            .collect();
        assert_eq!(widths, vec![widths[0]; widths.len()]);
    }

    #[test]
    fn gutters_widen_for_two_digit_numbers() {
        let doc: String = (1..=10).map(|i| format!("line {i}\n")).collect();
        let rows = build_rows(&doc, &doc);
        let out = render(&rows, &split_options());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 1 line 1  │  1 line 1");
        assert_eq!(lines[9], "10 line 10 │ 10 line 10");
    }

    #[test]
    fn plain_output_has_no_escape_bytes() {
        let rows = build_rows("A\nB\n", "A\nX\n");
        let out = render(
            &rows,
            &RenderOptions {
                compare: CompareMethod::Words,
                ..split_options()
            },
        );
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn colored_output_emits_escapes() {
        let rows = build_rows("A\nB\n", "A\nX\n");
        let out = render(
            &rows,
            &RenderOptions {
                color: true,
                ..split_options()
            },
        );
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains('\u{1b}'));
    }

    #[test]
    fn empty_input_renders_nothing() {
        let out = render(&[], &split_options());
        assert_eq!(out, "");
    }
}
