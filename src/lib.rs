//! Pull-request style comparison of two text documents.
//!
//! docdiff takes an old and a new version of a document and renders the
//! difference the way a code-review tool would: side-by-side panes or a
//! unified column, 1-based line numbers on both sides, and optional
//! word-level highlighting inside changed line pairs.
//!
//! The pipeline is three pure stages: a line-level diff stream is shaped
//! into [`DiffRow`]s ([`rows`]), changed row pairs are optionally
//! segmented at word granularity ([`words`]), and the row sequence is laid
//! out as text ([`render`]). [`Comparison`] ties the stages together and
//! handles input acquisition and line-ending normalization.

use error_set::error_set;
use std::path::Path;

pub mod render;
pub mod rows;
pub mod sample;
pub mod words;

pub use render::{CompareMethod, RenderOptions, ViewMode};
pub use rows::{DiffRow, DiffStats, RowKind, build_rows};
pub use words::{Segment, SegmentKind, Side, word_segments};

error_set! {
    /// Errors from acquiring comparison inputs
    InputError := {
        /// Input file could not be read
        #[display("Failed to read {path}: {message}")]
        ReadFailed { path: String, message: String },
        /// Input file is not UTF-8 text
        #[display("Invalid UTF-8 in {path}")]
        InvalidUtf8 { path: String },
    }
}

/// Main interface: a pair of documents to compare.
///
/// Holds the two texts with line endings normalized to `\n`, so the row
/// builder only ever sees one terminator convention.
///
/// # Examples
/// ```
/// use docdiff::{Comparison, RowKind};
///
/// let comparison = Comparison::new("A\nB\nC\n", "A\nX\nC\n");
/// let rows = comparison.rows();
/// assert_eq!(rows[1].kind, RowKind::Changed);
/// assert_eq!(comparison.stats().summary(), "+1 -1");
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    old: String,
    new: String,
}

impl Comparison {
    /// Create a comparison from two document texts.
    ///
    /// Any `\r\n` sequences are normalized to `\n`.
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: normalize(&old.into()),
            new: normalize(&new.into()),
        }
    }

    /// Create a comparison by reading two UTF-8 text files.
    pub fn from_files(old_path: &Path, new_path: &Path) -> Result<Self, InputError> {
        Ok(Self::new(read_input(old_path)?, read_input(new_path)?))
    }

    /// The built-in reference documents (a constitution and an amendment
    /// draft excerpt).
    pub fn sample() -> Self {
        Self::new(sample::CURRENT_CONSTITUTION, sample::AMENDMENT_DRAFT)
    }

    /// The normalized old text.
    pub fn old_text(&self) -> &str {
        &self.old
    }

    /// The normalized new text.
    pub fn new_text(&self) -> &str {
        &self.new
    }

    /// Build the ordered row sequence for this pair.
    ///
    /// Recomputed from scratch on every call; the result is an immutable
    /// snapshot, never updated in place.
    pub fn rows(&self) -> Vec<DiffRow> {
        build_rows(&self.old, &self.new)
    }

    /// Addition/deletion counts for this pair.
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_rows(&self.rows())
    }

    /// Render this pair with the given options.
    ///
    /// # Examples
    /// ```
    /// use docdiff::{Comparison, RenderOptions};
    ///
    /// let comparison = Comparison::new("A\n", "A\nB\n");
    /// let out = comparison.render(&RenderOptions::default());
    /// assert_eq!(out, "1 A │ 1 A\n    │ 2 B\n");
    /// ```
    pub fn render(&self, options: &RenderOptions) -> String {
        render::render(&self.rows(), options)
    }
}

/// Normalize Windows line endings; the row builder expects `\n` only.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Read one input file, distinguishing unreadable files from non-text ones.
fn read_input(path: &Path) -> Result<String, InputError> {
    let bytes = std::fs::read(path).map_err(|e| InputError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|_| InputError::InvalidUtf8 {
        path: path.display().to_string(),
    })
}
