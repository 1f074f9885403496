//! Extraction strategies.
//!
//! The three document-to-records algorithms share one capability trait and
//! one declared row grammar so the line and block passes cannot drift apart.
//! The orchestrator invokes them in a fixed priority list.

use academe_models::SubjectRecord;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractor::DocumentSource;

mod blocks;
mod tables;
mod text_lines;

pub use blocks::BlockTextStrategy;
pub use tables::TableStrategy;
pub use text_lines::TextLineStrategy;

/// Row grammar shared by the text-line and block-text strategies.
/// Matches rows like `BCS301   Data Structures   4` or
/// `BCSL305   Data Structures Laboratory   1.0`:
/// code, >=2 spaces, non-greedy title, >=2 spaces, integer or decimal credits.
pub const COURSE_ROW_GRAMMAR: &str =
    r"([A-Z]{2,5}L?\d{2,3}[A-Z0-9]{0,5})\s{2,}(.+?)\s{2,}(\d+(?:\.\d+)?)";

/// Grammar anchored to the start of a trimmed line (text-line strategy).
pub(crate) static ROW_AT_LINE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{}", COURSE_ROW_GRAMMAR)).unwrap());

/// Unanchored grammar for global scans over block text.
pub(crate) static ROW_ANYWHERE: Lazy<Regex> = Lazy::new(|| Regex::new(COURSE_ROW_GRAMMAR).unwrap());

/// Title length bounds accepted by the line-oriented pass.
pub(crate) const TITLE_MIN_LEN: usize = 4;
pub(crate) const TITLE_MAX_LEN: usize = 120;

/// Lenient numeric parse: strips everything but digits and dots, so cells
/// like `"04"` or `"4 cr"` still yield a value.
pub(crate) fn parse_numeric(value: &str) -> Option<f64> {
    static NUMERIC_CLEAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d.]").unwrap());
    NUMERIC_CLEAN_RE.replace_all(value, "").parse().ok()
}

/// Result of a single strategy attempt. Warnings are kept even when no
/// records were found.
#[derive(Debug, Default)]
pub struct StrategyOutcome {
    pub records: Vec<SubjectRecord>,
    pub warnings: Vec<String>,
}

/// One document-to-records algorithm. Strategies never mutate the document
/// source and never fail hard: a strategy that cannot run reports a warning
/// and an empty record set.
pub trait ExtractionStrategy {
    fn name(&self) -> &'static str;

    fn attempt(&self, source: &DocumentSource) -> StrategyOutcome;
}
