//! Table extraction strategy.
//!
//! Recovers course tables from page text: consecutive lines that split into
//! two or more cells on runs of two-plus spaces form one candidate table.
//! The first table that yields any records wins; later tables and pages are
//! not scanned, on the assumption of a single authoritative course table
//! per document (known limitation for documents with appendix tables).

use academe_models::SubjectRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::category::infer_category;
use crate::columns::{cell_matches, clean_cell, detect_column_map, ColumnField, HEADER_SCAN_ROWS};
use crate::extractor::DocumentSource;

use super::{parse_numeric, ExtractionStrategy, StrategyOutcome};

static CELL_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Caption shape: letters and punctuation only. Long caption-like cells in
/// the code column mean the row is a section heading, not a course.
static CAPTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s/()\-,.]+$").unwrap());

/// A real course code always carries a run of at least two digits.
static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{2,}").unwrap());

const CAPTION_MIN_LEN: usize = 15;

type Table = Vec<Vec<String>>;

/// Groups consecutive multi-cell lines into tables. A lone multi-cell line
/// cannot hold both a header and a data row, so runs shorter than two lines
/// are discarded.
fn detect_tables(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Table = Vec::new();

    for line in text.lines() {
        let cells: Vec<String> = CELL_SPLIT_RE
            .split(line.trim())
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();

        if cells.len() >= 2 {
            current.push(cells);
        } else if !current.is_empty() {
            if current.len() >= 2 {
                tables.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.len() >= 2 {
        tables.push(current);
    }

    tables
}

pub struct TableStrategy;

impl ExtractionStrategy for TableStrategy {
    fn name(&self) -> &'static str {
        "table"
    }

    fn attempt(&self, source: &DocumentSource) -> StrategyOutcome {
        let mut outcome = StrategyOutcome::default();

        let Some(doc) = source.structured() else {
            outcome
                .warnings
                .push("Structured PDF backend unavailable; table strategy skipped.".to_string());
            return outcome;
        };

        for page in doc.pages() {
            for table in detect_tables(&page.text) {
                let Some(col_map) = detect_column_map(&table) else {
                    continue;
                };

                // The generic detector may anchor on a banner row above the
                // actual field header; re-scan for the row whose code cell
                // matches the code keywords.
                let mut header_idx = 0;
                if let Some(code_col) = col_map.get(ColumnField::Code) {
                    for (i, row) in table.iter().take(HEADER_SCAN_ROWS).enumerate() {
                        if let Some(cell) = row.get(code_col) {
                            if cell_matches(&clean_cell(cell), ColumnField::Code) {
                                header_idx = i;
                                break;
                            }
                        }
                    }
                }

                for row in table.iter().skip(header_idx + 1) {
                    if row.iter().all(|c| clean_cell(c).is_empty()) {
                        continue;
                    }

                    let code = col_map.cell(row, ColumnField::Code).unwrap_or_default();
                    let title = col_map.cell(row, ColumnField::Title).unwrap_or_default();
                    if code.is_empty() || title.is_empty() {
                        continue;
                    }
                    // Section captions and merged headings
                    if CAPTION_RE.is_match(&code) && code.len() > CAPTION_MIN_LEN {
                        continue;
                    }
                    if !DIGIT_RUN_RE.is_match(&code) {
                        continue;
                    }

                    let type_hint = col_map.cell(row, ColumnField::Category).unwrap_or_default();
                    let hours = col_map.cell(row, ColumnField::Hours).filter(|h| !h.is_empty());
                    let credits = col_map
                        .cell(row, ColumnField::Credits)
                        .and_then(|c| parse_numeric(&c))
                        .unwrap_or(0.0);

                    let category = infer_category(&code, &title, &type_hint);
                    outcome.records.push(SubjectRecord::from_extracted_row(
                        &code, &title, category, credits, hours,
                    ));
                }

                if !outcome.records.is_empty() {
                    info!(
                        "[table-strategy] extracted {} subjects from page {}",
                        outcome.records.len(),
                        page.index + 1
                    );
                    return outcome;
                }
            }
        }

        outcome
    }
}
