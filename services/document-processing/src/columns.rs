//! Column-header detection for extracted course tables.
//!
//! Real-world scheme tables disagree on header wording, so each semantic
//! field carries a keyword list and a cell matches a field when any keyword
//! is a substring of the padded, lower-cased cell. Only the code and title
//! columns are required; credits, hours, and category columns are frequently
//! merged or missing in scanned documents.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Rows scanned for a header before a table is given up on.
pub const HEADER_SCAN_ROWS: usize = 15;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Semantic table fields the extractor knows how to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnField {
    Code,
    Title,
    Credits,
    Cie,
    See,
    Hours,
    Category,
}

impl ColumnField {
    pub const ALL: [ColumnField; 7] = [
        ColumnField::Code,
        ColumnField::Title,
        ColumnField::Credits,
        ColumnField::Cie,
        ColumnField::See,
        ColumnField::Hours,
        ColumnField::Category,
    ];

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Code => &["course code", "sub code", "subject code", "code", "sl.no", "sl no"],
            Self::Title => &[
                "course title",
                "subject title",
                "subject name",
                "subject",
                "title",
                "name",
            ],
            Self::Credits => &["credit", "cr ", "credits"],
            Self::Cie => &["cie", " ia ", "internal assessment", "internal marks"],
            Self::See => &["see", " ee ", "external", "semester end", "end exam"],
            Self::Hours => &["l-t-p", "l t p", "ltp", "hrs", "hours", "l:t:p"],
            Self::Category => &["category", "type", "subject type"],
        }
    }
}

/// Collapses internal whitespace (including line breaks inside a cell) and
/// trims the result.
pub fn clean_cell(cell: &str) -> String {
    WHITESPACE_RE.replace_all(cell, " ").trim().to_string()
}

/// Keyword match against a padded, lower-cased cell. Padding lets keywords
/// like `" ia "` anchor on word boundaries without a regex per field.
pub fn cell_matches(cell: &str, field: ColumnField) -> bool {
    if cell.is_empty() {
        return false;
    }
    let padded = format!(" {} ", cell.trim().to_lowercase());
    field.keywords().iter().any(|kw| padded.contains(kw))
}

/// Field-to-column mapping for one table. Ephemeral: built once per header
/// row and discarded with the table.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    columns: HashMap<ColumnField, usize>,
}

impl ColumnMap {
    pub fn get(&self, field: ColumnField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Cleaned cell content for a field, when the column exists and the row
    /// is wide enough.
    pub fn cell(&self, row: &[String], field: ColumnField) -> Option<String> {
        self.get(field).and_then(|i| row.get(i)).map(|c| clean_cell(c))
    }
}

/// Scans the first [`HEADER_SCAN_ROWS`] rows for a header row; the first row
/// resolving both the code and title fields is accepted. Per field, the
/// first matching column wins.
pub fn detect_column_map(rows: &[Vec<String>]) -> Option<ColumnMap> {
    for row in rows.iter().take(HEADER_SCAN_ROWS) {
        let mut columns = HashMap::new();
        for (i, cell) in row.iter().enumerate() {
            let cleaned = clean_cell(cell);
            for field in ColumnField::ALL {
                if let std::collections::hash_map::Entry::Vacant(entry) = columns.entry(field) {
                    if cell_matches(&cleaned, field) {
                        entry.insert(i);
                    }
                }
            }
        }
        if columns.contains_key(&ColumnField::Code) && columns.contains_key(&ColumnField::Title) {
            return Some(ColumnMap { columns });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_detects_standard_header() {
        let rows = vec![
            row(&["VTU 2024 Scheme", "", ""]),
            row(&["Course Code", "Course Title", "Credits", "CIE", "SEE"]),
        ];
        let map = detect_column_map(&rows).unwrap();
        assert_eq!(map.get(ColumnField::Code), Some(0));
        assert_eq!(map.get(ColumnField::Title), Some(1));
        assert_eq!(map.get(ColumnField::Credits), Some(2));
        assert_eq!(map.get(ColumnField::Cie), Some(3));
        assert_eq!(map.get(ColumnField::See), Some(4));
    }

    #[test]
    fn test_tolerates_missing_optional_columns() {
        let rows = vec![row(&["Sub Code", "Subject Name"])];
        let map = detect_column_map(&rows).unwrap();
        assert_eq!(map.get(ColumnField::Code), Some(0));
        assert_eq!(map.get(ColumnField::Title), Some(1));
        assert_eq!(map.get(ColumnField::Credits), None);
    }

    #[test]
    fn test_header_with_line_break_in_cell() {
        let rows = vec![row(&["Course\nCode", "Course\nTitle", "L-T-P"])];
        let map = detect_column_map(&rows).unwrap();
        assert_eq!(map.get(ColumnField::Code), Some(0));
        assert_eq!(map.get(ColumnField::Hours), Some(2));
    }

    #[test]
    fn test_no_header_found() {
        let rows = vec![
            row(&["BCS301", "Operating Systems", "4"]),
            row(&["BCS302", "Digital Design", "3"]),
        ];
        assert!(detect_column_map(&rows).is_none());
    }

    #[test]
    fn test_scan_window_is_bounded() {
        let mut rows: Vec<Vec<String>> = (0..HEADER_SCAN_ROWS).map(|_| row(&["x", "y"])).collect();
        rows.push(row(&["Course Code", "Course Title"]));
        // Header sits past the scan window and must not be found.
        assert!(detect_column_map(&rows).is_none());
    }

    #[test]
    fn test_cell_matches_padding() {
        assert!(cell_matches("IA", ColumnField::Cie));
        assert!(!cell_matches("Media", ColumnField::Cie));
    }
}
