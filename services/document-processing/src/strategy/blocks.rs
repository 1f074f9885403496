//! Block-text extraction strategy.
//!
//! Last resort: scanned or irregular PDFs may not preserve clean line
//! breaks, so the shared row grammar is scanned globally over the
//! whole-document text blob, unanchored to line boundaries. Zero results
//! here means the document is likely image-based.

use academe_models::SubjectRecord;
use tracing::info;

use crate::category::infer_category;
use crate::extractor::DocumentSource;

use super::{ExtractionStrategy, StrategyOutcome, ROW_ANYWHERE, TITLE_MIN_LEN};

pub struct BlockTextStrategy;

impl ExtractionStrategy for BlockTextStrategy {
    fn name(&self) -> &'static str {
        "block-text"
    }

    fn attempt(&self, source: &DocumentSource) -> StrategyOutcome {
        let mut outcome = StrategyOutcome::default();

        let Some(text) = source.raw_text() else {
            outcome
                .warnings
                .push("Raw-text PDF backend unavailable; block-text strategy skipped.".to_string());
            return outcome;
        };

        for caps in ROW_ANYWHERE.captures_iter(text) {
            let code = &caps[1];
            let title = caps[2].trim();
            if title.len() < TITLE_MIN_LEN {
                continue;
            }
            let credits = caps[3].parse::<f64>().unwrap_or(0.0);

            let category = infer_category(code, title, "");
            outcome
                .records
                .push(SubjectRecord::from_extracted_row(code, title, category, credits, None));
        }

        if outcome.records.is_empty() {
            outcome.warnings.push(
                "Block-text scan could not extract subjects. PDF may be image-based or scanned; please use manual entry."
                    .to_string(),
            );
        } else {
            info!("[block-strategy] extracted {} subjects", outcome.records.len());
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_from_raw(text: &str) -> DocumentSource {
        DocumentSource::from_parts(None, Some(text.to_string()))
    }

    #[test]
    fn test_scans_across_broken_lines() {
        // No clean one-row-per-line structure; matches are found anywhere.
        let text = "Preamble text BCS301   Operating Systems   4 trailing BCS302   Digital Design Principles   3 end";
        let outcome = BlockTextStrategy.attempt(&source_from_raw(text));
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].code, "BCS301");
        assert_eq!(outcome.records[1].code, "BCS302");
    }

    #[test]
    fn test_terminal_warning_when_nothing_found() {
        let outcome = BlockTextStrategy.attempt(&source_from_raw("scanned image placeholder"));
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("manual entry"));
    }

    #[test]
    fn test_missing_backend_warns() {
        let outcome = BlockTextStrategy.attempt(&DocumentSource::from_parts(None, None));
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
    }
}
