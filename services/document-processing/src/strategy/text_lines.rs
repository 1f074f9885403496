//! Text-line extraction strategy.
//!
//! Fallback for plain-text PDFs where no table is detected: the shared row
//! grammar is applied to every line, anchored at the line start. Category
//! inference runs on code and title only; no hint column exists here.

use academe_models::SubjectRecord;
use tracing::info;

use crate::category::infer_category;
use crate::extractor::DocumentSource;

use super::{ExtractionStrategy, StrategyOutcome, ROW_AT_LINE_START, TITLE_MAX_LEN, TITLE_MIN_LEN};

pub struct TextLineStrategy;

impl ExtractionStrategy for TextLineStrategy {
    fn name(&self) -> &'static str {
        "text-line"
    }

    fn attempt(&self, source: &DocumentSource) -> StrategyOutcome {
        let mut outcome = StrategyOutcome::default();

        // Page-aware lines when available, raw-text lines otherwise.
        let lines: Vec<&str> = if let Some(doc) = source.structured() {
            doc.pages().iter().flat_map(|p| p.text.lines()).collect()
        } else if let Some(raw) = source.raw_text() {
            raw.lines().collect()
        } else {
            outcome
                .warnings
                .push("No PDF backend could supply text lines.".to_string());
            return outcome;
        };

        for line in lines {
            let line = line.trim();
            let Some(caps) = ROW_AT_LINE_START.captures(line) else {
                continue;
            };

            let code = &caps[1];
            let title = caps[2].trim();
            if title.len() < TITLE_MIN_LEN || title.len() > TITLE_MAX_LEN {
                continue;
            }
            let credits = caps[3].parse::<f64>().unwrap_or(0.0);

            let category = infer_category(code, title, "");
            outcome
                .records
                .push(SubjectRecord::from_extracted_row(code, title, category, credits, None));
        }

        if outcome.records.is_empty() {
            outcome
                .warnings
                .push("Text-line regex found no subjects.".to_string());
        } else {
            info!("[text-strategy] extracted {} subjects", outcome.records.len());
        }
        outcome
    }
}
