//! Extraction orchestrator.
//!
//! Opens both document backends once, runs the strategies in priority order
//! (table, text-line, block-text), stops at the first non-empty record set,
//! and accumulates every warning along the way. An empty outcome after all
//! three strategies is valid and non-fatal; the caller decides whether to
//! surface manual entry.

use academe_models::SubjectRecord;
use tracing::{debug, info};

use crate::reader::{open_raw_text, open_structured, StructuredDocument};
use crate::strategy::{
    BlockTextStrategy, ExtractionStrategy, StrategyOutcome, TableStrategy, TextLineStrategy,
};

/// Both document handles for one extraction run, opened from one byte
/// buffer and dropped when the run returns. Strategies borrow the source
/// immutably; nothing is shared across invocations.
pub struct DocumentSource {
    structured: Option<StructuredDocument>,
    raw_text: Option<String>,
    open_warnings: Vec<String>,
}

impl DocumentSource {
    /// Opens both backends. A backend failure becomes a warning, not an
    /// error: the other backend may still carry the document.
    pub fn open(bytes: &[u8]) -> Self {
        let mut open_warnings = Vec::new();

        let structured = open_structured(bytes);
        if structured.is_none() {
            open_warnings.push("Structured PDF backend could not open the document.".to_string());
        }

        let raw_text = open_raw_text(bytes);
        if raw_text.is_none() {
            open_warnings.push("Raw-text PDF backend could not open the document.".to_string());
        }

        Self {
            structured,
            raw_text,
            open_warnings,
        }
    }

    /// Assembles a source from pre-opened parts.
    pub fn from_parts(structured: Option<StructuredDocument>, raw_text: Option<String>) -> Self {
        Self {
            structured,
            raw_text,
            open_warnings: Vec::new(),
        }
    }

    pub fn structured(&self) -> Option<&StructuredDocument> {
        self.structured.as_ref()
    }

    pub fn raw_text(&self) -> Option<&str> {
        self.raw_text.as_deref()
    }

    pub fn open_warnings(&self) -> &[String] {
        &self.open_warnings
    }
}

/// Final result of one extraction run: the selected strategy's records plus
/// the full warning history of every attempt.
#[derive(Debug, Default)]
pub struct ExtractionOutcome {
    pub subjects: Vec<SubjectRecord>,
    pub warnings: Vec<String>,
}

/// Runs the full strategy chain over a raw byte buffer.
pub fn extract_subjects(bytes: &[u8]) -> ExtractionOutcome {
    let source = DocumentSource::open(bytes);
    extract_subjects_from_source(&source)
}

/// Runs the strategy chain over an already-opened source.
pub fn extract_subjects_from_source(source: &DocumentSource) -> ExtractionOutcome {
    let strategies: [&dyn ExtractionStrategy; 3] =
        [&TableStrategy, &TextLineStrategy, &BlockTextStrategy];
    let fallback_notices = [
        "Table extraction found nothing; trying text-line strategy.",
        "Text-line strategy found nothing; trying block-text strategy.",
    ];

    let mut warnings = source.open_warnings().to_vec();
    let mut subjects = Vec::new();

    for (i, strategy) in strategies.iter().enumerate() {
        debug!("running {} strategy", strategy.name());
        let StrategyOutcome { records, warnings: w } = strategy.attempt(source);
        warnings.extend(w);

        if !records.is_empty() {
            info!("{} strategy selected with {} subjects", strategy.name(), records.len());
            subjects = records;
            break;
        }
        if let Some(notice) = fallback_notices.get(i) {
            warnings.push(notice.to_string());
        }
    }

    for record in &subjects {
        if record.is_suspect_zero_credit() {
            warnings.push(format!(
                "'{}' has credit weight 0 outside the mandatory category; likely a mis-parsed header row.",
                record.code
            ));
        }
    }

    ExtractionOutcome { subjects, warnings }
}
