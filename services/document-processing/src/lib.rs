//! Document processing service.
//!
//! Turns uploaded scheme-of-teaching PDFs into structured subject records
//! and per-subject syllabus breakdowns. Extraction is layered: a table
//! pass, a per-line regex pass, and a whole-document regex pass, tried in
//! that order until one produces records. Failures degrade to warnings so
//! a malformed document never aborts a request.

pub mod category;
pub mod columns;
pub mod extractor;
pub mod reader;
pub mod strategy;
pub mod syllabus;

pub use category::infer_category;
pub use extractor::{extract_subjects, extract_subjects_from_source, DocumentSource, ExtractionOutcome};
pub use reader::{PageText, StructuredDocument};
pub use strategy::{ExtractionStrategy, StrategyOutcome, COURSE_ROW_GRAMMAR};
pub use syllabus::{extract_subject_syllabus, SyllabusOutcome};
