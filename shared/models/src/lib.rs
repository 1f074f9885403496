//! # Academe Core Domain Models
//!
//! Core domain models for the academic data engine. All models implement
//! serialization with serde and validation with the validator crate.
//!
//! ## Key Models
//!
//! - **SubjectRecord**: a normalized course row recovered from a syllabus PDF
//! - **SubjectCategory**: the closed 2024-scheme classification driving CIE formulas
//! - **RawComponentMarks** / **CieResult**: raw CIE components and the derived score
//! - **SeeMark**: semester-end exam mark with /100 to /50 reduction
//! - **SyllabusModule**: per-subject module/topic block from detailed syllabus pages
//!
//! ## Validation
//!
//! - Course-code grammar validation
//! - Title length bounds (4-120)
//! - Non-negative mark and credit ranges

pub mod cie;
pub mod subject;


pub use cie::{CieResult, RawComponentMarks, SeeMark};
pub use subject::{SubjectCategory, SubjectKey, SubjectRecord, SyllabusModule};
