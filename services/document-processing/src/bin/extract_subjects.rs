//! Command-line front end for the extraction pipeline.
//!
//! Usage: `extract-subjects <scheme.pdf> [course-code]`
//!
//! Prints the extracted subject records (and, when a course code is given,
//! that subject's syllabus modules) as pretty JSON on stdout. Warnings ride
//! along in the JSON so scripted callers see the same diagnostics a service
//! response would carry.

use academe_document_processing::{extract_subjects_from_source, extract_subject_syllabus, DocumentSource};
use academe_models::{SubjectRecord, SyllabusModule};
use academe_utils::{init_logging, validate_file_size, validate_file_type, AppConfig};
use anyhow::{bail, Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CliOutput {
    subjects: Vec<SubjectRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    syllabus: Option<Vec<SyllabusModule>>,
    warnings: Vec<String>,
}

fn main() -> Result<()> {
    let config = AppConfig::load_or_default();
    init_logging(&config.logging)?;

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: extract-subjects <scheme.pdf> [course-code]");
    };
    let subject_code = args.next();

    let allowed: Vec<&str> = config
        .extraction
        .allowed_file_types
        .iter()
        .map(String::as_str)
        .collect();
    validate_file_type(&path, &allowed)?;
    let bytes = std::fs::read(&path).with_context(|| format!("reading {path}"))?;
    validate_file_size(bytes.len() as u64, config.extraction.max_upload_bytes)?;

    let source = DocumentSource::open(&bytes);
    let mut outcome = extract_subjects_from_source(&source);

    let syllabus = subject_code.map(|code| {
        let result = extract_subject_syllabus(&source, &code);
        outcome.warnings.extend(result.warnings);
        result.modules
    });

    let output = CliOutput {
        subjects: outcome.subjects,
        syllabus,
        warnings: outcome.warnings,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
