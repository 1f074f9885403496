//! Per-subject syllabus extraction.
//!
//! Given a course code, collects the pages that mention it (plus the page
//! after each, since module listings routinely spill over a page break),
//! then walks the combined lines for module headings, topic bodies, and a
//! course-objectives block. Objectives belong to the course as a whole, so
//! they are attached to module 1 only.

use std::collections::BTreeSet;

use academe_models::{SubjectRecord, SyllabusModule};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::extractor::DocumentSource;

/// `Module 1: Introduction`, `MODULE - 2`, `Unit 3 Trees` and friends.
static MODULE_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:module|unit)\s*[-\u{2013}:]?\s*(\d+)\s*[:\-\u{2013}]?\s*(.*)$").unwrap()
});

static OBJECTIVES_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)course\s+objective|learning\s+objective|objective").unwrap());

/// Any of these ends an objectives block: the next structural section has
/// started.
static OBJECTIVES_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)module|unit|course\s+outcome|co\s*\d|references|text\s+book").unwrap()
});

/// Runaway guard for documents that never close the objectives section.
const OBJECTIVES_MAX_LINES: usize = 20;

#[derive(Debug, Default)]
pub struct SyllabusOutcome {
    pub modules: Vec<SyllabusModule>,
    pub warnings: Vec<String>,
}

/// In-flight module while its topic lines are still accumulating.
struct ModuleDraft {
    module_number: u32,
    title: String,
    topics: Vec<String>,
}

impl ModuleDraft {
    fn finish(self) -> SyllabusModule {
        SyllabusModule {
            module_number: self.module_number,
            title: self.title,
            topics: self.topics.join("\n"),
            learning_objectives: String::new(),
        }
    }
}

/// A topic line carries actual prose: more than a couple of characters and
/// not a bare number (page numbers, hour counts).
fn is_body_line(line: &str) -> bool {
    line.len() > 2 && !line.chars().all(|c| c.is_ascii_digit())
}

/// Pages that mention the code, each followed by its successor, in document
/// order without duplicates.
fn relevant_page_indices(source: &DocumentSource, code: &str) -> Vec<usize> {
    let Some(doc) = source.structured() else {
        return Vec::new();
    };

    let mut indices = BTreeSet::new();
    for page in doc.pages() {
        if page.text.to_uppercase().contains(code) {
            indices.insert(page.index);
            if page.index + 1 < doc.page_count() {
                indices.insert(page.index + 1);
            }
        }
    }
    indices.into_iter().collect()
}

/// Extracts the module breakdown for one course code.
pub fn extract_subject_syllabus(source: &DocumentSource, code: &str) -> SyllabusOutcome {
    let code = SubjectRecord::normalize_code(code);
    let mut outcome = SyllabusOutcome::default();

    let Some(doc) = source.structured() else {
        outcome
            .warnings
            .push("Structured PDF backend unavailable; syllabus extraction skipped.".to_string());
        return outcome;
    };

    let indices = relevant_page_indices(source, &code);
    if indices.is_empty() {
        outcome
            .warnings
            .push(format!("Course code '{code}' was not found in the document."));
        return outcome;
    }

    let mut objectives: Vec<String> = Vec::new();
    let mut collecting_objectives = false;
    let mut objectives_done = false;
    let mut current: Option<ModuleDraft> = None;

    for index in &indices {
        let Some(text) = doc.page_text(*index) else {
            continue;
        };
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(caps) = MODULE_HEADING_RE.captures(line) {
                // The objectives block ends for good at the first module
                // heading; a later body line mentioning "objective" must not
                // reopen it and steal topic lines.
                if collecting_objectives {
                    collecting_objectives = false;
                    objectives_done = true;
                }
                if let Some(draft) = current.take() {
                    outcome.modules.push(draft.finish());
                }
                current = Some(ModuleDraft {
                    module_number: caps[1].parse().unwrap_or(0),
                    title: caps[2].trim().to_string(),
                    topics: Vec::new(),
                });
                continue;
            }

            if collecting_objectives {
                if OBJECTIVES_END_RE.is_match(line) || objectives.len() >= OBJECTIVES_MAX_LINES {
                    collecting_objectives = false;
                    objectives_done = true;
                } else if is_body_line(line) {
                    objectives.push(line.to_string());
                }
                continue;
            }

            if !objectives_done && OBJECTIVES_START_RE.is_match(line) {
                collecting_objectives = true;
                continue;
            }

            if let Some(draft) = current.as_mut() {
                if is_body_line(line) {
                    draft.topics.push(line.to_string());
                }
            }
        }
    }
    if let Some(draft) = current.take() {
        outcome.modules.push(draft.finish());
    }

    if outcome.modules.is_empty() {
        outcome.warnings.push(format!(
            "No module headings were found for course code '{code}'."
        ));
        return outcome;
    }

    if let Some(first) = outcome.modules.iter_mut().find(|m| m.module_number == 1) {
        first.learning_objectives = objectives.join("\n");
    }

    info!(
        "extracted {} syllabus modules for {}",
        outcome.modules.len(),
        code
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{PageText, StructuredDocument};

    fn source(pages: Vec<&str>) -> DocumentSource {
        DocumentSource::from_parts(
            Some(StructuredDocument::from_pages(
                pages
                    .into_iter()
                    .enumerate()
                    .map(|(index, text)| PageText {
                        index,
                        text: text.to_string(),
                    })
                    .collect(),
            )),
            None,
        )
    }

    const SYLLABUS_PAGE: &str = "\
BCS301  Mathematics for Computer Science

Course Objectives:
Understand probability distributions used in computing.
Apply statistical inference to engineering data.

Module 1: Probability Distributions
Random variables and probability mass functions.
Binomial and Poisson distributions.
8

Module 2: Joint Distributions
Joint probability and covariance.
";

    #[test]
    fn test_extracts_modules_and_objectives() {
        let outcome = extract_subject_syllabus(&source(vec![SYLLABUS_PAGE]), "BCS301");
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.modules.len(), 2);

        let first = &outcome.modules[0];
        assert_eq!(first.module_number, 1);
        assert_eq!(first.title, "Probability Distributions");
        // Bare hour counts are not topics.
        assert_eq!(first.topics.lines().count(), 2);
        assert!(first.topics.contains("Binomial and Poisson"));
        assert_eq!(first.learning_objectives.lines().count(), 2);
        assert!(first.has_objectives());

        let second = &outcome.modules[1];
        assert_eq!(second.module_number, 2);
        assert!(!second.has_objectives());
    }

    #[test]
    fn test_topic_line_mentioning_objective_stays_a_topic() {
        let page = "\
BCS304  Systems Engineering

Course Objectives:
Understand system design.

Module 1: Foundations
Requirements and constraints.
The objective of this module is integration.
State machines and interfaces.
";
        let outcome = extract_subject_syllabus(&source(vec![page]), "BCS304");
        assert_eq!(outcome.modules.len(), 1);

        let module = &outcome.modules[0];
        assert_eq!(module.learning_objectives, "Understand system design.");
        assert_eq!(module.topics.lines().count(), 3);
        assert!(module.topics.contains("The objective of this module is integration."));
        assert!(module.topics.contains("State machines and interfaces."));
    }

    #[test]
    fn test_module_spills_onto_next_page() {
        let page_one = "\
BCS302  Digital Design
Module 1: Combinational Logic
Boolean algebra and Karnaugh maps.
";
        let page_two = "\
Module 2: Sequential Logic
Flip-flops and registers.
";
        let outcome =
            extract_subject_syllabus(&source(vec![page_one, page_two, "unrelated"]), "BCS302");
        assert_eq!(outcome.modules.len(), 2);
        assert_eq!(outcome.modules[1].title, "Sequential Logic");
    }

    #[test]
    fn test_code_lookup_is_normalized() {
        let outcome = extract_subject_syllabus(&source(vec![SYLLABUS_PAGE]), "  bcs301 ");
        assert_eq!(outcome.modules.len(), 2);
    }

    #[test]
    fn test_missing_code_warns() {
        let outcome = extract_subject_syllabus(&source(vec![SYLLABUS_PAGE]), "BEC999");
        assert!(outcome.modules.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("BEC999"));
    }

    #[test]
    fn test_no_headings_warns() {
        let page = "BCS303 appears here but no structured syllabus follows.";
        let outcome = extract_subject_syllabus(&source(vec![page]), "BCS303");
        assert!(outcome.modules.is_empty());
        assert!(outcome.warnings[0].contains("module headings"));
    }

    #[test]
    fn test_no_backend_warns() {
        let outcome =
            extract_subject_syllabus(&DocumentSource::from_parts(None, None), "BCS301");
        assert!(outcome.modules.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
    }
}
