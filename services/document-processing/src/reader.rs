//! PDF loading backends.
//!
//! Two independent backends wrap the raw byte buffer: a page-aware
//! structured handle (lopdf) used for table and per-line extraction, and a
//! whole-document raw-text handle (pdf-extract) used as the last resort.
//! Open failures are downgraded to warnings so the orchestrator can still
//! report an empty-but-valid outcome.

use lopdf::Document;
use tracing::warn;

/// Text of a single page, 0-indexed in document order.
#[derive(Debug, Clone)]
pub struct PageText {
    pub index: usize,
    pub text: String,
}

/// Page-aware document handle. Fully materialized at open time; dropped on
/// every exit path by ownership.
#[derive(Debug, Clone)]
pub struct StructuredDocument {
    pages: Vec<PageText>,
}

impl StructuredDocument {
    /// Builds a handle from already-extracted page text. Useful for callers
    /// that obtained text through a different channel.
    pub fn from_pages(pages: Vec<PageText>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_text(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(|p| p.text.as_str())
    }
}

/// Opens the page-aware backend. Returns `None` (with a logged warning) when
/// the buffer cannot be parsed; pages whose content streams fail to decode
/// are kept as empty text so page indices stay stable.
pub fn open_structured(bytes: &[u8]) -> Option<StructuredDocument> {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("structured PDF backend could not open document: {}", e);
            return None;
        }
    };

    let mut pages = Vec::new();
    for (index, page_number) in doc.get_pages().keys().enumerate() {
        let text = match doc.extract_text(&[*page_number]) {
            Ok(text) => text,
            Err(e) => {
                warn!("could not extract text from page {}: {}", index + 1, e);
                String::new()
            }
        };
        pages.push(PageText { index, text });
    }

    Some(StructuredDocument { pages })
}

/// Opens the raw-text backend: one text blob for the whole document.
pub fn open_raw_text(bytes: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("raw-text PDF backend could not open document: {}", e);
            None
        }
    }
}
