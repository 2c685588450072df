// src/roster/document.rs
use std::path::Path;

use lopdf::Document;

use crate::utils::error::PdfError;

/// Reads the roster PDF and returns the concatenated text of all pages, in
/// page order. A member line may straddle a page boundary in the underlying
/// text layout, so no page is skipped and the layout patterns run over the
/// joined text, never page by page.
pub fn read_document_text(path: &Path) -> Result<String, PdfError> {
    tracing::info!("Loading roster document: {}", path.display());

    let doc = Document::load(path).map_err(|e| PdfError::Load(e.to_string()))?;

    let pages = doc.get_pages();
    tracing::debug!("Document has {} pages", pages.len());

    let mut text = String::new();
    for (page_num, _page_id) in pages {
        let page_text = doc.extract_text(&[page_num]).map_err(|e| PdfError::Extract {
            page: page_num,
            detail: e.to_string(),
        })?;
        text.push_str(&page_text);
    }

    tracing::debug!("Extracted {} bytes of roster text", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_document_is_a_load_error() {
        let result = read_document_text(Path::new("/nonexistent/members.pdf"));
        assert!(matches!(result, Err(PdfError::Load(_))));
    }
}
