//! Résumé ingestion — extracts plain text from an uploaded PDF held fully in
//! memory.
//!
//! Extraction failure degrades to not-found rather than erroring: downstream
//! prompt assembly substitutes its placeholder and generation proceeds with
//! degraded input.

use tracing::warn;

/// Extracts text from PDF bytes. Returns `None` for encrypted, scanned, or
/// corrupted files, and for files whose pages carry no text at all.
pub fn extract_resume_text(bytes: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => {
            let text = text.trim().to_string();
            if text.is_empty() {
                warn!("resume PDF contained no extractable text");
                None
            } else {
                Some(text)
            }
        }
        Err(e) => {
            warn!("resume PDF text extraction failed: {e}");
            None
        }
    }
}
