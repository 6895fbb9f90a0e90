//! Document export — renders a generated text as a minimal Word document,
//! built entirely in memory for download.

use std::io::Cursor;

use anyhow::anyhow;
use docx_rs::{Docx, Paragraph, Run};

use crate::errors::AppError;

/// MIME type for the generated Word document.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Download filename offered to the client.
pub const DOCX_FILENAME: &str = "cover_letter.docx";

/// Packs the text into a `.docx` archive as a single paragraph.
pub fn render_docx(text: &str) -> Result<Vec<u8>, AppError> {
    let mut cursor = Cursor::new(Vec::new());

    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
        .build()
        .pack(&mut cursor)
        .map_err(|e| AppError::Internal(anyhow!("failed to pack docx: {e}")))?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_docx_produces_zip_archive() {
        let bytes = render_docx("Dear hiring manager, ...").unwrap();
        // .docx is a ZIP container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_render_docx_accepts_empty_text() {
        let bytes = render_docx("").unwrap();
        assert!(!bytes.is_empty());
    }
}
