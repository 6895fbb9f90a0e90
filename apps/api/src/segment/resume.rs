//! Résumé Section Extractor — locates education and experience blocks in raw
//! résumé text.
//!
//! For each label the extractor takes the earliest index at which any synonym
//! keyword appears (case-insensitive substring search, not tokenized, so it
//! can false-positive inside unrelated words). Whichever block starts first ends
//! where the other begins; the last block runs to end of text. A label whose
//! keywords never appear yields `None`, which is distinct from a found-but-empty
//! span.

use serde::Serialize;

const EDUCATION_KEYWORDS: &[&str] = &["education", "academic background", "academic history"];
const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work history", "employment history"];

/// The two optional résumé spans. At most one span per label is produced;
/// overlapping or missing sections degrade to `None` rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeSections {
    pub education: Option<String>,
    pub experience: Option<String>,
}

/// Byte offset of the earliest occurrence of any keyword in the haystack.
/// The haystack must already be lowercased; keywords are ASCII.
fn earliest_offset(haystack: &str, keywords: &[&str]) -> Option<usize> {
    keywords.iter().filter_map(|kw| haystack.find(kw)).min()
}

/// Splits résumé text into education and experience spans.
///
/// Offsets are found on an ASCII-lowercased copy, which maps bytes one-to-one
/// onto the original text, so the spans are sliced from the original.
pub fn extract_resume_sections(text: &str) -> ResumeSections {
    let lowered = text.to_ascii_lowercase();

    let education_start = earliest_offset(&lowered, EDUCATION_KEYWORDS);
    let experience_start = earliest_offset(&lowered, EXPERIENCE_KEYWORDS);

    let slice = |start: usize, end: usize| text[start..end].trim().to_string();

    match (education_start, experience_start) {
        (Some(edu), Some(exp)) if edu <= exp => ResumeSections {
            education: Some(slice(edu, exp)),
            experience: Some(slice(exp, text.len())),
        },
        (Some(edu), Some(exp)) => ResumeSections {
            education: Some(slice(edu, text.len())),
            experience: Some(slice(exp, edu)),
        },
        (Some(edu), None) => ResumeSections {
            education: Some(slice(edu, text.len())),
            experience: None,
        },
        (None, Some(exp)) => ResumeSections {
            education: None,
            experience: Some(slice(exp, text.len())),
        },
        (None, None) => ResumeSections::default(),
    }
}
