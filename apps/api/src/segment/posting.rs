//! Posting Section Extractor — groups job-posting lines into requirements and
//! responsibilities buckets.
//!
//! Single-pass labeller over trimmed lines. A line matching a header pattern
//! switches the active bucket; any other non-empty line lands in whichever
//! bucket is active; lines before the first header are dropped. There is no
//! transition back to the unset state.
//!
//! Known quirk, kept on purpose: header matching is a substring search, so a
//! content line that happens to contain a header keyword is treated as a new
//! header and drops itself from the output.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static REQUIREMENTS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)requirements|qualifications").expect("valid header pattern"));

static RESPONSIBILITIES_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)responsibilities|duties").expect("valid header pattern"));

/// Ordered requirement and responsibility lines extracted from posting text.
///
/// Membership is purely a function of the last matching header seen, not of
/// actual semantic relevance. Unrecognized text yields two empty buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostingSections {
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Clone, Copy)]
enum Section {
    Requirements,
    Responsibilities,
}

/// Scans posting text line by line and buckets content under the last header
/// seen. Requirement headers win when a line matches both patterns.
pub fn parse_posting_sections(text: &str) -> PostingSections {
    let mut sections = PostingSections::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();

        if REQUIREMENTS_HEADER.is_match(line) {
            current = Some(Section::Requirements);
        } else if RESPONSIBILITIES_HEADER.is_match(line) {
            current = Some(Section::Responsibilities);
        } else if !line.is_empty() {
            match current {
                Some(Section::Requirements) => sections.requirements.push(line.to_string()),
                Some(Section::Responsibilities) => sections.responsibilities.push(line.to_string()),
                None => {}
            }
        }
    }

    sections
}
