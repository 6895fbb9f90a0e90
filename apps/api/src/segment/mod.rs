//! Heuristic text segmentation: keyword-triggered splitting of unstructured
//! posting and résumé text into labeled subsections.

pub mod posting;
pub mod resume;

pub use posting::{parse_posting_sections, PostingSections};
pub use resume::{extract_resume_sections, ResumeSections};
