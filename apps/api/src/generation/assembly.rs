//! Prompt assembly — deterministic string templating over the segmented
//! inputs, with fixed fallback literals for anything absent.
//!
//! Assembled prompts are passed to the completion service verbatim; no
//! validation or escaping of the injected content is performed.

use crate::generation::prompts::{
    ATS_PROMPT_TEMPLATE, COVER_LETTER_PROMPT_TEMPLATE, NOT_SPECIFIED_FALLBACK,
    RESUME_TEXT_FALLBACK, SECTION_NOT_FOUND_FALLBACK,
};
use crate::segment::{PostingSections, ResumeSections};

/// Formats section lines as `- item` fragments joined by single spaces, or the
/// fallback literal when the list is empty.
fn format_bullets(items: &[String]) -> String {
    if items.is_empty() {
        return NOT_SPECIFIED_FALLBACK.to_string();
    }
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Builds the cover letter prompt from posting text, its segmented sections,
/// and the user's free-text bio.
pub fn build_cover_letter_prompt(
    posting_text: &str,
    sections: &PostingSections,
    user_bio: &str,
) -> String {
    COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_description}", posting_text)
        .replace("{requirements}", &format_bullets(&sections.requirements))
        .replace(
            "{responsibilities}",
            &format_bullets(&sections.responsibilities),
        )
        .replace("{user_bio}", user_bio)
}

/// Builds the résumé-aware ATS prompt. Missing resume text and absent spans
/// substitute their placeholder literals.
pub fn build_ats_prompt(
    posting_text: &str,
    resume_text: Option<&str>,
    sections: &ResumeSections,
) -> String {
    ATS_PROMPT_TEMPLATE
        .replace("{job_description}", posting_text)
        .replace("{resume_text}", resume_text.unwrap_or(RESUME_TEXT_FALLBACK))
        .replace(
            "{education}",
            sections
                .education
                .as_deref()
                .unwrap_or(SECTION_NOT_FOUND_FALLBACK),
        )
        .replace(
            "{experience}",
            sections
                .experience
                .as_deref()
                .unwrap_or(SECTION_NOT_FOUND_FALLBACK),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists_substitute_fallback_literal_verbatim() {
        let prompt =
            build_cover_letter_prompt("Some posting", &PostingSections::default(), "My bio");
        assert_eq!(prompt.matches(NOT_SPECIFIED_FALLBACK).count(), 2);
        assert!(!prompt.contains("Requirements:\n\n"));
    }

    #[test]
    fn test_bullets_join_with_single_spaces() {
        let sections = PostingSections {
            requirements: vec!["Rust".to_string(), "SQL".to_string()],
            responsibilities: vec![],
        };
        let prompt = build_cover_letter_prompt("posting", &sections, "bio");
        assert!(prompt.contains("- Rust - SQL"));
    }

    #[test]
    fn test_posting_and_bio_are_embedded() {
        let prompt = build_cover_letter_prompt(
            "Senior Rust Engineer at Acme",
            &PostingSections::default(),
            "Ten years of systems programming",
        );
        assert!(prompt.contains("Job Description: Senior Rust Engineer at Acme"));
        assert!(prompt.contains("User Bio: Ten years of systems programming"));
    }

    #[test]
    fn test_ats_prompt_substitutes_section_placeholders() {
        let prompt = build_ats_prompt("posting", Some("resume body"), &ResumeSections::default());
        assert!(prompt.contains("resume body"));
        assert_eq!(prompt.matches(SECTION_NOT_FOUND_FALLBACK).count(), 2);
    }

    #[test]
    fn test_ats_prompt_substitutes_resume_placeholder() {
        let prompt = build_ats_prompt("posting", None, &ResumeSections::default());
        assert!(prompt.contains(RESUME_TEXT_FALLBACK));
    }

    #[test]
    fn test_ats_prompt_embeds_found_sections() {
        let sections = ResumeSections {
            education: Some("Education\nBSc".to_string()),
            experience: Some("Experience\nAcme".to_string()),
        };
        let prompt = build_ats_prompt("posting", Some("resume"), &sections);
        assert!(prompt.contains("Education section:\nEducation\nBSc"));
        assert!(prompt.contains("Experience section:\nExperience\nAcme"));
    }
}
