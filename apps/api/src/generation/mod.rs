//! Generation — orchestrates the per-action pipelines.
//!
//! Cover letter flow: segment posting → assemble prompt → delegate to the
//! completion service. ATS flow: segment résumé → assemble résumé-aware
//! prompt → delegate. One completion call per action, response text used
//! as-is; no schema is parsed back out of the generated prose.

pub mod assembly;
pub mod handlers;
pub mod prompts;

use tracing::info;

use crate::errors::AppError;
use crate::generation::assembly::{build_ats_prompt, build_cover_letter_prompt};
use crate::generation::prompts::{ATS_SYSTEM, COVER_LETTER_SYSTEM};
use crate::llm_client::CompletionService;
use crate::segment::{extract_resume_sections, parse_posting_sections, ResumeSections};

/// A drafted cover letter together with the exact prompt that produced it.
/// The prompt is returned so the caller can display or audit it.
#[derive(Debug, Clone)]
pub struct CoverLetterDraft {
    pub prompt: String,
    pub cover_letter: String,
}

/// An ATS compatibility report and the résumé spans that informed it.
#[derive(Debug, Clone)]
pub struct AtsReport {
    pub report: String,
    pub sections: ResumeSections,
}

/// Drafts a cover letter for the posting, tailored to the user's bio.
pub async fn draft_cover_letter(
    completion: &dyn CompletionService,
    posting_text: &str,
    user_bio: &str,
) -> Result<CoverLetterDraft, AppError> {
    let sections = parse_posting_sections(posting_text);
    info!(
        "posting segmented: {} requirement lines, {} responsibility lines",
        sections.requirements.len(),
        sections.responsibilities.len()
    );

    let prompt = build_cover_letter_prompt(posting_text, &sections, user_bio);

    let cover_letter = completion
        .complete(COVER_LETTER_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Completion(format!("cover letter generation failed: {e}")))?;

    Ok(CoverLetterDraft {
        prompt,
        cover_letter,
    })
}

/// Produces an ATS compatibility report for a résumé against the posting.
/// `resume_text` is `None` when PDF extraction yielded nothing; the prompt
/// then carries the placeholder literals and generation proceeds anyway.
pub async fn score_resume(
    completion: &dyn CompletionService,
    posting_text: &str,
    resume_text: Option<&str>,
) -> Result<AtsReport, AppError> {
    let sections = resume_text
        .map(extract_resume_sections)
        .unwrap_or_default();
    info!(
        "resume segmented: education={}, experience={}",
        sections.education.is_some(),
        sections.experience.is_some()
    );

    let prompt = build_ats_prompt(posting_text, resume_text, &sections);

    let report = completion
        .complete(ATS_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Completion(format!("ATS analysis failed: {e}")))?;

    Ok(AtsReport { report, sections })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::CompletionError;

    /// Records the last call and answers with canned text.
    struct FakeCompletion {
        canned: &'static str,
        last_prompt: Mutex<Option<String>>,
    }

    impl FakeCompletion {
        fn new(canned: &'static str) -> Self {
            Self {
                canned,
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionService for FakeCompletion {
        async fn complete(&self, _system: &str, prompt: &str) -> Result<String, CompletionError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(self.canned.to_string())
        }
    }

    struct FailingCompletion;

    #[async_trait]
    impl CompletionService for FailingCompletion {
        async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, CompletionError> {
            Err(CompletionError::MissingCredential)
        }
    }

    #[tokio::test]
    async fn test_draft_cover_letter_returns_prompt_and_completion_text() {
        let fake = FakeCompletion::new("Dear hiring manager, I am thrilled to apply.");
        let posting = "Requirements:\nRust\nResponsibilities:\nShip things";

        let draft = draft_cover_letter(&fake, posting, "Systems engineer, 8 years")
            .await
            .unwrap();

        assert_eq!(
            draft.cover_letter,
            "Dear hiring manager, I am thrilled to apply."
        );
        assert!(draft.prompt.contains("- Rust"));
        assert!(draft.prompt.contains("- Ship things"));
        assert!(draft.prompt.contains("Systems engineer, 8 years"));

        // The assembled prompt is what actually reached the service.
        let sent = fake.last_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(sent, draft.prompt);
    }

    #[tokio::test]
    async fn test_score_resume_embeds_extracted_sections() {
        let fake = FakeCompletion::new("ATS score: 72/100");
        let resume = "Education\nBSc Computer Science\nExperience\nAcme Corp";

        let report = score_resume(&fake, "Some posting", Some(resume)).await.unwrap();

        assert_eq!(report.report, "ATS score: 72/100");
        assert_eq!(
            report.sections.education.as_deref(),
            Some("Education\nBSc Computer Science")
        );
        let sent = fake.last_prompt.lock().unwrap().clone().unwrap();
        assert!(sent.contains("Experience\nAcme Corp"));
    }

    #[tokio::test]
    async fn test_score_resume_without_text_uses_placeholders() {
        let fake = FakeCompletion::new("ATS score: 0/100");

        let report = score_resume(&fake, "Some posting", None).await.unwrap();

        assert_eq!(report.sections, ResumeSections::default());
        let sent = fake.last_prompt.lock().unwrap().clone().unwrap();
        assert!(sent.contains(prompts::RESUME_TEXT_FALLBACK));
        assert!(sent.contains(prompts::SECTION_NOT_FOUND_FALLBACK));
    }

    #[tokio::test]
    async fn test_completion_failure_terminates_the_action() {
        let err = draft_cover_letter(&FailingCompletion, "posting", "bio")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Completion(_)));
    }
}
