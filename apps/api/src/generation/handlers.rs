//! Axum route handlers for the posting and generation API.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderValue},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::{render_docx, DOCX_FILENAME, DOCX_MIME};
use crate::generation::{draft_cover_letter, score_resume};
use crate::ingest::extract_resume_text;
use crate::scrape::{extract_posting_text, fetch_posting_page, EXTRACTION_FALLBACK};
use crate::segment::{parse_posting_sections, PostingSections, ResumeSections};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FetchPostingRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct FetchPostingResponse {
    pub posting_text: String,
    /// False when no description container matched and `posting_text` carries
    /// the fallback placeholder instead of page content.
    pub extracted: bool,
}

#[derive(Debug, Deserialize)]
pub struct ParsePostingRequest {
    pub posting_text: String,
}

#[derive(Debug, Serialize)]
pub struct ParsePostingResponse {
    #[serde(flatten)]
    pub sections: PostingSections,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub posting_text: String,
    pub user_bio: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub prompt: String,
    pub cover_letter: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AtsReportResponse {
    pub report: String,
    pub sections: ResumeSections,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/postings/fetch
///
/// Fetches a job posting page and extracts its description container.
/// A page without a recognizable container degrades to the fallback
/// placeholder rather than an error.
pub async fn handle_fetch_posting(
    State(state): State<AppState>,
    Json(request): Json<FetchPostingRequest>,
) -> Result<Json<FetchPostingResponse>, AppError> {
    if request.url.trim().is_empty() {
        return Err(AppError::Validation("url cannot be empty".to_string()));
    }

    let html = fetch_posting_page(&state.http, &request.url).await?;

    Ok(Json(match extract_posting_text(&html) {
        Some(posting_text) => FetchPostingResponse {
            posting_text,
            extracted: true,
        },
        None => FetchPostingResponse {
            posting_text: EXTRACTION_FALLBACK.to_string(),
            extracted: false,
        },
    }))
}

/// POST /api/v1/postings/parse
///
/// Previews the heuristic segmentation of pasted posting text.
pub async fn handle_parse_posting(
    Json(request): Json<ParsePostingRequest>,
) -> Result<Json<ParsePostingResponse>, AppError> {
    if request.posting_text.trim().is_empty() {
        return Err(AppError::Validation(
            "posting_text cannot be empty".to_string(),
        ));
    }

    Ok(Json(ParsePostingResponse {
        sections: parse_posting_sections(&request.posting_text),
    }))
}

/// POST /api/v1/cover-letters
///
/// Full pipeline: segment the posting, assemble the prompt, delegate to the
/// completion service. Returns the prompt alongside the drafted letter.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.posting_text.trim().is_empty() || request.user_bio.trim().is_empty() {
        return Err(AppError::Validation(
            "both posting_text and user_bio are required".to_string(),
        ));
    }

    let draft = draft_cover_letter(
        state.completion.as_ref(),
        &request.posting_text,
        &request.user_bio,
    )
    .await?;

    Ok(Json(CoverLetterResponse {
        prompt: draft.prompt,
        cover_letter: draft.cover_letter,
    }))
}

/// POST /api/v1/cover-letters/export
///
/// Renders the given text as a downloadable Word document.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<impl IntoResponse, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let bytes = render_docx(&request.text)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(DOCX_MIME));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{DOCX_FILENAME}\""))
            .map_err(|e| AppError::Internal(e.into()))?,
    );

    Ok((headers, bytes))
}

/// POST /api/v1/ats-reports
///
/// Multipart form: a `resume` PDF file and a `posting_text` field. Extracts
/// the résumé text, locates its education/experience spans, and delegates
/// ATS analysis to the completion service. A résumé without extractable text
/// still produces a report, built from the placeholder literals.
pub async fn handle_ats_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AtsReportResponse>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut posting_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                resume_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("reading resume failed: {e}")))?,
                );
            }
            Some("posting_text") => {
                posting_text = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("reading posting_text failed: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let posting_text = posting_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("posting_text field is required".to_string()))?;
    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("resume file field is required".to_string()))?;

    let resume_text = extract_resume_text(&resume_bytes);

    let report = score_resume(
        state.completion.as_ref(),
        &posting_text,
        resume_text.as_deref(),
    )
    .await?;

    Ok(Json(AtsReportResponse {
        report: report.report,
        sections: report.sections,
    }))
}
