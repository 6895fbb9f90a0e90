//! Job posting acquisition — fetches a posting page and extracts the
//! description container from its HTML.
//!
//! Extraction targets the two class patterns LinkedIn uses for its description
//! container, then falls back to any `<div>` whose class mentions
//! `job-description`. No match is an explicit not-found, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::info;

use crate::errors::AppError;

/// Fixed browser User-Agent sent with every posting fetch. Job boards serve
/// stripped-down or blocked pages to unknown clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Placeholder returned to the caller when no description container matches.
pub const EXTRACTION_FALLBACK: &str = "Could not extract job description automatically.";

static DESCRIPTION_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"description__text|show-more-less-html__markup").expect("valid class pattern")
});

/// Fetches the posting page body as HTML.
pub async fn fetch_posting_page(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    info!("fetching job posting page: {url}");

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await
        .map_err(|e| AppError::Fetch(format!("request to {url} failed: {e}")))?;

    response
        .text()
        .await
        .map_err(|e| AppError::Fetch(format!("reading body from {url} failed: {e}")))
}

/// Extracts the job description text from posting-page HTML.
///
/// Tries the known description container classes first, then any `<div>`
/// whose class contains `job-description`. Returns `None` when neither
/// matches; callers substitute [`EXTRACTION_FALLBACK`].
pub fn extract_posting_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let divs = Selector::parse("div").expect("valid div selector");

    let primary = document
        .select(&divs)
        .find(|el| class_of(el).is_some_and(|c| DESCRIPTION_CLASS.is_match(c)));

    let container = primary.or_else(|| {
        document
            .select(&divs)
            .find(|el| class_of(el).is_some_and(|c| c.contains("job-description")))
    })?;

    let text = element_text(&container);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn class_of<'a>(el: &ElementRef<'a>) -> Option<&'a str> {
    el.value().attr("class")
}

/// Collects an element's text nodes, trimming each and joining with newlines.
fn element_text(el: &ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_linkedin_description_container() {
        let html = r#"<html><body>
            <div class="top-card">Acme Corp</div>
            <div class="description__text description__text--rich">
                <p>We build rockets.</p>
                <p>Requirements: Rust</p>
            </div>
        </body></html>"#;
        let text = extract_posting_text(html).unwrap();
        assert_eq!(text, "We build rockets.\nRequirements: Rust");
    }

    #[test]
    fn test_extracts_show_more_less_markup_container() {
        let html = r#"<div class="show-more-less-html__markup">Ship things daily</div>"#;
        assert_eq!(
            extract_posting_text(html).as_deref(),
            Some("Ship things daily")
        );
    }

    #[test]
    fn test_falls_back_to_generic_job_description_class() {
        let html = r#"<html><body>
            <div class="header">nav</div>
            <div class="acme-job-description-panel">Build <b>widgets</b> here</div>
        </body></html>"#;
        assert_eq!(
            extract_posting_text(html).as_deref(),
            Some("Build\nwidgets\nhere")
        );
    }

    #[test]
    fn test_known_container_wins_over_generic_fallback() {
        let html = r#"<html><body>
            <div class="job-description-extra">wrong one</div>
            <div class="description__text">right one</div>
        </body></html>"#;
        assert_eq!(extract_posting_text(html).as_deref(), Some("right one"));
    }

    #[test]
    fn test_no_matching_container_is_not_found() {
        let html = r#"<div class="hero">Welcome to our careers page</div>"#;
        assert_eq!(extract_posting_text(html), None);
    }

    #[test]
    fn test_empty_container_is_not_found() {
        let html = r#"<div class="description__text">   </div>"#;
        assert_eq!(extract_posting_text(html), None);
    }
}
