use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The completion-service credential is deliberately optional: a missing key
/// is reported at startup and the generation endpoints fail when first used,
/// so the service can still serve fetch/parse previews without one.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Obscures an API key for log output, keeping only the last four characters.
pub fn obscure_key(key: &str) -> String {
    let tail: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("sk-...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obscure_key_keeps_last_four() {
        assert_eq!(obscure_key("sk-abcdef1234"), "sk-...1234");
    }

    #[test]
    fn test_obscure_key_short_input() {
        assert_eq!(obscure_key("ab"), "sk-...ab");
    }
}
