//! Analysis service client (native builds).
//!
//! The only I/O in the system: one blocking POST per analyze request to the
//! external analysis service, which scrapes the article and returns
//! `{"words": [{"word": ..., "weight": ...}, ...]}`. Invalid URLs, network
//! failures, non-2xx statuses, malformed bodies, and the service's own
//! `{"error": ...}` bodies all map to [`AnalyzeError`].

use log::warn;
use serde::Deserialize;
use url::Url;

use crate::session::{AnalysisSession, Event};
use crate::words::WordWeight;

/// Default endpoint of the local analysis service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";

/// Error during an analyze round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeError {
    pub message: String,
}

impl std::fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl AnalyzeError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What the analysis service may hand back: a word list, or its own error
/// report (it reports scrape failures as HTTP 200 with an `error` body).
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    words: Option<Vec<WordWeight>>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the analysis service.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    pub endpoint: String,
}

impl Default for AnalyzeClient {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AnalyzeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Analyze one article URL (blocking).
    pub fn analyze(&self, article_url: &str) -> Result<Vec<WordWeight>, AnalyzeError> {
        let article = normalize_url(article_url)?;

        let client = reqwest::blocking::Client::builder()
            .user_agent("cirrus-core/0.1")
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| AnalyzeError::new(format!("Client error: {}", e)))?;

        let response = client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "url": article.as_str() }))
            .send()
            .map_err(|e| AnalyzeError::new(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| AnalyzeError::new(format!("Failed to read body: {}", e)))?;

        parse_response(status, &body)
    }
}

/// Accept bare domains the way the frontend's input box does.
fn normalize_url(raw: &str) -> Result<Url, AnalyzeError> {
    let with_scheme = if !raw.starts_with("http://") && !raw.starts_with("https://") {
        format!("https://{}", raw)
    } else {
        raw.to_string()
    };
    Url::parse(&with_scheme).map_err(|e| AnalyzeError::new(format!("Invalid URL: {}", e)))
}

/// Map an HTTP status plus body to a word list. Factored out of the request
/// so the whole error taxonomy is testable without a network.
fn parse_response(status: u16, body: &str) -> Result<Vec<WordWeight>, AnalyzeError> {
    if !(200..300).contains(&status) {
        return Err(AnalyzeError::new(format!(
            "Analysis service returned HTTP {}",
            status
        )));
    }

    let parsed: AnalyzeResponse = serde_json::from_str(body)
        .map_err(|e| AnalyzeError::new(format!("Malformed response: {}", e)))?;

    if let Some(message) = parsed.error {
        return Err(AnalyzeError::new(message));
    }

    parsed
        .words
        .ok_or_else(|| AnalyzeError::new("Response missing word list"))
}

/// Drive one full analyze round trip through the session reducer.
///
/// Returns whether a request was actually issued (a blank URL is a no-op).
pub fn run_analysis(session: &mut AnalysisSession, client: &AnalyzeClient, url: &str) -> bool {
    let Some(seq) = session.begin_analyze(url) else {
        return false;
    };

    let outcome = client.analyze(url).map_err(|e| {
        warn!("analyze failed: {}", e);
        e.message
    });
    session.apply(Event::Response { seq, outcome });
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_ok() {
        let body = r#"{"words": [{"word": "climate", "weight": 0.8}, {"word": "policy", "weight": 0.5}]}"#;
        let words = parse_response(200, body).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].word, "climate");
        assert_eq!(words[0].weight, 0.8);
    }

    #[test]
    fn test_parse_response_non_2xx() {
        let err = parse_response(500, "").unwrap_err();
        assert!(err.message.contains("500"));
    }

    #[test]
    fn test_parse_response_malformed_json() {
        let err = parse_response(200, "<html>not json</html>").unwrap_err();
        assert!(err.message.starts_with("Malformed response"));
    }

    #[test]
    fn test_parse_response_service_error_body() {
        // The service reports scrape failures as 200 + error body.
        let err = parse_response(200, r#"{"error": "could not fetch article"}"#).unwrap_err();
        assert_eq!(err.message, "could not fetch article");
    }

    #[test]
    fn test_parse_response_missing_words() {
        let err = parse_response(200, "{}").unwrap_err();
        assert!(err.message.contains("missing word list"));
    }

    #[test]
    fn test_normalize_url_adds_scheme() {
        let url = normalize_url("example.com/article").unwrap();
        assert_eq!(url.scheme(), "https");

        let url = normalize_url("http://example.com").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_normalize_url_rejects_garbage() {
        assert!(normalize_url("http://").is_err());
    }

    #[test]
    fn test_run_analysis_blank_url_no_request() {
        // A blank URL never reaches the network: no client call, no
        // transition.
        let mut session = AnalysisSession::default();
        let client = AnalyzeClient::new("http://127.0.0.1:1/analyze");

        assert!(!run_analysis(&mut session, &client, "  "));
        assert_eq!(session.status, crate::session::Status::Idle);
    }

    #[test]
    fn test_run_analysis_unreachable_service_is_error_state() {
        // Port 1 refuses connections; the failure must surface as the Error
        // state, not a panic.
        let mut session = AnalysisSession::default();
        let client = AnalyzeClient::new("http://127.0.0.1:1/analyze");

        assert!(run_analysis(&mut session, &client, "https://example.com"));
        assert_eq!(session.status, crate::session::Status::Error);
        assert!(session.words.is_empty());
        assert!(!session.error.as_deref().unwrap().is_empty());
    }
}
