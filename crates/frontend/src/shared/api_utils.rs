//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and the error type
//! shared by all request helpers.

use thiserror::Error;

/// Port the RAG backend listens on when no override is compiled in.
pub const DEFAULT_API_PORT: u16 = 8000;

/// Ошибка запроса к бэкенду
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Failed to send request: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// If the crate was built with `AFP_API_BASE` set, that value wins.
/// Otherwise the URL is derived from the current window location,
/// using port 8000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - "http://localhost:8000" if window is not available
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/afp-query", api_base());
/// ```
pub fn api_base() -> String {
    if let Some(base) = option_env!("AFP_API_BASE").and_then(normalize_base) {
        return base;
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return format!("http://localhost:{}", DEFAULT_API_PORT),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/health");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base("http://rag.local:9000/"),
            Some("http://rag.local:9000".to_string())
        );
        assert_eq!(
            normalize_base("  https://example.com  "),
            Some("https://example.com".to_string())
        );
        assert_eq!(normalize_base(""), None);
        assert_eq!(normalize_base("   "), None);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/afp-query"),
            "http://localhost:8000/afp-query"
        );
        assert_eq!(
            join_url("http://localhost:8000", "health"),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Failed to send request: connection refused"
        );
    }
}
