use crate::shared::error::CompareError;
use crate::shared::Result;
use std::time::Duration;

/// Longest response excerpt quoted in an error message
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Joins a service base URL and an endpoint path.
///
/// Only absolute `http`/`https` URLs are accepted.
pub(crate) fn join_endpoint(base_url: &str, path: &str) -> Result<String> {
    let base = base_url.trim();
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(CompareError::validation(format!(
            "Service URL must start with http:// or https://, got '{}'",
            base_url
        ))
        .into());
    }

    Ok(format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

/// Builds the shared HTTP client with the tool's user agent
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let user_agent = format!("sbom-compare/{}", env!("CARGO_PKG_VERSION"));
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Shortens a response body for inclusion in an error message
pub(crate) fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_endpoint() {
        assert_eq!(
            join_endpoint("http://localhost:8080/svip", "sboms/compare").unwrap(),
            "http://localhost:8080/svip/sboms/compare"
        );
        assert_eq!(
            join_endpoint("https://svip.example.com/", "/sboms/qa").unwrap(),
            "https://svip.example.com/sboms/qa"
        );
    }

    #[test]
    fn test_join_endpoint_rejects_non_http() {
        let err = join_endpoint("ftp://example.com", "sboms/compare").unwrap_err();
        assert!(err.to_string().contains("must start with http:// or https://"));
        assert!(join_endpoint("localhost:8080", "x").is_err());
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS + 10);
        let short = excerpt(&body);
        assert!(short.ends_with("..."));
        assert_eq!(short.len(), MAX_ERROR_BODY_CHARS + 3);
        assert_eq!(excerpt("  ok \n"), "ok");
    }
}
