//! URL normalization and validation for tube-dl
//!
//! Rewrites bare YouTube domains to https:// and rejects anything that is
//! not recognizably a YouTube link before it reaches the extractor.

use crate::core::error::{Error, Result};

/// Normalizes a raw user-supplied string into an accepted YouTube URL.
///
/// Bare `youtube.com` / `www.youtube.com` prefixes get an `https://` scheme
/// prepended. Anything else must already start with `http`. After scheme
/// normalization the string must contain `youtube.com` or `youtu.be`.
pub fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();

    let url = if trimmed.starts_with("youtube.com") || trimmed.starts_with("www.youtube.com") {
        format!("https://{trimmed}")
    } else if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        return Err(Error::InvalidUrl(trimmed.to_string()));
    };

    if url.contains("youtube.com") || url.contains("youtu.be") {
        Ok(url)
    } else {
        Err(Error::InvalidUrl(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_scheme() {
        assert_eq!(
            normalize_url("youtube.com/watch?v=abc").unwrap(),
            "https://youtube.com/watch?v=abc"
        );
        assert_eq!(
            normalize_url("www.youtube.com/watch?v=abc").unwrap(),
            "https://www.youtube.com/watch?v=abc"
        );
    }

    #[test]
    fn test_full_urls_accepted_unchanged() {
        assert_eq!(
            normalize_url("https://www.youtube.com/watch?v=abc").unwrap(),
            "https://www.youtube.com/watch?v=abc"
        );
        assert_eq!(
            normalize_url("https://youtu.be/abc").unwrap(),
            "https://youtu.be/abc"
        );
        // Plain http is an accepted scheme indicator
        assert_eq!(
            normalize_url("http://youtube.com/watch?v=abc").unwrap(),
            "http://youtube.com/watch?v=abc"
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            normalize_url("  youtube.com/watch?v=abc\n").unwrap(),
            "https://youtube.com/watch?v=abc"
        );
    }

    #[test]
    fn test_missing_scheme_rejected() {
        // Bare youtu.be has no recognized bare-domain rewrite rule
        assert!(normalize_url("youtu.be/abc").is_err());
        assert!(normalize_url("example.com/watch").is_err());
        assert!(normalize_url("ftp://youtube.com/watch").is_err());
        assert!(normalize_url("").is_err());
    }

    #[test]
    fn test_non_youtube_hosts_rejected() {
        assert!(normalize_url("https://vimeo.com/12345").is_err());
        assert!(normalize_url("https://example.com/youtube").is_err());
    }

    #[test]
    fn test_rejection_reports_offending_url() {
        let err = normalize_url("https://vimeo.com/12345").unwrap_err();
        assert!(err.to_string().contains("vimeo.com"));
    }
}
