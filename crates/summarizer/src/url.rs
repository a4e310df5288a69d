//! Reddit URL validation and post-id extraction

use once_cell::sync::Lazy;
use regex::Regex;

static REDDIT_POST_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?reddit\.com/r/[\w\d_]+/comments/[\w\d]+")
        .expect("reddit url pattern is valid")
});

static POST_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/comments/([a-zA-Z0-9]+)").expect("post id pattern is valid"));

/// Check whether a URL points at a Reddit post
pub fn is_valid_reddit_url(url: &str) -> bool {
    REDDIT_POST_URL.is_match(url)
}

/// Extract the post id from a Reddit URL, falling back to "default" when
/// the URL carries none.
pub fn extract_post_id(url: &str) -> &str {
    POST_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or("default")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(is_valid_reddit_url(
            "https://www.reddit.com/r/rust/comments/abc123/borrow_checker"
        ));
        assert!(is_valid_reddit_url(
            "http://reddit.com/r/programming/comments/xyz9"
        ));
    }

    #[test]
    fn test_invalid_urls() {
        assert!(!is_valid_reddit_url("https://reddit.com/r/rust"));
        assert!(!is_valid_reddit_url("https://example.com/r/rust/comments/abc"));
        assert!(!is_valid_reddit_url("not a url"));
    }

    #[test]
    fn test_post_id_extraction() {
        assert_eq!(
            extract_post_id("https://www.reddit.com/r/rust/comments/abc123/title"),
            "abc123"
        );
        assert_eq!(extract_post_id("https://example.com/nothing"), "default");
    }
}
