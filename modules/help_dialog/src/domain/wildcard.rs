//! Wildcard URL matching for widget locations
//!
//! A wildcard setting is a `;` separated list of patterns. `/*` matches every
//! URL; any other `*` stands for an arbitrary run of characters and the
//! pattern must cover the whole request path.

use regex::Regex;
use url::Url;

/// Pattern matching every URL
pub const MATCH_ALL: &str = "/*";

/// Whether `current_path` matches any pattern of `wildcard`
///
/// Empty settings and unparseable patterns never match.
pub fn url_matches_wildcard(wildcard: &str, current_path: &str) -> bool {
    let wildcard = wildcard.trim();
    if wildcard.is_empty() {
        return false;
    }
    if wildcard == MATCH_ALL {
        return true;
    }
    let Some(current) = normalize_request_path(current_path) else {
        return false;
    };

    wildcard
        .split(';')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .any(|pattern| pattern_matches(pattern, &current))
}

/// Path of the current request with a leading and a trailing slash
pub fn normalize_request_path(input: &str) -> Option<String> {
    let path = path_of(input.trim())?;
    let mut path = with_leading_slash(&path);
    if !path.ends_with('/') {
        path.push('/');
    }
    Some(path)
}

fn pattern_matches(pattern: &str, current: &str) -> bool {
    if pattern == MATCH_ALL {
        return true;
    }
    let Some(path) = path_of(pattern) else {
        return false;
    };
    let path = with_leading_slash(&path);
    if path == current {
        return true;
    }

    let expression = format!("^{}$", regex::escape(&path).replace(r"\*", ".*"));
    Regex::new(&expression)
        .map(|re| re.is_match(current))
        .unwrap_or(false)
}

/// Path component of a URL, a protocol-relative URL or a bare path
fn path_of(input: &str) -> Option<String> {
    if input.contains("://") {
        return Url::parse(input).ok().map(|url| url.path().to_string());
    }
    if input.starts_with("//") {
        return Url::parse(&format!("http:{}", input))
            .ok()
            .map(|url| url.path().to_string());
    }
    let end = input.find(['?', '#']).unwrap_or(input.len());
    Some(input[..end].to_string())
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_wildcard() {
        assert!(url_matches_wildcard("/support/*", "/support/billing/"));
        assert!(url_matches_wildcard("/support/*", "/support/"));
        assert!(url_matches_wildcard("/support/*", "/support"));
        assert!(!url_matches_wildcard("/support/*", "/other/support/"));
    }

    #[test]
    fn test_match_all_and_empty() {
        assert!(url_matches_wildcard("/*", "/anything/at/all/"));
        assert!(url_matches_wildcard(" /* ", "/"));
        assert!(!url_matches_wildcard("", "/support/"));
        assert!(!url_matches_wildcard("  ", "/"));
        assert!(url_matches_wildcard("/blog/; /*", "/shop/"));
    }

    #[test]
    fn test_exact_path() {
        assert!(url_matches_wildcard("/pricing/", "/pricing"));
        assert!(!url_matches_wildcard("/pricing", "/pricing/"));
        assert!(url_matches_wildcard("pricing/", "/pricing/"));
    }

    #[test]
    fn test_full_urls_are_reduced_to_paths() {
        assert!(url_matches_wildcard(
            "https://example.com/docs/*",
            "https://example.com/docs/setup?ref=nav"
        ));
        assert!(url_matches_wildcard("//cdn.example.com/help/*", "/help/x/"));
        assert!(!url_matches_wildcard("https://exa mple.com/docs/*", "/docs/a/"));
    }

    #[test]
    fn test_multiple_patterns() {
        let wildcard = "/faq/*;/contact/;/store/*/checkout/";
        assert!(url_matches_wildcard(wildcard, "/faq/shipping/"));
        assert!(url_matches_wildcard(wildcard, "/contact/"));
        assert!(url_matches_wildcard(wildcard, "/store/shoes/checkout/"));
        assert!(!url_matches_wildcard(wildcard, "/store/shoes/"));
    }

    #[test]
    fn test_regex_characters_are_literal() {
        assert!(url_matches_wildcard("/c++/*", "/c++/intro/"));
        assert!(!url_matches_wildcard("/a.c/", "/abc/"));
    }

    #[test]
    fn test_normalize_request_path() {
        assert_eq!(normalize_request_path(""), Some("/".to_string()));
        assert_eq!(normalize_request_path("help"), Some("/help/".to_string()));
        assert_eq!(normalize_request_path("/help/?q=1#top"), Some("/help/".to_string()));
    }
}
