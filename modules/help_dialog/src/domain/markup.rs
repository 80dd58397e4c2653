//! Markup filtering for text and rich text fields

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

#[allow(clippy::expect_used)]
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<!--.*?-->|</?\s*([a-zA-Z][a-zA-Z0-9]*)\b[^>]*>").expect("valid tag pattern")
});

/// Remove every markup tag, keeping the text between them
pub fn strip_all_tags(input: &str) -> String {
    until_stable(input, |current| TAG.replace_all(current, "").into_owned())
}

/// Remove tags whose name is not in `allowed` (case-insensitive)
pub fn strip_disallowed_tags(input: &str, allowed: &[&str]) -> String {
    until_stable(input, |current| {
        TAG.replace_all(current, |caps: &Captures<'_>| {
            let keep = caps
                .get(1)
                .map(|name| allowed.iter().any(|tag| tag.eq_ignore_ascii_case(name.as_str())))
                .unwrap_or(false);
            if keep {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
    })
}

/// Repeat `pass` until it stops changing the text
///
/// Removing an inner tag can join its neighbours into a new one
/// (`<<b>script>`), so a single pass is not enough. Every pass that changes
/// the text makes it shorter, which bounds the loop.
fn until_stable(input: &str, pass: impl Fn(&str) -> String) -> String {
    let mut current = input.to_string();
    loop {
        let next = pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}
