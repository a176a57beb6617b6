//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::article::{Article, Source};

/// Create an `Article` for testing with sensible defaults.
///
/// Uses source "Test Source", a one-line description and a fixed URL.
#[must_use]
pub fn make_test_article(title: &str, published_at: &str) -> Article {
    Article {
        source: Source {
            id: None,
            name: "Test Source".to_string(),
        },
        title: title.to_string(),
        description: Some("A test description.".to_string()),
        url: "https://example.com/article".to_string(),
        published_at: published_at.to_string(),
    }
}

/// Remove ANSI CSI sequences (`ESC [ ... final-byte`).
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip the '[' and parameters up to the final byte
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

/// Assert that every line of a rendered table is exactly `width` columns.
pub fn assert_table_width(output: &str, width: usize) {
    for line in strip_ansi(output).lines() {
        assert_eq!(line.chars().count(), width, "line {line:?} is not {width} wide");
    }
}
