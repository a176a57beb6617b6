//! Greedy word wrapping
//!
//! Collapses every whitespace run into a single space and packs words onto
//! lines. Words are never split, so a word longer than the limit sits alone
//! on a line that exceeds it.

/// Wrap `text` so that each line stays under `max_line_length` characters.
///
/// A word starts a new line when `line_length + word_length >= max_line_length`,
/// where `line_length` ignores the pending separator. A word that lands exactly
/// on the limit therefore breaks one slot early.
///
/// Empty or whitespace-only input yields an empty string. Original line breaks
/// are not preserved.
#[must_use]
pub fn wrap(text: &str, max_line_length: usize) -> String {
    let mut wrapped = String::with_capacity(text.len());
    let mut line_length = 0;

    for word in text.split_whitespace() {
        let word_length = word.chars().count();
        if line_length + word_length >= max_line_length {
            if !wrapped.is_empty() {
                wrapped.push('\n');
            }
            wrapped.push_str(word);
            line_length = word_length;
        } else {
            if line_length > 0 {
                wrapped.push(' ');
                line_length += 1;
            }
            wrapped.push_str(word);
            line_length += word_length;
        }
    }

    wrapped
}
