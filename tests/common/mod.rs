//! Helpers shared by integration tests

/// Remove ANSI CSI sequences (`ESC [ ... final-byte`).
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
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
pub fn assert_width(output: &str, width: usize) {
    for line in strip_ansi(output).lines() {
        assert_eq!(line.chars().count(), width, "line {line:?} is not {width} wide");
    }
}
