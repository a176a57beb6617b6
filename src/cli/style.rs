//! Styling context for rendered output
//!
//! A [`Palette`] is passed into every renderer instead of flipping a
//! process-wide color switch, so renders with and without color can run
//! side by side.

use colored::{ColoredString, Colorize};

/// Whether and how rendered text is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

impl Palette {
    /// Palette that emits terminal styling
    ///
    /// Escape sequences still follow `colored`'s own detection, so callers
    /// writing to a non-terminal force them with
    /// `colored::control::set_override(true)`.
    #[must_use]
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    /// Palette that returns text untouched
    #[must_use]
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Palette enabled or disabled by a flag
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Returns true if styling is applied
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Table headings and section titles
    #[must_use]
    pub fn heading(self, text: &str) -> String {
        self.apply(text, |line| line.bold())
    }

    /// Article titles
    #[must_use]
    pub fn title(self, text: &str) -> String {
        self.apply(text, |line| line.bold().cyan())
    }

    /// Secondary highlight (publication dates, examples)
    #[must_use]
    pub fn highlight(self, text: &str) -> String {
        self.apply(text, |line| line.green())
    }

    /// Links
    #[must_use]
    pub fn link(self, text: &str) -> String {
        self.apply(text, |line| line.underline())
    }

    /// Error messages
    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.apply(text, |line| line.red().bold())
    }

    /// Footer accents
    #[must_use]
    pub fn accent(self, text: &str) -> String {
        self.apply(text, |line| line.yellow())
    }

    /// Style each line separately so escape sequences never span a border
    fn apply(self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    style(line).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
