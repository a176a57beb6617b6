//! Terminal output formatting
//!
//! Renders article lists, help text and error messages as fixed-width
//! bordered tables, optionally styled with terminal colors.

pub mod articles;
pub mod errors;
pub mod help;
pub mod style;
pub mod table;

pub use articles::{format_articles, ArticleOptions};
pub use errors::{format_error, format_presentation};
pub use help::{format_help, ArgumentHelp, HelpRegistry};
pub use style::Palette;
pub use table::{Attribution, Rows, TableRenderer, TableSpec};
