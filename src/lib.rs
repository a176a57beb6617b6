//! getnews - news articles as fixed-width terminal tables
//!
//! Formats article lists, help text and error messages into bordered
//! tables of a fixed total width, safe to send to any terminal.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod article;
pub mod cli;
pub mod config;
pub mod error;
pub mod text;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use article::{parse_articles, sort_articles, Article, Source};
pub use cli::{
    format_articles, format_error, format_help, ArticleOptions, Attribution, HelpRegistry,
    Palette, TableRenderer, TableSpec,
};
pub use config::NewsConfig;
pub use error::{ErrorPresentation, NewsError};
pub use text::{format_date, wrap};
