//! Help table rendering
//!
//! The argument registry, country list and category list are supplied by the
//! caller; [`HelpRegistry::default`] describes the public service.

use serde::{Deserialize, Serialize};

use crate::text::wrap;

use super::style::Palette;
use super::table::TableRenderer;

/// Heading of the help table
pub const HELP_HEADER: &str = "Help";

/// One query argument and what it does
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentHelp {
    /// Argument name as typed in the query
    pub name: String,
    /// What the argument does
    pub description: String,
}

impl ArgumentHelp {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Arguments, countries and categories listed in the help text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HelpRegistry {
    /// Query arguments, listed in this order
    pub arguments: Vec<ArgumentHelp>,
    /// Valid country codes
    pub countries: Vec<String>,
    /// Valid article categories
    pub categories: Vec<String>,
}

const DEFAULT_COUNTRIES: &[&str] = &[
    "ae", "ar", "at", "au", "be", "bg", "br", "ca", "ch", "cn", "co", "cu", "cz", "de", "eg", "fr",
    "gb", "gr", "hk", "hu", "id", "ie", "il", "in", "it", "jp", "kr", "lt", "lv", "ma", "mx", "my",
    "ng", "nl", "no", "nz", "ph", "pl", "pt", "ro", "rs", "ru", "sa", "se", "sg", "si", "sk", "th",
    "tr", "tw", "ua", "us", "ve", "za",
];

const DEFAULT_CATEGORIES: &[&str] = &[
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

impl Default for HelpRegistry {
    fn default() -> Self {
        Self {
            arguments: vec![
                ArgumentHelp::new("n", "The number of articles to show (default 10, max 100)"),
                ArgumentHelp::new("page", "Which page of results to show"),
                ArgumentHelp::new("category", "Only show articles from this category"),
                ArgumentHelp::new("country", "Only show articles from this country"),
                ArgumentHelp::new("reverse", "Show the newest articles first"),
                ArgumentHelp::new("nocolor", "Disable colored output"),
                ArgumentHelp::new("timezone", "Show publication times in this IANA timezone"),
            ],
            countries: DEFAULT_COUNTRIES.iter().map(ToString::to_string).collect(),
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Render the usage table for a service reachable at `base_url`.
///
/// Help output is always styled.
#[must_use]
pub fn format_help(renderer: &TableRenderer, registry: &HelpRegistry, base_url: &str) -> String {
    let width = renderer.spec().wrap_width();
    let palette = Palette::colored();
    let body = help_body(registry, base_url, width, palette);
    renderer.render(Some(HELP_HEADER), palette, |rows| rows.push(body))
}

fn help_body(registry: &HelpRegistry, base_url: &str, width: usize, palette: Palette) -> String {
    let mut lines = vec![
        palette.heading("Usage:"),
        wrap(&format!("curl {base_url}/[query],[arguments]"), width),
        String::new(),
        palette.heading("Valid countries:"),
        wrap(&registry.countries.join(", "), width),
        String::new(),
        palette.heading("Valid arguments:"),
    ];
    lines.extend(
        registry
            .arguments
            .iter()
            .map(|arg| wrap(&format!("{}: {}", arg.name, arg.description), width)),
    );
    lines.extend([
        String::new(),
        palette.heading("Valid categories:"),
        wrap(&registry.categories.join(", "), width),
        String::new(),
        palette.heading("Examples:"),
        palette.highlight(&format!("curl {base_url}/bitcoin")),
        palette.highlight(&format!("curl {base_url}/category=technology,n=5")),
        palette.highlight(&format!("curl {base_url}/country=us,category=sports,reverse")),
        palette.highlight(&format!("curl {base_url}/:help")),
    ]);
    lines.join("\n")
}
