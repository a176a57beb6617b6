//! Formatter configuration
//!
//! Parses `getnews.toml` into table geometry, footer text, the help registry
//! and the public base URL. Every field has a default, so an empty file or no
//! file at all is valid.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::cli::help::HelpRegistry;
use crate::cli::table::{Attribution, TableRenderer, TableSpec, DEFAULT_TOTAL_WIDTH};

/// Environment variable that overrides `base_url`
pub const BASE_URL_ENV: &str = "GETNEWS_BASE_URL";

/// Top-level configuration parsed from getnews.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewsConfig {
    /// Total table width in display columns (default: 80)
    pub width: usize,
    /// Host the help text tells users to curl
    pub base_url: String,
    /// Default IANA timezone for publication dates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Footer block
    pub footer: Attribution,
    /// Arguments, countries and categories listed by the help table
    pub help: HelpRegistry,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_TOTAL_WIDTH,
            base_url: "getnews.tech".to_string(),
            timezone: None,
            footer: Attribution::default(),
            help: HelpRegistry::default(),
        }
    }
}

impl NewsConfig {
    /// Parse a getnews.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse getnews.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse getnews.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise, then apply the
    /// environment override
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        Ok(config.with_base_url_override(std::env::var(BASE_URL_ENV).ok()))
    }

    /// Replace `base_url` with `value` when it is set and non-empty
    #[must_use]
    pub fn with_base_url_override(mut self, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.base_url = value.trim().to_string();
        }
        self
    }

    /// Table geometry for the configured width
    pub fn table_spec(&self) -> Result<TableSpec> {
        TableSpec::new(self.width)
    }

    /// Table renderer for the configured width and footer
    pub fn renderer(&self) -> Result<TableRenderer> {
        Ok(TableRenderer::new(self.table_spec()?, self.footer.clone()))
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.table_spec().context("Invalid 'width'")?;

        if self.base_url.trim().is_empty() {
            bail!("'base_url' cannot be empty");
        }

        if let Some(tz) = &self.timezone {
            if tz.parse::<Tz>().is_err() {
                bail!("Unknown timezone '{tz}'");
            }
        }

        // Argument names must be non-empty and unique
        let mut seen = HashSet::new();
        for arg in &self.help.arguments {
            if arg.name.trim().is_empty() {
                bail!("Help argument name cannot be empty");
            }
            if !seen.insert(arg.name.as_str()) {
                bail!("Duplicate help argument: '{}'", arg.name);
            }
        }

        Ok(())
    }
}
