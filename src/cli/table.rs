//! Fixed-width bordered tables
//!
//! Every table is a single column whose borders span exactly
//! [`TableSpec::total_width`] display columns. Callers push rows through a
//! closure and the attribution footer is always appended last.

use anyhow::{bail, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ColumnConstraint, ContentArrangement, Table, Width};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::style::Palette;

/// Default total table width in display columns
pub const DEFAULT_TOTAL_WIDTH: usize = DEFAULT_TOTAL_WIDTH_U16 as usize;

const DEFAULT_TOTAL_WIDTH_U16: u16 = 80;

/// Narrowest table that still leaves room for borders, padding and text
pub const MIN_TOTAL_WIDTH: usize = 8;

/// Table geometry
///
/// `content_width` excludes the two border characters; `wrap_width` further
/// excludes the cell padding on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    total_width: u16,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            total_width: DEFAULT_TOTAL_WIDTH_U16,
        }
    }
}

impl TableSpec {
    /// Create a table spec `total_width` columns wide
    pub fn new(total_width: usize) -> Result<Self> {
        if total_width < MIN_TOTAL_WIDTH {
            bail!("Table width {total_width} is too narrow (minimum {MIN_TOTAL_WIDTH})");
        }
        let Ok(total_width) = u16::try_from(total_width) else {
            bail!("Table width {total_width} is too wide (maximum {})", u16::MAX);
        };
        Ok(Self { total_width })
    }

    /// Total width including borders
    #[must_use]
    pub fn total_width(self) -> usize {
        usize::from(self.total_width)
    }

    /// Width inside the borders
    #[must_use]
    pub fn content_width(self) -> usize {
        self.total_width() - 2
    }

    /// Maximum text line length inside a padded cell
    #[must_use]
    pub fn wrap_width(self) -> usize {
        self.content_width() - 2
    }
}

/// Footer block appended to every table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Attribution {
    /// Service name shown on the first footer line
    pub service: String,
    /// Project link
    pub link: String,
    /// Contribution invitation
    pub invitation: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            service: "Powered by getnews.tech".to_string(),
            link: "https://github.com/omgimanerd/getnews.tech".to_string(),
            invitation: "Issues and pull requests are welcome!".to_string(),
        }
    }
}

impl Attribution {
    /// Render the footer lines, skipping any that are empty
    #[must_use]
    pub fn render(&self, palette: Palette) -> String {
        [
            palette.accent(&self.service),
            palette.link(&self.link),
            palette.highlight(&self.invitation),
        ]
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Rows collected while populating a table
#[derive(Debug, Default)]
pub struct Rows {
    rows: Vec<(String, CellAlignment)>,
}

impl Rows {
    /// Push a left-aligned row
    pub fn push(&mut self, content: impl Into<String>) {
        self.rows.push((content.into(), CellAlignment::Left));
    }

    /// Push a centered row
    pub fn push_centered(&mut self, content: impl Into<String>) {
        self.rows.push((content.into(), CellAlignment::Center));
    }

    /// Number of rows pushed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows have been pushed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Renders single-column tables with the attribution footer
#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    spec: TableSpec,
    attribution: Attribution,
}

impl TableRenderer {
    /// Create a renderer with the given geometry and footer
    #[must_use]
    pub const fn new(spec: TableSpec, attribution: Attribution) -> Self {
        Self { spec, attribution }
    }

    /// Table geometry used by this renderer
    #[must_use]
    pub const fn spec(&self) -> TableSpec {
        self.spec
    }

    /// Build a table and return it with a trailing newline.
    ///
    /// `header`, when present, becomes a bold heading row. `populate` pushes
    /// the content rows; the footer row follows them.
    pub fn render<F>(&self, header: Option<&str>, palette: Palette, populate: F) -> String
    where
        F: FnOnce(&mut Rows),
    {
        let mut rows = Rows::default();
        populate(&mut rows);
        debug!(
            header = header.unwrap_or(""),
            rows = rows.len(),
            styled = palette.is_enabled(),
            "rendering table"
        );

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::DynamicFullWidth)
            .set_width(self.spec.total_width)
            .set_constraints(vec![ColumnConstraint::Absolute(Width::Fixed(
                self.spec.total_width - 2,
            ))]);

        if let Some(header) = header {
            table.set_header(vec![Cell::new(palette.heading(header))]);
        }

        for (content, alignment) in rows.rows {
            table.add_row(vec![Cell::new(content).set_alignment(alignment)]);
        }

        table.add_row(vec![
            Cell::new(self.attribution.render(palette)).set_alignment(CellAlignment::Center),
        ]);

        format!("{table}\n")
    }
}
