//! Article table rendering

use crate::article::{sort_articles, Article};
use crate::text::{format_date, wrap};

use super::style::Palette;
use super::table::TableRenderer;

/// Heading of the article table
pub const ARTICLES_HEADER: &str = "Articles";

/// Row shown when there is nothing to list
pub const NO_ARTICLES: &str = "No articles found on this topic.";

/// Shown in place of a missing description
pub const NO_DESCRIPTION: &str = "No description available.";

/// How an article list is rendered
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleOptions<'a> {
    /// IANA timezone for publication dates; UTC when `None`
    pub timezone: Option<&'a str>,
    /// Styling context
    pub palette: Palette,
    /// Newest first instead of oldest first
    pub reverse: bool,
}

/// Render `articles` as a table with one row per article.
///
/// The input slice is not reordered; sorting happens on a copy.
#[must_use]
pub fn format_articles(
    renderer: &TableRenderer,
    articles: &[Article],
    options: &ArticleOptions<'_>,
) -> String {
    let width = renderer.spec().wrap_width();
    let sorted = sort_articles(articles, options.reverse);

    renderer.render(Some(ARTICLES_HEADER), options.palette, |rows| {
        if sorted.is_empty() {
            rows.push(NO_ARTICLES);
        }
        for article in sorted {
            rows.push(compose_article(article, width, options));
        }
    })
}

/// Build the four-line cell for one article: title, date, description, URL
fn compose_article(article: &Article, width: usize, options: &ArticleOptions<'_>) -> String {
    let palette = options.palette;
    let title = wrap(&format!("{} - {}", article.source.name, article.title), width);
    let published = format_date(&article.published_at, options.timezone);
    let description = article
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map_or_else(|| NO_DESCRIPTION.to_string(), |text| wrap(text, width));

    [
        palette.title(&title),
        palette.highlight(&published),
        description,
        palette.link(&article.url),
    ]
    .join("\n")
}
