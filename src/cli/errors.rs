//! Error table rendering

use tracing::debug;

use crate::error::ErrorPresentation;
use crate::text::wrap;

use super::style::Palette;
use super::table::TableRenderer;

/// Shown for errors whose details must not reach the user
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occurred on our end. Please try again later.";

/// Appended under every error message
pub const HELP_HINT: &str = "Run curl getnews.tech/:help for usage information.";

/// Render `error` as a centered message with a help hint.
///
/// Only errors classified as recoverable or external show their own text.
#[must_use]
pub fn format_error(renderer: &TableRenderer, error: &anyhow::Error) -> String {
    let presentation = ErrorPresentation::classify(error);
    if presentation == ErrorPresentation::InternalError {
        debug!("Hiding internal error from output: {error:#}");
    }
    format_presentation(renderer, &presentation)
}

/// Render an already classified error.
#[must_use]
pub fn format_presentation(renderer: &TableRenderer, presentation: &ErrorPresentation) -> String {
    let message = match presentation {
        ErrorPresentation::RecoverableMessage(message) => message.clone(),
        ErrorPresentation::ExternalServiceError(message) => {
            wrap(message, renderer.spec().wrap_width())
        }
        ErrorPresentation::InternalError => INTERNAL_ERROR_MESSAGE.to_string(),
    };

    let palette = Palette::colored();
    let body = format!("{}\n{}", palette.error(&message), palette.highlight(HELP_HINT));
    renderer.render(None, palette, |rows| rows.push_centered(body))
}
