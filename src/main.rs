//! getnews - news articles as fixed-width terminal tables
//!
//! CLI entry point: renders an article list or the help text to stdout.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use getnews::{
    format_articles, format_error, format_help, parse_articles, ArticleOptions, NewsConfig,
    NewsError, Palette, TableRenderer,
};

/// Render news articles as fixed-width terminal tables
///
/// Reads NewsAPI article JSON and prints a bordered table of titles,
/// publication dates, descriptions and links.
#[derive(Parser, Debug)]
#[command(name = "getnews", version, about, disable_help_subcommand = true)]
struct Cli {
    /// Path to a getnews.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable terminal colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render articles from a JSON file (or stdin)
    Articles {
        /// Article JSON file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,

        /// IANA timezone for publication dates
        #[arg(long)]
        timezone: Option<String>,

        /// Show the newest articles first
        #[arg(long)]
        reverse: bool,
    },
    /// Render the usage table
    Help,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read article JSON from `input`, or stdin when `None`
fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read articles from {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read articles from stdin")?;
            Ok(buffer)
        }
    }
}

/// Pick the timezone for publication dates: the command line wins over
/// config. An unknown zone is the caller's mistake, so it is recoverable.
fn resolve_timezone<'a>(
    cli: Option<&'a str>,
    config: Option<&'a str>,
) -> Result<Option<&'a str>, NewsError> {
    let timezone = cli.or(config);
    if let Some(tz) = timezone {
        if tz.parse::<Tz>().is_err() {
            return Err(NewsError::InvalidQuery(format!("Unknown timezone '{tz}'")));
        }
    }
    Ok(timezone)
}

/// Renderer for error output, falling back to defaults when the config
/// itself is unusable
fn error_renderer(config: Option<&NewsConfig>) -> TableRenderer {
    config
        .and_then(|config| config.renderer().ok())
        .unwrap_or_default()
}

fn run(cli: &Cli, config: &NewsConfig) -> Result<String> {
    let renderer = config.renderer()?;

    match &cli.command {
        Command::Articles {
            input,
            timezone,
            reverse,
        } => {
            let timezone = resolve_timezone(timezone.as_deref(), config.timezone.as_deref())?;

            let articles = parse_articles(&read_input(input.as_ref())?)?;
            let options = ArticleOptions {
                timezone,
                palette: Palette::new(!cli.no_color),
                reverse: *reverse,
            };
            Ok(format_articles(&renderer, &articles, &options))
        }
        Command::Help => Ok(format_help(&renderer, &config.help, &config.base_url)),
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    // Output is usually piped (e.g. as an HTTP body), so force escapes
    // unless colors were turned off.
    colored::control::set_override(!cli.no_color);

    let config = match NewsConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            print!("{}", format_error(&error_renderer(None), &err));
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            print!("{}", format_error(&error_renderer(Some(&config)), &err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use getnews::ErrorPresentation;

    #[test]
    fn test_resolve_timezone_prefers_cli() {
        let tz = resolve_timezone(Some("Asia/Tokyo"), Some("Europe/Helsinki")).unwrap();
        assert_eq!(tz, Some("Asia/Tokyo"));
    }

    #[test]
    fn test_resolve_timezone_falls_back_to_config() {
        let tz = resolve_timezone(None, Some("Europe/Helsinki")).unwrap();
        assert_eq!(tz, Some("Europe/Helsinki"));
    }

    #[test]
    fn test_resolve_timezone_none() {
        assert_eq!(resolve_timezone(None, None).unwrap(), None);
    }

    #[test]
    fn test_resolve_timezone_unknown_is_recoverable() {
        let err = resolve_timezone(Some("Nowhere/Special"), None).unwrap_err();
        assert_eq!(
            err.presentation(),
            ErrorPresentation::RecoverableMessage("Unknown timezone 'Nowhere/Special'".to_string())
        );
    }

    #[test]
    fn test_unknown_cli_timezone_rendered_verbatim() {
        let err: anyhow::Error = resolve_timezone(Some("Bad/Zone"), None).unwrap_err().into();
        let output = format_error(&error_renderer(None), &err);
        assert!(output.contains("Unknown timezone 'Bad/Zone'"));
    }

    #[test]
    fn test_error_renderer_uses_config_width() {
        let config = NewsConfig::parse("width = 60").unwrap();
        assert_eq!(error_renderer(Some(&config)).spec().total_width(), 60);
    }

    #[test]
    fn test_error_renderer_falls_back_to_default() {
        let config = NewsConfig {
            width: 2,
            ..NewsConfig::default()
        };
        assert_eq!(error_renderer(Some(&config)).spec().total_width(), 80);
        assert_eq!(error_renderer(None).spec().total_width(), 80);
    }

    #[test]
    fn test_cli_parses_articles_flags() {
        let cli = Cli::parse_from([
            "getnews",
            "--no-color",
            "articles",
            "--timezone",
            "UTC",
            "--reverse",
        ]);
        assert!(cli.no_color);
        match cli.command {
            Command::Articles {
                input,
                timezone,
                reverse,
            } => {
                assert_eq!(input, None);
                assert_eq!(timezone.as_deref(), Some("UTC"));
                assert!(reverse);
            }
            Command::Help => panic!("expected articles command"),
        }
    }

    #[test]
    fn test_run_help_uses_config_base_url() {
        let cli = Cli::parse_from(["getnews", "help"]);
        let config = NewsConfig::default().with_base_url_override(Some("news.local".to_string()));
        let output = run(&cli, &config).unwrap();
        assert!(output.contains("news.local/[query],[arguments]"));
    }
}
