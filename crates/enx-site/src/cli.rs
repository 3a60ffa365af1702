//! Command-line argument parsing for the demo site shell.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via the `ENX_SITE_*`
//! prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
EduAI Nexus Demo Site: routing, locales, and mock pages in a terminal shell

USAGE:
    enx-site [OPTIONS]

OPTIONS:
    --page=PATH       Start at a route path ('/teaching') or page name ('teaching')
    --locale=CODE     Start locale: 'en', 'ar', or 'de' (default: en)
    --width=N         Render width in columns (default: 80)
    --dump            Render the selected page once and exit
    --format=FMT      Dump format: 'text' or 'json' (default: text)
    --coverage        Print the locale coverage report and exit
    --list-routes     Print the route table and exit
    --help, -h        Show this help message
    --version, -V     Show version

SHELL COMMANDS:
    go <path>         Navigate to a path (unknown paths show the 404 page)
    open <name>       Navigate to a page by name
    back / forward    Walk the navigation history
    lang <code>       Switch locale ('en', 'ar', 'de')
    tab <n|next|prev> Switch the current page's tab
    say <text>        Send a chat message (administration page)
    pick <n>          Select a quiz answer (teaching page)
    next / prev       Advance / go back in the quiz
    retake            Reset the quiz
    scroll <n> / top  Move the viewport
    help              Show this list
    quit              Exit

ENVIRONMENT VARIABLES:
    ENX_SITE_PAGE     Override --page
    ENX_SITE_LOCALE   Override --locale
    ENX_SITE_WIDTH    Override --width
    ENX_SITE_FORMAT   Override --format
    RUST_LOG          Log filter (e.g. 'enx_i18n=warn,enx_router=debug')";

/// What the process should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Interactive shell loop.
    Interactive,
    /// Render once and exit.
    Dump,
    /// Print the locale coverage report.
    Coverage,
    /// Print the route table.
    Routes,
}

/// Dump output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DumpFormat {
    Text,
    Json,
}

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    pub mode: Mode,
    pub format: DumpFormat,
    /// Start page: a path or a page name.
    pub page: Option<String>,
    /// Start locale code.
    pub locale: Option<String>,
    /// Render width in columns.
    pub width: usize,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            mode: Mode::Interactive,
            format: DumpFormat::Text,
            page: None,
            locale: None,
            width: 80,
        }
    }
}

/// Parse process args and environment, exiting on help/version/errors.
#[must_use]
pub fn parse() -> Opts {
    let args: Vec<String> = env::args().skip(1).collect();
    match parse_from(&args) {
        Ok(ParseOutcome::Opts(opts)) => opts,
        Ok(ParseOutcome::Help) => {
            println!("{HELP_TEXT}");
            process::exit(0);
        }
        Ok(ParseOutcome::Version) => {
            println!("enx-site {VERSION}");
            process::exit(0);
        }
        Err(msg) => {
            eprintln!("error: {msg}\n\n{HELP_TEXT}");
            process::exit(2);
        }
    }
}

/// Parse result before the exit-side-effects are applied.
#[derive(Debug)]
pub enum ParseOutcome {
    Opts(Opts),
    Help,
    Version,
}

/// Pure parsing, testable without touching the process.
pub fn parse_from(args: &[String]) -> Result<ParseOutcome, String> {
    let mut opts = Opts::default();

    // Environment first; flags override.
    if let Ok(page) = env::var("ENX_SITE_PAGE") {
        opts.page = Some(page);
    }
    if let Ok(locale) = env::var("ENX_SITE_LOCALE") {
        opts.locale = Some(locale);
    }
    if let Ok(width) = env::var("ENX_SITE_WIDTH")
        && let Ok(width) = width.parse::<usize>()
    {
        opts.width = width;
    }
    if let Ok(format) = env::var("ENX_SITE_FORMAT") {
        opts.format = parse_format(&format)?;
    }

    for arg in args {
        if let Some(value) = arg.strip_prefix("--page=") {
            opts.page = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--locale=") {
            opts.locale = Some(value.to_string());
        } else if let Some(value) = arg.strip_prefix("--width=") {
            opts.width = value
                .parse()
                .map_err(|_| format!("invalid --width value: {value}"))?;
        } else if let Some(value) = arg.strip_prefix("--format=") {
            opts.format = parse_format(value)?;
        } else {
            match arg.as_str() {
                "--dump" => opts.mode = Mode::Dump,
                "--coverage" => opts.mode = Mode::Coverage,
                "--list-routes" => opts.mode = Mode::Routes,
                "--help" | "-h" => return Ok(ParseOutcome::Help),
                "--version" | "-V" => return Ok(ParseOutcome::Version),
                other => return Err(format!("unknown option: {other}")),
            }
        }
    }

    Ok(ParseOutcome::Opts(opts))
}

fn parse_format(value: &str) -> Result<DumpFormat, String> {
    match value {
        "text" => Ok(DumpFormat::Text),
        "json" => Ok(DumpFormat::Json),
        other => Err(format!("unknown format: {other} (expected text|json)")),
    }
}
