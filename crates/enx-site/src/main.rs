#![forbid(unsafe_code)]

//! EduAI Nexus demo site binary entry point.

use enx_i18n::{Locale, ui_strings};
use enx_router::{BASE_PATH, PageId, RouteTable};
use enx_runtime::Model;
use enx_site::app::{AppModel, AppMsg};
use enx_site::cli::{self, DumpFormat, Mode};
use enx_site::shell;
use enx_view::render_plain;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = cli::parse();
    match opts.mode {
        Mode::Routes => print_routes(),
        Mode::Coverage => print_coverage(),
        Mode::Dump => dump(&opts),
        Mode::Interactive => {
            if let Err(e) = shell::run(&opts) {
                eprintln!("shell error: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn print_routes() {
    let table = RouteTable::new();
    if BASE_PATH.is_empty() {
        println!("base path: (none)");
    } else {
        println!("base path: {BASE_PATH}");
    }
    for &page in PageId::NAV {
        println!("{:<16} {}", format!("{page:?}"), table.href(page));
    }
    println!("{:<16} *", "NotFound");
}

fn print_coverage() {
    let report = ui_strings().coverage_report();
    println!("total keys: {}", report.total_keys);
    for lc in &report.locales {
        println!(
            "{:<4} {:>5.1}% ({}/{})",
            lc.locale.code(),
            lc.coverage_percent,
            lc.present,
            report.total_keys
        );
        for key in &lc.missing {
            println!("     missing: {key}");
        }
    }
}

fn dump(opts: &cli::Opts) {
    let mut app = AppModel::new();
    if let Some(code) = &opts.locale {
        app.update(AppMsg::SetLocale(code.clone()));
    }
    if let Some(page) = &opts.page {
        app.update(AppMsg::Navigate(shell::start_path(page)));
    }
    // Dump mode renders the resolved state once; locale and route
    // semantics are identical to the interactive shell.
    if app.locale == Locale::DEFAULT && opts.locale.as_deref().is_some_and(|c| c != "en") {
        eprintln!("note: unsupported locale {:?} ignored", opts.locale);
    }

    let doc = app.view();
    match opts.format {
        DumpFormat::Text => print!("{}", render_plain(&doc, opts.width)),
        DumpFormat::Json => match serde_json::to_string_pretty(&doc) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("serialization error: {e}");
                std::process::exit(1);
            }
        },
    }
}
