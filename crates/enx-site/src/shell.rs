//! Interactive line-driven shell over the runtime.
//!
//! Reads commands from stdin, feeds them through the model, lets any
//! pending simulated-reply timer land, and reprints the page. This is
//! the terminal stand-in for the browser: `go` is the address bar,
//! `back`/`forward` are the history buttons.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Instant;

use enx_runtime::Runtime;
use enx_view::render_plain;

use crate::app::{AppModel, AppMsg};
use crate::cli::Opts;
use crate::pages::PageEvent;
use enx_router::PageId;

/// One parsed shell command.
#[derive(Debug, PartialEq)]
pub enum Command {
    Msg(AppMsg),
    Help,
    Noop,
    Unknown(String),
}

/// Parse one input line.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Noop;
    }
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "go" if !rest.is_empty() => Command::Msg(AppMsg::Navigate(rest.to_string())),
        "open" => match PageId::from_name(rest) {
            Some(page) => Command::Msg(AppMsg::Open(page)),
            None => Command::Unknown(format!("unknown page: {rest}")),
        },
        "back" => Command::Msg(AppMsg::Back),
        "forward" => Command::Msg(AppMsg::Forward),
        "lang" => Command::Msg(AppMsg::SetLocale(rest.to_string())),
        "tab" => match rest {
            "next" => Command::Msg(AppMsg::Page(PageEvent::NextTab)),
            "prev" => Command::Msg(AppMsg::Page(PageEvent::PrevTab)),
            _ => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Command::Msg(AppMsg::Page(PageEvent::SelectTab(n - 1))),
                _ => Command::Unknown(format!("tab wants a 1-based number, 'next' or 'prev', got {rest:?}")),
            },
        },
        "say" => Command::Msg(AppMsg::Page(PageEvent::ChatSubmit(rest.to_string()))),
        "pick" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Msg(AppMsg::Page(PageEvent::QuizSelect(n - 1))),
            _ => Command::Unknown(format!("pick wants a 1-based number, got {rest:?}")),
        },
        "next" => Command::Msg(AppMsg::Page(PageEvent::QuizAdvance)),
        "prev" => Command::Msg(AppMsg::Page(PageEvent::QuizBack)),
        "retake" => Command::Msg(AppMsg::Page(PageEvent::QuizRetake)),
        "scroll" => match rest.parse::<i32>() {
            Ok(delta) => Command::Msg(AppMsg::Scroll(delta)),
            Err(_) => Command::Unknown(format!("scroll wants a line delta, got {rest:?}")),
        },
        "top" => Command::Msg(AppMsg::Scroll(i32::MIN)),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Msg(AppMsg::Quit),
        other => Command::Unknown(format!("unknown command: {other}")),
    }
}

const SHELL_HELP: &str = "\
commands: go <path> | open <name> | back | forward | lang <code> | tab <n|next|prev>
          say <text> | pick <n> | next | prev | retake | scroll <n> | top | help | quit";

fn print_view<W: Write>(runtime: &Runtime<AppModel>, width: usize, out: &mut W) -> io::Result<()> {
    let rendered = render_plain(&runtime.view(), width);
    let skip = usize::from(runtime.model().scroll);
    for line in rendered.lines().skip(skip) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Block until every pending timer has fired (the chat reply delay is
/// the only timer this application schedules).
fn drain_timers(runtime: &mut Runtime<AppModel>) {
    while let Some(deadline) = runtime.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        runtime.poll(Instant::now());
    }
}

/// Run the interactive loop until `quit` or EOF.
pub fn run(opts: &Opts) -> io::Result<()> {
    let mut runtime = Runtime::new(AppModel::new());
    let now = Instant::now();

    if let Some(code) = &opts.locale {
        runtime.dispatch(AppMsg::SetLocale(code.clone()), now);
    }
    if let Some(page) = &opts.page {
        runtime.dispatch(AppMsg::Navigate(start_path(page)), now);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_view(&runtime, opts.width, &mut stdout)?;
    loop {
        write!(stdout, "enx> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_command(&line) {
            Command::Noop => continue,
            Command::Help => {
                writeln!(stdout, "{SHELL_HELP}")?;
                continue;
            }
            Command::Unknown(msg) => {
                writeln!(stdout, "{msg} (try 'help')")?;
                continue;
            }
            Command::Msg(msg) => runtime.dispatch(msg, Instant::now()),
        }

        if !runtime.is_running() {
            break;
        }
        drain_timers(&mut runtime);
        print_view(&runtime, opts.width, &mut stdout)?;
    }
    Ok(())
}

/// Accept either a path or a bare page name as the start page.
#[must_use]
pub fn start_path(page: &str) -> String {
    if page.starts_with('/') {
        page.to_string()
    } else {
        match PageId::from_name(page) {
            Some(page) => enx_router::RouteTable::new().href(page),
            None => format!("/{page}"),
        }
    }
}
