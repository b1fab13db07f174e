//! Simple interactive CLI mode
//!
//! Line-based conversation without TUI: every line goes through the same
//! session store the other front-ends use.

use crate::logging::ActionLog;
use crate::output::formatters::format_reply;
use crate::session::{Input, SessionId, SessionStore};
use std::io::{self, BufRead, Write};

/// Session id used for the REPL user
pub const REPL_SESSION: &str = "local";

/// Commands that leave the REPL
const QUIT_COMMANDS: [&str; 3] = ["/quit", "/exit", "/q"];

/// What happened during a REPL run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplSummary {
    pub lines: usize,
    pub searches: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<L: ActionLog>(store: &mut SessionStore<'_, L>) -> io::Result<ReplSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(store, stdin.lock(), stdout.lock())
}

/// Drive a conversation from any line source
///
/// A search is started right away; end of input or `/quit` stops.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_repl<L: ActionLog, R: BufRead, W: Write>(
    store: &mut SessionStore<'_, L>,
    mut input: R,
    mut output: W,
) -> io::Result<ReplSummary> {
    let id = SessionId::from(REPL_SESSION);
    let mut summary = ReplSummary::default();

    writeln!(output, "\n╔══════════════════════════════════════════════════╗")?;
    writeln!(output, "║           Пять букв - текстовый режим            ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Словарь: {} слов. Команды: /start, /cancel, /help, /quit\n",
        store.dictionary().len()
    )?;

    let reply = store.start(&id);
    writeln!(output, "{}\n", format_reply(&reply))?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&text.to_lowercase().as_str()) {
            break;
        }

        summary.lines += 1;
        let reply = store.dispatch(&id, Input::parse(text));
        if reply.outcome.is_some() {
            summary.searches += 1;
        }
        writeln!(output, "{}\n", format_reply(&reply))?;
    }

    writeln!(output, "\n👋 До встречи!\n")?;
    Ok(summary)
}
