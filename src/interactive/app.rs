//! TUI application state and logic

use crate::core::ConstraintSet;
use crate::logging::ActionLog;
use crate::search::SearchOutcome;
use crate::session::{Input, Reply, Session, SessionId, SessionState, SessionStore, messages};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Session id used for the single local user
pub const LOCAL_SESSION: &str = "tui";

/// Application state
pub struct App<'d, L: ActionLog> {
    pub store: SessionStore<'d, L>,
    pub session_id: SessionId,
    pub input_buffer: String,
    pub prompt: String,
    pub messages: Vec<Message>,
    pub last_search: Option<FinishedSearch>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// The most recent completed search, kept for display after the session ends
#[derive(Debug, Clone)]
pub struct FinishedSearch {
    pub outcome: SearchOutcome,
    pub constraints: ConstraintSet,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub searches: usize,
    pub rejected_inputs: usize,
    pub cancelled: usize,
}

impl<'d, L: ActionLog> App<'d, L> {
    #[must_use]
    pub fn new(store: SessionStore<'d, L>) -> Self {
        let size = store.dictionary().len();
        Self {
            store,
            session_id: SessionId::from(LOCAL_SESSION),
            input_buffer: String::new(),
            prompt: String::new(),
            messages: vec![Message {
                text: format!("Словарь: {size} слов. Enter - ответ, Esc - отмена, F1 - справка."),
                style: MessageStyle::Info,
            }],
            last_search: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Current protocol state of the local session
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.store.state(&self.session_id)
    }

    /// Constraints accepted so far in the running session
    #[must_use]
    pub fn constraints(&self) -> Option<&ConstraintSet> {
        self.store
            .session(&self.session_id)
            .map(Session::constraints)
    }

    pub fn new_search(&mut self) {
        let reply = self.store.start(&self.session_id);
        self.input_buffer.clear();
        self.apply(reply);
    }

    pub fn cancel(&mut self) {
        if self.state() == SessionState::Idle {
            return;
        }
        let reply = self.store.cancel(&self.session_id);
        self.stats.cancelled += 1;
        self.input_buffer.clear();
        self.add_message(&reply.text, MessageStyle::Info);
        self.prompt.clear();
    }

    pub fn show_help(&mut self) {
        let reply = self.store.help(&self.session_id);
        // Help is long; the panel shows it in place of the prompt
        self.prompt = reply.text;
    }

    /// Submit the input line
    pub fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);
        if raw.trim().is_empty() {
            return;
        }

        let input = Input::parse(&raw);
        match input {
            Input::Start => self.new_search(),
            Input::Cancel => self.cancel(),
            Input::Help => self.show_help(),
            Input::Text(_) => {
                let before = self.state();
                let reply = self.store.dispatch(&self.session_id, input);

                if before.is_collecting() && reply.state == before {
                    self.stats.rejected_inputs += 1;
                    self.add_message(&reply.text, MessageStyle::Error);
                    self.prompt = messages::prompt(reply.state).to_string();
                } else if before.is_collecting() {
                    self.add_message(&format!("Принято: {}", raw.trim()), MessageStyle::Info);
                    self.apply(reply);
                } else {
                    self.add_message(&reply.text, MessageStyle::Info);
                }
            }
        }
    }

    fn apply(&mut self, reply: Reply) {
        if let (Some(outcome), Some(constraints)) = (reply.outcome, reply.constraints) {
            self.stats.searches += 1;
            self.add_message(
                &format!("Найдено слов: {}", outcome.len()),
                MessageStyle::Success,
            );
            self.last_search = Some(FinishedSearch {
                outcome,
                constraints,
            });
            self.prompt = "Поиск завершён. Ctrl-N или /start - новый поиск.".to_string();
        } else {
            self.prompt = reply.text;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<L: ActionLog>(app: App<'_, L>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, L: ActionLog>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, L>,
) -> Result<()> {
    app.new_search();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c' | 'q') if ctrl => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if ctrl => {
                    app.new_search();
                }
                KeyCode::Esc => {
                    app.cancel();
                }
                KeyCode::F(1) => {
                    app.show_help();
                }
                KeyCode::Char(c) => {
                    app.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::logging::MemoryActionLog;

    fn dictionary() -> Dictionary {
        Dictionary::from_text("перца\nдерби\nмерзь\nберег\nжердь", "test").unwrap()
    }

    fn type_line<L: ActionLog>(app: &mut App<'_, L>, line: &str) {
        app.input_buffer = line.to_string();
        app.submit();
    }

    #[test]
    fn new_app_reports_dictionary_size() {
        let dict = dictionary();
        let app = App::new(SessionStore::new(&dict, MemoryActionLog::new()));
        assert!(app.messages[0].text.starts_with("Словарь: 5 слов"));
        assert_eq!(app.state(), SessionState::Idle);
    }

    #[test]
    fn full_search_through_the_input_line() {
        let dict = dictionary();
        let mut app = App::new(SessionStore::new(&dict, MemoryActionLog::new()));
        app.new_search();
        assert_eq!(app.state(), SessionState::CollectingRequired);

        for line in ["ре", "хокспитлавк", "3р", "4е"] {
            type_line(&mut app, line);
        }

        assert_eq!(app.state(), SessionState::Idle);
        assert_eq!(app.stats.searches, 1);
        let finished = app.last_search.as_ref().unwrap();
        assert_eq!(finished.outcome.len(), 2);
        assert_eq!(finished.constraints.excluded_positions().to_string(), "4е");
    }

    #[test]
    fn rejected_input_counts_and_keeps_step() {
        let dict = dictionary();
        let mut app = App::new(SessionStore::new(&dict, MemoryActionLog::new()));
        app.new_search();

        type_line(&mut app, "abc");
        assert_eq!(app.stats.rejected_inputs, 1);
        assert_eq!(app.state(), SessionState::CollectingRequired);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn commands_typed_on_the_input_line() {
        let dict = dictionary();
        let mut app = App::new(SessionStore::new(&dict, MemoryActionLog::new()));
        type_line(&mut app, "/start");
        assert_eq!(app.state(), SessionState::CollectingRequired);

        type_line(&mut app, "/cancel");
        assert_eq!(app.state(), SessionState::Idle);
        assert_eq!(app.stats.cancelled, 1);

        type_line(&mut app, "/help");
        assert!(app.prompt.contains("Как пользоваться"));
    }
}
