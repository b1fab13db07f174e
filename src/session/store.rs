//! Session-keyed store and transport entry point

use super::messages;
use super::{Session, SessionState, StepError, Transition};
use crate::core::{ConflictError, ConstraintSet};
use crate::dictionary::Dictionary;
use crate::logging::{ActionLog, ActionRecord};
use crate::search::SearchOutcome;
use rustc_hash::FxHashMap;
use std::fmt;

/// Identifier the transport assigns to each user conversation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for SessionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One message from the transport, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Start,
    Cancel,
    Help,
    Text(String),
}

impl Input {
    /// Recognize `/start`, `/cancel` and `/help`; anything else is text
    ///
    /// Commands are case-insensitive and may carry a `@botname` suffix.
    ///
    /// # Examples
    /// ```
    /// use five_letters::session::Input;
    ///
    /// assert_eq!(Input::parse("/start"), Input::Start);
    /// assert_eq!(Input::parse(" /Cancel@helper_bot "), Input::Cancel);
    /// assert_eq!(Input::parse("ре"), Input::Text("ре".to_string()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            return Self::Text(raw.to_string());
        };
        let name = command.split('@').next().unwrap_or_default();
        match name.to_lowercase().as_str() {
            "start" => Self::Start,
            "cancel" => Self::Cancel,
            "help" => Self::Help,
            _ => Self::Text(raw.to_string()),
        }
    }
}

/// Answer for the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Prompt, explanation or report to show
    pub text: String,
    /// State the session is in after this input
    pub state: SessionState,
    /// Search result, only on completion
    pub outcome: Option<SearchOutcome>,
    /// Constraints the search ran with, only on completion
    pub constraints: Option<ConstraintSet>,
}

impl Reply {
    fn new(text: impl Into<String>, state: SessionState) -> Self {
        Self {
            text: text.into(),
            state,
            outcome: None,
            constraints: None,
        }
    }
}

/// All active sessions, keyed by session id
///
/// Sessions never share a constraint set. Completing or cancelling a
/// session removes it; an absent session is `Idle`.
pub struct SessionStore<'d, L: ActionLog> {
    dictionary: &'d Dictionary,
    sessions: FxHashMap<SessionId, Session>,
    log: L,
}

impl<'d, L: ActionLog> SessionStore<'d, L> {
    #[must_use]
    pub fn new(dictionary: &'d Dictionary, log: L) -> Self {
        Self {
            dictionary,
            sessions: FxHashMap::default(),
            log,
        }
    }

    /// Route one classified input
    pub fn dispatch(&mut self, id: &SessionId, input: Input) -> Reply {
        match input {
            Input::Start => self.start(id),
            Input::Cancel => self.cancel(id),
            Input::Help => self.help(id),
            Input::Text(text) => self.handle_text(id, &text),
        }
    }

    /// Begin a new search, discarding any unfinished one for this id
    pub fn start(&mut self, id: &SessionId) -> Reply {
        self.record(id, "start", String::new());
        let session = Session::new();
        let state = session.state();
        self.sessions.insert(id.clone(), session);
        Reply::new(
            format!("{}\n\n{}", messages::GREETING, messages::prompt(state)),
            state,
        )
    }

    /// Drop the session without searching
    pub fn cancel(&mut self, id: &SessionId) -> Reply {
        self.record(id, "cancel", String::new());
        self.sessions.remove(id);
        Reply::new(messages::CANCELLED, SessionState::Idle)
    }

    /// Usage text; the session, if any, is left as it is
    pub fn help(&mut self, id: &SessionId) -> Reply {
        self.record(id, "help", String::new());
        Reply::new(messages::HELP, self.state(id))
    }

    /// Feed free text to the session's current step
    pub fn handle_text(&mut self, id: &SessionId, text: &str) -> Reply {
        let Some(session) = self.sessions.get_mut(id) else {
            return Reply::new(messages::NOT_STARTED, SessionState::Idle);
        };
        let stage = session.state();

        match session.advance(text, self.dictionary) {
            Ok(Transition::Advanced(next)) => {
                let value = accepted_value(session, stage);
                self.record(id, stage.stage(), format!("value={value}"));
                Reply::new(messages::prompt(next), next)
            }
            Ok(Transition::Completed(outcome)) => {
                let value = accepted_value(session, stage);
                let report = messages::report(&outcome, session.constraints());
                let constraints = self
                    .sessions
                    .remove(id)
                    .map(|finished| finished.constraints().clone());
                self.record(id, stage.stage(), format!("value={value}"));
                self.record(id, "search_complete", format!("found={}", outcome.len()));
                Reply {
                    text: report,
                    state: SessionState::Idle,
                    outcome: Some(outcome),
                    constraints,
                }
            }
            Err(StepError::Inactive) => {
                self.sessions.remove(id);
                Reply::new(messages::NOT_STARTED, SessionState::Idle)
            }
            Err(err) => {
                let detail = rejection_detail(stage, text, &err);
                self.record(id, "invalid_input", detail);
                Reply::new(messages::rejection(&err.to_string(), stage), stage)
            }
        }
    }

    /// Current state of a session; `Idle` when there is none
    #[must_use]
    pub fn state(&self, id: &SessionId) -> SessionState {
        self.sessions
            .get(id)
            .map_or(SessionState::Idle, Session::state)
    }

    #[must_use]
    pub fn session(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    #[must_use]
    pub const fn log(&self) -> &L {
        &self.log
    }

    fn record(&mut self, id: &SessionId, action: &'static str, detail: String) {
        self.log.record(ActionRecord {
            session: id.to_string(),
            action,
            detail,
        });
    }
}

/// Display form of the fragment a step just stored
fn accepted_value(session: &Session, stage: SessionState) -> String {
    let constraints = session.constraints();
    match stage {
        SessionState::CollectingRequired => constraints.required().to_string(),
        SessionState::CollectingExcluded => constraints.excluded().to_string(),
        SessionState::CollectingRequiredPositions => {
            constraints.required_positions().to_string()
        }
        SessionState::CollectingExcludedPositions => {
            constraints.excluded_positions().to_string()
        }
        SessionState::Idle | SessionState::Completed => String::new(),
    }
}

fn rejection_detail(stage: SessionState, text: &str, err: &StepError) -> String {
    let stage = stage.stage();
    match err {
        StepError::Conflict(conflict) => match conflict {
            ConflictError::RequiredExcluded { letters } => {
                format!("stage={stage} | conflict={letters}")
            }
            ConflictError::PositionLetter { letters } => {
                format!("stage={stage} | conflict_with_excluded={letters}")
            }
            ConflictError::PositionOverlap { conflicts } => {
                let listed: Vec<String> = conflicts.iter().map(|(p, c)| format!("{p}{c}")).collect();
                format!("stage={stage} | position_conflict={}", listed.join(" "))
            }
            ConflictError::LetterFullyExcluded { letter } => {
                format!("stage={stage} | char_excluded_everywhere={letter}")
            }
        },
        StepError::Parse(_) | StepError::Inactive => {
            format!("stage={stage} | input={}", text.trim())
        }
    }
}
