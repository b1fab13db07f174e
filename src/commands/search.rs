//! One-shot search command
//!
//! Answers all four questions from command-line arguments in one go.

use crate::logging::ActionLog;
use crate::session::{Input, Reply, SessionId, SessionState, SessionStore};
use thiserror::Error;

/// Session id used for command-line searches
pub const SEARCH_SESSION: &str = "cli";

/// The four answers, in the order the session asks for them
#[derive(Debug, Clone)]
pub struct SearchArgs {
    pub required: String,
    pub excluded: String,
    pub positions: String,
    pub not_at: String,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            required: "-".to_string(),
            excluded: "-".to_string(),
            positions: "-".to_string(),
            not_at: "-".to_string(),
        }
    }
}

/// An answer the session rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{input:?} rejected at step {}: {explanation}", .step.stage())]
pub struct SearchRejected {
    pub step: SessionState,
    pub input: String,
    pub explanation: String,
}

/// Run a complete session from the arguments
///
/// # Errors
///
/// Returns `SearchRejected` for the first answer the session does not
/// accept; the session is cancelled.
pub fn run_search<L: ActionLog>(
    store: &mut SessionStore<'_, L>,
    args: &SearchArgs,
) -> Result<Reply, SearchRejected> {
    let id = SessionId::from(SEARCH_SESSION);
    store.start(&id);

    let answers = [&args.required, &args.excluded, &args.positions, &args.not_at];
    let mut last = None;

    for answer in answers {
        let step = store.state(&id);
        let reply = store.dispatch(&id, Input::Text(answer.clone()));
        if reply.state == step {
            store.cancel(&id);
            return Err(SearchRejected {
                step,
                input: answer.clone(),
                explanation: reply.text,
            });
        }
        last = Some(reply);
    }

    // Four accepted answers always complete the session
    Ok(last.unwrap_or_else(|| store.cancel(&id)))
}
