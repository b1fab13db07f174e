//! Single-session state machine

use super::SessionState;
use crate::core::{ConflictError, ConstraintSet};
use crate::dictionary::Dictionary;
use crate::input::{ParseError, parse_excluded_positions, parse_letters, parse_required_positions};
use crate::search::SearchOutcome;
use thiserror::Error;

/// Why an input was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("Поиск не начат.")]
    Inactive,
}

/// Result of an accepted input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Moved on to the given collecting state
    Advanced(SessionState),
    /// Last fragment accepted and the search ran
    Completed(SearchOutcome),
}

/// One user's constraint collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    state: SessionState,
    constraints: ConstraintSet,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Start collecting with an empty constraint set
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SessionState::CollectingRequired,
            constraints: ConstraintSet::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Fragments accepted so far
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Feed one line of user input to the current step
    ///
    /// The text is trimmed and lower-cased first. A rejected input leaves
    /// both the state and the constraints unchanged. Accepting the last
    /// fragment runs the search exactly once.
    ///
    /// # Errors
    /// - `StepError::Parse` if the text is malformed
    /// - `StepError::Conflict` if it contradicts an earlier step
    /// - `StepError::Inactive` if the session is not collecting
    pub fn advance(
        &mut self,
        text: &str,
        dictionary: &Dictionary,
    ) -> Result<Transition, StepError> {
        let text = text.trim().to_lowercase();

        match self.state {
            SessionState::CollectingRequired => {
                let letters = parse_letters(&text)?;
                self.constraints.accept_required(letters);
            }
            SessionState::CollectingExcluded => {
                let letters = parse_letters(&text)?;
                self.constraints.accept_excluded(letters)?;
            }
            SessionState::CollectingRequiredPositions => {
                let positions = parse_required_positions(&text)?;
                self.constraints.accept_required_positions(positions)?;
            }
            SessionState::CollectingExcludedPositions => {
                let positions = parse_excluded_positions(&text)?;
                self.constraints.accept_excluded_positions(positions)?;
                self.state = SessionState::Completed;
                return Ok(Transition::Completed(SearchOutcome::run(
                    dictionary,
                    &self.constraints,
                )));
            }
            SessionState::Idle | SessionState::Completed => return Err(StepError::Inactive),
        }

        self.state = self.state.next();
        Ok(Transition::Advanced(self.state))
    }
}
