//! Session states

/// Where a session is in the collection protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// No search in progress
    Idle,
    CollectingRequired,
    CollectingExcluded,
    CollectingRequiredPositions,
    CollectingExcludedPositions,
    /// Search ran; the session is about to be discarded
    Completed,
}

impl SessionState {
    /// The collecting steps, in order
    pub const STEPS: [Self; 4] = [
        Self::CollectingRequired,
        Self::CollectingExcluded,
        Self::CollectingRequiredPositions,
        Self::CollectingExcludedPositions,
    ];

    /// State after an accepted input
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Idle => Self::CollectingRequired,
            Self::CollectingRequired => Self::CollectingExcluded,
            Self::CollectingExcluded => Self::CollectingRequiredPositions,
            Self::CollectingRequiredPositions => Self::CollectingExcludedPositions,
            Self::CollectingExcludedPositions => Self::Completed,
            Self::Completed => Self::Idle,
        }
    }

    /// Short name used in action records
    #[must_use]
    pub const fn stage(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CollectingRequired => "required",
            Self::CollectingExcluded => "excluded",
            Self::CollectingRequiredPositions => "required_positions",
            Self::CollectingExcludedPositions => "excluded_positions",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub const fn is_collecting(self) -> bool {
        matches!(
            self,
            Self::CollectingRequired
                | Self::CollectingExcluded
                | Self::CollectingRequiredPositions
                | Self::CollectingExcludedPositions
        )
    }

    /// One-based step number while collecting
    #[must_use]
    pub const fn step_number(self) -> Option<usize> {
        match self {
            Self::CollectingRequired => Some(1),
            Self::CollectingExcluded => Some(2),
            Self::CollectingRequiredPositions => Some(3),
            Self::CollectingExcludedPositions => Some(4),
            Self::Idle | Self::Completed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_chain_in_order() {
        let mut state = SessionState::Idle;
        let mut visited = Vec::new();
        for _ in 0..6 {
            state = state.next();
            visited.push(state);
        }
        assert_eq!(
            visited,
            [
                SessionState::CollectingRequired,
                SessionState::CollectingExcluded,
                SessionState::CollectingRequiredPositions,
                SessionState::CollectingExcludedPositions,
                SessionState::Completed,
                SessionState::Idle,
            ]
        );
    }

    #[test]
    fn only_steps_are_collecting() {
        for (i, state) in SessionState::STEPS.iter().enumerate() {
            assert!(state.is_collecting());
            assert_eq!(state.step_number(), Some(i + 1));
        }
        assert!(!SessionState::Idle.is_collecting());
        assert!(!SessionState::Completed.is_collecting());
        assert_eq!(SessionState::Idle.step_number(), None);
    }

    #[test]
    fn stage_names() {
        assert_eq!(SessionState::CollectingRequired.stage(), "required");
        assert_eq!(
            SessionState::CollectingExcludedPositions.stage(),
            "excluded_positions"
        );
    }
}
