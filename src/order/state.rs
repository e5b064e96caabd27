//! Acceptance FSM State Definitions

use std::fmt;

/// Order acceptance FSM states
///
/// ```text
/// RECEIVED → ITEM_LOOKUP → VALIDATING → PERSISTING → ACCEPTED
///                 ↓             ↓            ↓
///         REJECTED / FAILED  REJECTED   REJECTED / FAILED
/// ```
///
/// Terminal states: ACCEPTED, REJECTED, FAILED
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowState {
    Received,
    ItemLookup,
    Validating,
    Persisting,
    Accepted,
    Rejected,
    Failed,
}

impl WorkflowState {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorkflowState::Accepted | WorkflowState::Rejected | WorkflowState::Failed
        )
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(&self, next: WorkflowState) -> bool {
        use WorkflowState::*;
        matches!(
            (self, next),
            (Received, ItemLookup)
                // cancellation before the lookup is issued
                | (Received, Failed)
                | (ItemLookup, Validating)
                | (ItemLookup, Rejected)
                | (ItemLookup, Failed)
                | (Validating, Persisting)
                | (Validating, Rejected)
                // cancellation before the write is issued
                | (Validating, Failed)
                | (Persisting, Accepted)
                | (Persisting, Rejected)
                | (Persisting, Failed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Received => "RECEIVED",
            WorkflowState::ItemLookup => "ITEM_LOOKUP",
            WorkflowState::Validating => "VALIDATING",
            WorkflowState::Persisting => "PERSISTING",
            WorkflowState::Accepted => "ACCEPTED",
            WorkflowState::Rejected => "REJECTED",
            WorkflowState::Failed => "FAILED",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WorkflowState; 7] = [
        WorkflowState::Received,
        WorkflowState::ItemLookup,
        WorkflowState::Validating,
        WorkflowState::Persisting,
        WorkflowState::Accepted,
        WorkflowState::Rejected,
        WorkflowState::Failed,
    ];

    #[test]
    fn test_terminal_states() {
        assert!(WorkflowState::Accepted.is_terminal());
        assert!(WorkflowState::Rejected.is_terminal());
        assert!(WorkflowState::Failed.is_terminal());

        assert!(!WorkflowState::Received.is_terminal());
        assert!(!WorkflowState::ItemLookup.is_terminal());
        assert!(!WorkflowState::Validating.is_terminal());
        assert!(!WorkflowState::Persisting.is_terminal());
    }

    #[test]
    fn test_terminal_states_have_no_successors() {
        for from in ALL.iter().filter(|s| s.is_terminal()) {
            for to in ALL {
                assert!(!from.can_transition_to(to), "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_happy_path_is_legal() {
        let path = [
            WorkflowState::Received,
            WorkflowState::ItemLookup,
            WorkflowState::Validating,
            WorkflowState::Persisting,
            WorkflowState::Accepted,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]));
        }
    }

    #[test]
    fn test_only_persisting_reaches_accepted() {
        for from in ALL {
            let legal = from.can_transition_to(WorkflowState::Accepted);
            assert_eq!(legal, from == WorkflowState::Persisting, "{}", from);
        }
    }

    #[test]
    fn test_no_skipping_lookup() {
        assert!(!WorkflowState::Received.can_transition_to(WorkflowState::Validating));
        assert!(!WorkflowState::Received.can_transition_to(WorkflowState::Persisting));
        assert!(!WorkflowState::ItemLookup.can_transition_to(WorkflowState::Persisting));
    }

    #[test]
    fn test_display() {
        assert_eq!(WorkflowState::ItemLookup.to_string(), "ITEM_LOOKUP");
        assert_eq!(WorkflowState::Failed.to_string(), "FAILED");
    }
}
