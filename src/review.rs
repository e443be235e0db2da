// review.rs
//! Candidate review navigation shared by the search screens.
//!
//! The flow is search -> profile -> analysis, with an explicit back action
//! returning to search from anywhere. Transitions that do not apply to the
//! current stage are no-ops.

/// Stage of the candidate review flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewStage {
    #[default]
    Search,
    Profile,
    Analysis,
}

impl ReviewStage {
    /// Profile-view action: only meaningful from the search results.
    pub fn view_profile(self) -> Self {
        match self {
            Self::Search => Self::Profile,
            other => other,
        }
    }

    /// Analyze action: only meaningful while a profile is open.
    pub fn analyze(self) -> Self {
        match self {
            Self::Profile => Self::Analysis,
            other => other,
        }
    }

    /// Back action: always returns to search.
    pub fn back(self) -> Self {
        Self::Search
    }
}
