use crate::grid::GridSizeError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    /// The action was valid but changed nothing (e.g. clicking an occupied
    /// cell without the modifier).
    NoOp(String),
    Error(ActionError),
}

impl ActionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success)
    }

    /// Human-readable reason for a no-op or error.
    pub fn reason(&self) -> Option<String> {
        match self {
            ActionResult::Success => None,
            ActionResult::NoOp(reason) => Some(reason.clone()),
            ActionResult::Error(err) => Some(err.message()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    InvalidGridSize(GridSizeError),
}

impl ActionError {
    pub fn message(&self) -> String {
        match self {
            ActionError::InvalidGridSize(err) => format!("Rejected: {err}"),
        }
    }
}
