//! User-facing outcome of a signup attempt.

use crate::client::{SignupResponse, WaitlistError};

/// Confirmation shown when the provider accepts the signup.
pub const CONFIRMATION_MESSAGE: &str = "You've been added to the waitlist!";

/// Fallback shown when the provider rejects without an explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Shown when no response could be obtained at all.
pub const CONNECTIVITY_FAILURE_MESSAGE: &str = "Failed to connect. Please try again later.";

/// What the widget tells the user after one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The provider accepted the email.
    Accepted { message: String },
    /// The provider rejected the signup, or it never reached the provider.
    Rejected { message: String },
}

impl SubmitOutcome {
    /// Map a raw signup result to its user-facing outcome.
    ///
    /// Acceptance always carries the fixed confirmation string; the 4xx/5xx
    /// distinction is deliberately flattened away.
    pub fn from_result(result: Result<SignupResponse, WaitlistError>) -> Self {
        match result {
            Ok(_) => Self::Accepted {
                message: CONFIRMATION_MESSAGE.to_string(),
            },
            Err(WaitlistError::Rejected { message, .. }) => Self::Rejected {
                message: message.unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            },
            Err(WaitlistError::Transport(_)) => Self::Rejected {
                message: CONNECTIVITY_FAILURE_MESSAGE.to_string(),
            },
        }
    }

    /// Whether the signup was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The status line to show the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Accepted { message } | Self::Rejected { message } => message,
        }
    }
}
