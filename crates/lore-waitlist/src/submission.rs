//! Submission state machine for the waitlist form.

use crate::outcome::SubmitOutcome;

/// Where one submission attempt currently stands.
///
/// Transitions are `Idle -> Loading -> (Success | Error)`, plus
/// `Error -> Loading` on a manual retry. `Success` is terminal for the page
/// load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Local state of the waitlist form for one page load.
///
/// Nothing here is persisted; reloading the page starts over at `Idle`.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    /// User-supplied email text.
    pub email: String,
    /// Current position in the state machine.
    pub status: SubmitStatus,
    /// Status line shown under the form; empty outside Success/Error.
    pub message: String,
}

impl Submission {
    /// Fresh state for a new page load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the email text as the user types.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Whether a submit attempt would currently be accepted.
    ///
    /// Refused while the email is empty, while a call is in flight, and
    /// forever after a success.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty()
            && self.status != SubmitStatus::Loading
            && self.status != SubmitStatus::Success
    }

    /// Whether the input and submit control should be disabled.
    pub fn controls_disabled(&self) -> bool {
        matches!(self.status, SubmitStatus::Loading | SubmitStatus::Success)
    }

    /// Start a submission attempt.
    ///
    /// Returns `false` without any side effects when the attempt is refused;
    /// the caller must not issue a network request in that case. Otherwise
    /// transitions to `Loading` and clears any prior status message, before
    /// any network activity happens.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.status = SubmitStatus::Loading;
        self.message.clear();
        true
    }

    /// Record the outcome of the one network call.
    ///
    /// Leaves the in-flight state either way; only a success clears the
    /// email field and locks the form.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Accepted { message } => {
                self.status = SubmitStatus::Success;
                self.message = message;
                self.email.clear();
            }
            SubmitOutcome::Rejected { message } => {
                self.status = SubmitStatus::Error;
                self.message = message;
            }
        }
    }
}
