//! Waitlist signup for The Meme Lore landing page.
//!
//! Wraps the hosted waitlist provider behind a typed client and holds the
//! form's submission state machine. The same call sites compile for native
//! targets (where the tests run against a mock server) and for wasm32
//! (where reqwest rides on the browser's fetch API).
//!
//! # Example
//!
//! ```rust,ignore
//! use lore_waitlist::{Submission, WaitlistClient};
//!
//! let mut submission = Submission::new();
//! submission.set_email("a@b.com");
//!
//! if submission.begin() {
//!     let outcome = WaitlistClient::new().submit("a@b.com").await;
//!     submission.finish(outcome);
//! }
//! ```

mod client;
mod outcome;
mod submission;

pub use client::{
    SignupMeta, SignupRequest, SignupResponse, WaitlistClient, WaitlistConfig, WaitlistError,
};
pub use outcome::{
    SubmitOutcome, CONFIRMATION_MESSAGE, CONNECTIVITY_FAILURE_MESSAGE, GENERIC_FAILURE_MESSAGE,
};
pub use submission::{SubmitStatus, Submission};
