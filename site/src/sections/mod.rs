//! Landing page sections.

mod hero;
mod waitlist;

pub use hero::Hero;
pub use waitlist::WaitlistForm;
