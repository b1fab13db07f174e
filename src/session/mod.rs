//! Conversation protocol
//!
//! Collects the four constraint fragments step by step, re-asking on bad
//! input, and runs one search at the end. The [`SessionStore`] keeps one
//! independent [`Session`] per session id.

pub mod messages;
mod protocol;
mod state;
mod store;

pub use protocol::{Session, StepError, Transition};
pub use state::SessionState;
pub use store::{Input, Reply, SessionId, SessionStore};
