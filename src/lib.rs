//! Five Letters
//!
//! Helper for the Russian five-letter word game: collects what the player
//! knows about the hidden word in four steps and lists every dictionary
//! word that fits.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use five_letters::dictionary::Dictionary;
//! use five_letters::logging::NullActionLog;
//! use five_letters::session::{Input, SessionId, SessionStore};
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let mut store = SessionStore::new(&dictionary, NullActionLog);
//! let id = SessionId::from(42_u64);
//!
//! store.dispatch(&id, Input::Start);
//! for answer in ["ре", "хокспитлавк", "3р", "4е"] {
//!     let reply = store.dispatch(&id, Input::Text(answer.to_string()));
//!     println!("{}", reply.text);
//! }
//! ```

// Core domain types
pub mod core;

// Parsing of user answers
pub mod input;

// Word dictionary
pub mod dictionary;

// Word filter
pub mod search;

// Per-user conversation state
pub mod session;

// User action log
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
