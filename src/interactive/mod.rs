//! Interactive terminal front-end

mod app;
mod rendering;

pub use app::{App, FinishedSearch, LOCAL_SESSION, Message, MessageStyle, Statistics, run_tui};
