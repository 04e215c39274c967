//! Bot module - client construction, sending helpers, polling runtime.

pub mod runtime;
pub mod service;

pub use runtime::spawn_polling;
pub use service::{BotService, ThrottledBot, build_bot, check_token};
