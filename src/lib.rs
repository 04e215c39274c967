//! Simplegram - Thin convenience layer over teloxide.
//!
//! Wraps bot construction and message sending, generates keyboard
//! markup (including paged inline menus), and persists named keyboard
//! layouts to JSON files.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `error` - Typed crate error
//! - `keyboard` - Grid model, text codecs, paged menus, file store
//! - `bot` - Client construction, sending helpers, polling runtime
//!
//! ## Example
//!
//! ```no_run
//! use simplegram::{BotService, Button, Config, KeyboardStore, build_paged_menu};
//! use teloxide::types::{ChatId, ParseMode};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let service = BotService::from_config(&config);
//!
//! let items: Vec<Button> = (1..=85)
//!     .map(|i| Button::callback(format!("Item {i}"), format!("item:{i}")))
//!     .collect();
//! let page = build_paged_menu(
//!     &items,
//!     1,
//!     6,
//!     2,
//!     &Button::callback("«", "page:back"),
//!     &Button::callback("»", "page:forward"),
//! )?;
//!
//! service
//!     .send_message_with_keyboard(ChatId(42), "Pick one:", page.to_inline_markup()?, ParseMode::Html)
//!     .await?;
//!
//! let store = KeyboardStore::from_config(&config);
//! let layouts = store.load_inline().await?;
//! # let _ = layouts;
//! # Ok(())
//! # }
//! ```

pub mod bot;
pub mod config;
pub mod error;
pub mod keyboard;

pub use bot::{BotService, ThrottledBot, build_bot, check_token, spawn_polling};
pub use config::Config;
pub use error::{Error, Result};
pub use keyboard::{Button, Keyboard, KeyboardStore, LayoutSet, build_menu, build_paged_menu};

use tracing_subscriber::EnvFilter;

/// Initialize logging with sensible defaults.
///
/// If `RUST_LOG` is not set, defaults to "info" level for this crate.
/// Call at most once per process.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("simplegram=info,teloxide=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
