//! Configuration module.
//!
//! Loads configuration from environment variables. All values are held
//! per-instance; nothing here is process-global.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Main bot token.
    pub bot_token: String,

    /// Token of the optional debug bot used for log delivery.
    pub debug_bot_token: Option<String>,

    /// File name of the reply keyboard store, relative to the working
    /// directory unless absolute.
    pub reply_store_file: String,

    /// File name of the inline keyboard store.
    pub inline_store_file: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if `BOT_TOKEN` is not set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let debug_bot_token = env::var("DEBUG_BOT_TOKEN")
            .ok()
            .filter(|s| !s.is_empty());

        Self {
            bot_token: env::var("BOT_TOKEN").expect("BOT_TOKEN must be set"),
            debug_bot_token,
            reply_store_file: env::var("REPLY_KEYBOARD_FILE")
                .unwrap_or_else(|_| "r_keys.json".to_string()),
            inline_store_file: env::var("INLINE_KEYBOARD_FILE")
                .unwrap_or_else(|_| "i_keys.json".to_string()),
        }
    }
}
