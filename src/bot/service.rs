//! Sending helpers over a throttled teloxide bot.
//!
//! Thin pass-through to the Telegram API: every method here is one SDK
//! call plus error surfacing. Transport concerns (long polling, retry,
//! rate limiting beyond the Throttle adaptor) stay in teloxide.

use std::path::Path;

use teloxide::adaptors::Throttle;
use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InputFile, KeyboardRemove as ReplyKeyboardRemove, MessageId, ParseMode, ReplyMarkup,
};
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Build a bot with Throttle for automatic rate limiting.
///
/// This respects Telegram's rate limits:
/// - 30 messages per second globally
/// - 1 message per second to the same chat
/// - 20 messages per minute to the same group
pub fn build_bot(token: &str) -> ThrottledBot {
    Bot::new(token).throttle(Limits::default())
}

/// Probe a token with `getMe`. Returns `false` on any API failure.
pub async fn check_token(token: &str) -> bool {
    Bot::new(token).get_me().await.is_ok()
}

/// Convenience wrapper bundling the main bot and an optional debug bot
/// used for log delivery. Both are per-instance; the service holds no
/// global state.
#[derive(Clone)]
pub struct BotService {
    bot: ThrottledBot,
    debug: Option<ThrottledBot>,
}

impl BotService {
    /// Wrap an already-built bot, without a debug bot.
    pub fn new(bot: ThrottledBot) -> Self {
        Self { bot, debug: None }
    }

    /// Attach a debug bot for [`BotService::send_log`].
    pub fn with_debug_bot(mut self, debug: ThrottledBot) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Build the main bot (and the debug bot, if a token is configured)
    /// from configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut service = Self::new(build_bot(&config.bot_token));
        if let Some(token) = &config.debug_bot_token {
            service = service.with_debug_bot(build_bot(token));
        }
        service
    }

    /// The underlying throttled bot, for calls this wrapper does not cover.
    pub fn bot(&self) -> &ThrottledBot {
        &self.bot
    }

    /// Send a text message.
    pub async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        parse: ParseMode,
    ) -> Result<Message> {
        let msg = self
            .bot
            .send_message(chat_id, text)
            .parse_mode(parse)
            .await?;
        Ok(msg)
    }

    /// Send a text message with any reply markup (reply keyboard,
    /// inline keyboard, or keyboard removal).
    pub async fn send_message_with_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        markup: impl Into<ReplyMarkup>,
        parse: ParseMode,
    ) -> Result<Message> {
        let msg = self
            .bot
            .send_message(chat_id, text)
            .parse_mode(parse)
            .reply_markup(markup.into())
            .await?;
        Ok(msg)
    }

    /// Send a text message that removes the chat's reply keyboard.
    pub async fn send_remove_message(
        &self,
        chat_id: ChatId,
        text: &str,
        parse: ParseMode,
    ) -> Result<Message> {
        self.send_message_with_keyboard(chat_id, text, ReplyKeyboardRemove::new(), parse)
            .await
    }

    /// Send a local file as a document with a caption, optionally
    /// deleting the file once it has been sent.
    pub async fn send_document(
        &self,
        chat_id: ChatId,
        path: &Path,
        caption: &str,
        parse: ParseMode,
        delete_when_sent: bool,
    ) -> Result<Message> {
        let msg = self
            .bot
            .send_document(chat_id, InputFile::file(path.to_path_buf()))
            .caption(caption)
            .parse_mode(parse)
            .await?;
        if delete_when_sent {
            tokio::fs::remove_file(path).await?;
            info!(path = %path.display(), "sent document deleted");
        }
        Ok(msg)
    }

    /// Delete a message.
    pub async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.bot.delete_message(chat_id, message_id).await?;
        Ok(())
    }

    /// Send a plain-text log line through the debug bot.
    pub async fn send_log(&self, chat_id: ChatId, text: &str) -> Result<Message> {
        let debug = self.debug.as_ref().ok_or(Error::NoDebugBot)?;
        let msg = debug.send_message(chat_id, text).await?;
        Ok(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_log_without_debug_bot_is_an_error() {
        let service = BotService::new(build_bot("0:placeholder"));
        assert!(matches!(
            service.send_log(ChatId(1), "hello").await,
            Err(Error::NoDebugBot)
        ));
    }
}
