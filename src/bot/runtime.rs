//! Bot runtime - polling runner.
//!
//! The dispatcher itself is built by the caller with whatever handler
//! schema their bot needs; this module only owns starting and stopping
//! the receive loop.

use teloxide::dispatching::{DefaultKey, ShutdownToken};
use teloxide::prelude::*;
use tracing::info;

use super::service::ThrottledBot;

/// Dispatcher type this runtime accepts.
pub type BotDispatcher = Dispatcher<ThrottledBot, anyhow::Error, DefaultKey>;

/// Spawn the dispatcher's polling loop on the tokio runtime.
///
/// Returns the dispatcher's [`ShutdownToken`]; calling
/// [`ShutdownToken::shutdown`] stops receiving updates.
pub fn spawn_polling(mut dispatcher: BotDispatcher) -> ShutdownToken {
    let token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        info!("Starting bot in polling mode...");
        dispatcher.dispatch().await;
        info!("Dispatcher stopped");
    });
    token
}

/// Run the dispatcher's polling loop on the current task until it stops.
pub async fn run_polling(mut dispatcher: BotDispatcher) {
    info!("Starting bot in polling mode...");
    dispatcher.dispatch().await;
}
