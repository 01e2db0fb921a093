//! Bot front end - routes chat triggers to the hardware controller

mod delivery;
mod trigger;

pub use trigger::{Trigger, TriggerFilter};

use crate::config::BridgeConfig;
use crate::controller::HardwareController;
use crate::executor::ActionOutcome;
use std::path::PathBuf;
use std::sync::Arc;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile};
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

/// Structured commands, registered with the platform at startup
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    #[command(description = "run the rescue servo once")]
    Rescue,
    #[command(description = "capture an image from the camera")]
    Snapshot,
}

/// Connect, register the command set, and dispatch until shutdown
pub async fn run(config: BridgeConfig, controller: Arc<HardwareController>) -> anyhow::Result<()> {
    let bot = Bot::new(config.bot_token.clone());

    let me = bot.get_me().await?;
    bot.set_my_commands(Command::bot_commands()).await?;
    info!("bot commands registered");
    info!("logged in as {}", me.user.full_name());

    let filter = TriggerFilter {
        self_id: me.user.id.0,
        rescue_chat_id: config.rescue_chat_id,
    };

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::endpoint(handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![controller, filter])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Structured command route; commands are accepted from any chat
async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    controller: Arc<HardwareController>,
) -> ResponseResult<()> {
    match cmd {
        Command::Rescue => reply_rescue(&bot, msg.chat.id, &controller).await,
        Command::Snapshot => reply_snapshot(&bot, msg.chat.id, &controller).await,
    }
    Ok(())
}

/// Plain-text route; every message passes through the trigger filter
async fn handle_message(
    bot: Bot,
    msg: Message,
    filter: TriggerFilter,
    controller: Arc<HardwareController>,
) -> ResponseResult<()> {
    let text = msg.text().unwrap_or("");
    let sender = msg.from.as_ref().map(|user| user.id.0);

    match filter.classify(text, msg.chat.id.0, sender) {
        Trigger::RunServo => reply_rescue(&bot, msg.chat.id, &controller).await,
        Trigger::RunSnapshot => reply_snapshot(&bot, msg.chat.id, &controller).await,
        Trigger::NoAction => {}
    }
    Ok(())
}

async fn reply_rescue(bot: &Bot, chat: ChatId, controller: &HardwareController) {
    let text = match controller.rescue().await {
        ActionOutcome::Success { .. } => "✅ rescue executed".to_string(),
        ActionOutcome::SoftFailure => "⚠️ rescue reported failure".to_string(),
        ActionOutcome::Error { kind, message } => format!("servo error: {}: {}", kind, message),
    };
    send_text(bot, chat, &text).await;
}

async fn reply_snapshot(bot: &Bot, chat: ChatId, controller: &HardwareController) {
    match controller.snapshot().await {
        ActionOutcome::Success {
            artifact: Some(path),
        } => {
            let send = |artifact: PathBuf| {
                let bot = bot.clone();
                async move {
                    bot.send_photo(chat, InputFile::file(artifact))
                        .caption("📷 snapshot captured")
                        .await
                        .map(|_| ())
                }
            };
            if let Err(e) = delivery::deliver(path, send).await {
                error!("failed to deliver snapshot: {}", e);
            }
        }
        // The camera contract always yields an artifact on success
        ActionOutcome::Success { artifact: None } | ActionOutcome::SoftFailure => {
            send_text(bot, chat, "📷 snapshot error: Internal: no artifact produced").await;
        }
        ActionOutcome::Error { kind, message } => {
            let text = format!("📷 snapshot error: {}: {}", kind, message);
            send_text(bot, chat, &text).await;
        }
    }
}

async fn send_text(bot: &Bot, chat: ChatId, text: &str) {
    if let Err(e) = bot.send_message(chat, text.to_string()).await {
        error!("failed to send reply: {}", e);
    }
}
