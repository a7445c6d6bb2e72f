//! Telegram host using teloxide: routes updates to the dispatcher and sends replies.

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, User};
use teloxide::utils::command::BotCommands;
use teloxide::RequestError;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::content::Label;
use crate::dispatcher::{greeting, reply_to_text};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Show the options keyboard")]
    Start,
}

/// Reply keyboard with one label per row.
pub fn main_keyboard() -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = Label::ALL
        .iter()
        .map(|label| vec![KeyboardButton::new(label.as_str())])
        .collect();
    KeyboardMarkup::new(rows).resize_keyboard().persistent()
}

/// Update routing: `/start` first, then any other message.
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::endpoint(handle_text))
}

/// Connect to Telegram and poll for updates until Ctrl-C.
pub async fn run(config: &Config) {
    let bot = Bot::new(&config.telegram_bot_token);

    match bot.get_me().await {
        Ok(me) => info!("Bot user ID: {}, username: @{}", me.id, me.username()),
        Err(e) => warn!("Failed to get bot info: {e}"),
    }

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register commands: {e}");
    }

    info!("Bot starting...");
    Dispatcher::builder(bot, schema())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    match cmd {
        Command::Start => {
            let name = first_name(msg.from.as_ref());
            info!("/start from {} in chat {}", name.unwrap_or("unknown"), msg.chat.id);

            let text = greeting(name);
            if let Err(e) = bot
                .send_message(msg.chat.id, text)
                .reply_markup(main_keyboard())
                .await
            {
                warn!("Failed to send greeting: {e}");
            }
        }
    }
    Ok(())
}

async fn handle_text(bot: Bot, msg: Message) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    // Unknown commands get no reply.
    if is_command(text) {
        debug!("Ignoring command {:?} in chat {}", text, msg.chat.id);
        return Ok(());
    }

    let name = first_name(msg.from.as_ref()).unwrap_or("unknown");
    let preview: String = text.chars().take(100).collect();
    let (label, reply) = reply_to_text(&mut rand::thread_rng(), text);
    match label {
        Some(label) => info!("Message from {name}: \"{preview}\" → {label}"),
        None => info!("Message from {name}: \"{preview}\" → fallback"),
    }

    if let Err(e) = bot.send_message(msg.chat.id, reply).await {
        warn!("Failed to send reply: {e}");
    }
    Ok(())
}

fn first_name(user: Option<&User>) -> Option<&str> {
    user.map(|u| u.first_name.as_str())
}

fn is_command(text: &str) -> bool {
    text.trim_start().starts_with('/')
}
