//! A small Telegram bot that answers three keyboard buttons with a random
//! joke, motivational line, or productivity tip.

pub mod bot;
pub mod config;
pub mod content;
pub mod dispatcher;

pub use config::{Config, ConfigError};
pub use content::Label;
pub use dispatcher::respond;
