//! Maps an incoming message to the text the bot replies with.
//!
//! Every input has a defined reply, so nothing here returns an error.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::content::Label;

const DEFAULT_NAME: &str = "there";

/// Reply to a message using the thread-local RNG.
pub fn respond(message_text: &str, sender_name: Option<&str>, is_start_command: bool) -> String {
    respond_with(&mut rand::thread_rng(), message_text, sender_name, is_start_command)
}

/// Same as [`respond`], drawing replies from `rng`.
pub fn respond_with<R: Rng + ?Sized>(
    rng: &mut R,
    message_text: &str,
    sender_name: Option<&str>,
    is_start_command: bool,
) -> String {
    if is_start_command {
        return greeting(sender_name);
    }

    reply_to_text(rng, message_text).1
}

/// Reply to a non-command message, also returning the label it matched.
pub fn reply_to_text<R: Rng + ?Sized>(rng: &mut R, message_text: &str) -> (Option<Label>, String) {
    let label = Label::from_text(message_text);
    let reply = match label {
        Some(label) => pick(rng, label),
        None => fallback(),
    };
    (label, reply)
}

/// Uniformly sample one reply from the label's collection.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, label: Label) -> String {
    match label.replies().choose(rng) {
        Some(reply) => (*reply).to_string(),
        // Collections are non-empty, see content tests.
        None => fallback(),
    }
}

/// Welcome text for `/start`.
pub fn greeting(sender_name: Option<&str>) -> String {
    let name = sender_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_NAME);

    let options: Vec<String> = Label::ALL.iter().map(|l| format!("• {l}")).collect();
    format!(
        "Hi {name}! I'm a friendly bot. Choose an option below or type your own message:\n\n{}",
        options.join("\n")
    )
}

/// Help hint for anything that isn't a label.
pub fn fallback() -> String {
    let options: Vec<&str> = Label::ALL.iter().map(|l| l.as_str()).collect();
    format!(
        "I didn't recognize that option. \
         Try one of the buttons or type /start to see them again.\n\n\
         Options: {}",
        options.join(" | ")
    )
}
