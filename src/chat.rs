use bevy::prelude::*;

use crate::sets::GameSet;

/// The engine-native color escape character.
pub const COLOR_CHAR: char = '§';

/// Characters accepted after `&` as a color or formatting code.
const COLOR_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replace `&a`-style color-code candidates with the native `§a` form.
/// Anything that is not `&` followed by a known code is left untouched.
pub fn translate_color_codes(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '&'
            && let Some(&next) = chars.peek()
            && COLOR_CODES.contains(next)
        {
            out.push(COLOR_CHAR);
            out.push(next.to_ascii_lowercase());
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

/// A line of chat addressed to one player.
#[derive(Message, Debug, Clone)]
pub struct ChatMessageEvent {
    pub to: Entity,
    pub text: String,
}

/// Deliver queued chat lines. This headless build logs them; a network
/// frontend would read the same messages and push packets instead.
pub fn chat_delivery_system(
    mut messages: MessageReader<ChatMessageEvent>,
    names: Query<&Name>,
) {
    for message in messages.read() {
        match names.get(message.to) {
            Ok(name) => info!("[chat -> {}] {}", name, message.text),
            Err(_) => debug!("dropping chat line for missing entity: {}", message.text),
        }
    }
}

pub struct ChatPlugin;

impl Plugin for ChatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ChatMessageEvent>()
            .add_systems(Update, chat_delivery_system.in_set(GameSet::Chat));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_code_is_translated() {
        assert_eq!(translate_color_codes("&aHello"), "§aHello");
    }

    #[test]
    fn codes_are_lowercased() {
        assert_eq!(translate_color_codes("&AHello &C!"), "§aHello §c!");
    }

    #[test]
    fn unknown_code_is_left_alone() {
        assert_eq!(translate_color_codes("&zHello"), "&zHello");
        assert_eq!(translate_color_codes("5 & 6"), "5 & 6");
    }

    #[test]
    fn trailing_ampersand_survives() {
        assert_eq!(translate_color_codes("Hello &"), "Hello &");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(translate_color_codes("Minecart collected."), "Minecart collected.");
    }
}
