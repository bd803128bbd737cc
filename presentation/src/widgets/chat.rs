//! Chat transcript shown inside the search bar

use super::search_bar::ChatEmbed;
use poliseek_domain::{Message, Sender};

/// Messages kept visible when the search bar is not maximized
const COMPACT_MESSAGE_LIMIT: usize = 6;
const EMPTY_PROMPT: &str = "Ask anything about New Era University policies.";

#[derive(Debug, Default)]
pub struct ChatTranscript {
    messages: Vec<Message>,
    maximized: bool,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn visible(&self) -> &[Message] {
        if self.maximized || self.messages.len() <= COMPACT_MESSAGE_LIMIT {
            &self.messages
        } else {
            &self.messages[self.messages.len() - COMPACT_MESSAGE_LIMIT..]
        }
    }
}

impl ChatEmbed for ChatTranscript {
    fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    fn lines(&self, width: usize) -> Vec<String> {
        if self.messages.is_empty() {
            return wrap(EMPTY_PROMPT, width);
        }

        let mut lines = Vec::new();
        let hidden = self.messages.len() - self.visible().len();
        if hidden > 0 {
            lines.push(format!("({} earlier)", hidden));
        }
        for message in self.visible() {
            let speaker = match message.sender {
                Sender::User => "You",
                Sender::Bot => "PoliSeek",
            };
            lines.extend(wrap(&format!("{}: {}", speaker, message.text), width));
        }
        lines
    }
}

/// Greedy word wrap on character counts; overlong words are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let current_len = current.chars().count();
        if current_len > 0 && current_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
