//! Home screen: the search bar with its embedded chat

use crate::widgets::chat::ChatTranscript;
use crate::widgets::search_bar::SearchBar;
use colored::Colorize;
use poliseek_domain::Message;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const DEFAULT_WIDTH: usize = 80;

/// What a line of input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Redraw,
    Quit,
}

pub struct HomeScreen {
    bar: SearchBar<ChatTranscript>,
    width: usize,
    user: Option<String>,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            bar: SearchBar::new(ChatTranscript::new()),
            width: terminal_width(),
            user: None,
        }
    }

    pub fn with_user(mut self, email: Option<String>) -> Self {
        self.user = email;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn search_bar(&self) -> &SearchBar<ChatTranscript> {
        &self.bar
    }

    /// Read commands until `/quit` or end of input
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        println!("{}", self.draw());
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            match self.handle(&line) {
                Input::Quit => break,
                Input::Redraw => println!("{}", self.draw()),
            }
        }
        Ok(())
    }

    fn handle(&mut self, line: &str) -> Input {
        match line.trim() {
            "/quit" | "/q" | "/exit" => Input::Quit,
            "/max" | "/m" => {
                self.bar.toggle_maximize();
                Input::Redraw
            }
            "" => Input::Redraw,
            text => {
                self.bar.chat_mut().push(Message::user(text));
                Input::Redraw
            }
        }
    }

    pub fn draw(&self) -> String {
        let mut output = String::new();
        if !self.bar.mode().is_maximized() {
            output.push_str(&format!("{}\n", "NEUPoliSeek".green().bold()));
            if let Some(user) = &self.user {
                output.push_str(&format!("{} {}\n", "Signed in as".dimmed(), user));
            }
        }
        output.push_str(&self.bar.render(self.width).join("\n"));
        output.push_str(&format!(
            "\n{}",
            "/max toggles full screen, /quit exits".dimmed()
        ));
        output
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Width from `$COLUMNS`, as exported by most shells
fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(DEFAULT_WIDTH)
}
