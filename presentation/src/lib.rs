//! Presentation layer for poliseek
//!
//! This crate contains CLI definitions, the terminal login view, the search
//! bar widget and the console adapters for the application ports.

pub mod cli;
pub mod config;
pub mod home;
pub mod location;
pub mod login;
pub mod navigation;
pub mod output;
pub mod widgets;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::OutputConfig;
pub use home::HomeScreen;
pub use location::BrowserLocation;
pub use login::screen::{LOGIN_ROUTE, LoginOutcome, LoginScreen};
pub use login::view::LoginView;
pub use navigation::ConsoleNavigator;
pub use output::console::ConsoleFormatter;
pub use output::notifier::ConsoleNotifier;
pub use widgets::chat::ChatTranscript;
pub use widgets::search_bar::{ChatEmbed, SearchBar, SearchBarIcon, SearchBarLayout};
