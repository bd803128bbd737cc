//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for poliseek
#[derive(Parser, Debug)]
#[command(name = "poliseek")]
#[command(author, version, about = "NEUPoliSeek - New Era University policy assistant")]
#[command(long_about = r#"
NEUPoliSeek answers questions about New Era University policies.
Only @neu.edu.ph Google accounts may sign in.

Running without a subcommand is the same as `poliseek login`: the stored
session is checked and, when it belongs to an allowed account, the home
screen opens. Otherwise the sign-in card is shown.

After signing in through the browser, paste the redirect URL back with:
  poliseek login --callback 'http://localhost:8080/login#access_token=...'

Configuration files are loaded from (in priority order):
1. POLISEEK_* environment variables (e.g. POLISEEK_AUTH__ANON_KEY)
2. --config <path>      Explicit config file
3. ./poliseek.toml      Project-level config
4. ~/.config/poliseek/config.toml   Global config
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the login screen (default)
    Login {
        /// OAuth redirect URL or its `#access_token=...` fragment
        #[arg(long, value_name = "URL|FRAGMENT")]
        callback: Option<String>,
    },
    /// Start Google sign-in directly, skipping the session check
    SignIn,
    /// Sign out and forget the stored session
    SignOut,
    /// Show whether the stored session would be allowed in
    Status,
    /// Check a JSON file against the chat data types
    Types {
        /// File holding a message, chat session, document or section (or an array)
        file: PathBuf,
    },
}

impl Cli {
    /// The subcommand to run, `login` when none was given
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Login { callback: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_login() {
        let cli = Cli::parse_from(["poliseek"]);
        assert_eq!(cli.command(), Command::Login { callback: None });
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_login_with_callback() {
        let cli = Cli::parse_from(["poliseek", "login", "--callback", "#access_token=abc"]);
        assert_eq!(
            cli.command(),
            Command::Login {
                callback: Some("#access_token=abc".to_string())
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["poliseek", "status", "-vv", "--no-config"]);
        assert_eq!(cli.command(), Command::Status);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_config);
    }

    #[test]
    fn test_types_requires_file() {
        assert!(Cli::try_parse_from(["poliseek", "types"]).is_err());
        let cli = Cli::parse_from(["poliseek", "types", "chat.json"]);
        assert_eq!(
            cli.command(),
            Command::Types {
                file: PathBuf::from("chat.json")
            }
        );
    }
}
