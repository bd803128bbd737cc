//! Console formatting for the login screen and the auxiliary commands

use colored::Colorize;
use poliseek_application::{Toast, ToastVariant};
use chrono::{DateTime, Utc};
use poliseek_domain::{
    ChatRecord, ChatSession, ConfigIssue, LoginViewState, PolicyVerdict, Severity,
};

const CARD_WIDTH: usize = 60;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub const WELCOME_TITLE: &str = "Welcome to NEUPoliSeek!";
pub const WELCOME_SUBTITLE: &str = "Sign in to access New Era University policies.";
pub const SIGN_IN_BUTTON: &str = "Sign in with Google (@neu.edu.ph only)";
pub const DOMAIN_NOTICE: &str =
    "Only New Era University accounts (@neu.edu.ph) are allowed to sign in.";

/// Formats view state and command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The sign-in card: heading, optional error alert, button and notice.
    pub fn login_card(state: &LoginViewState) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(WELCOME_TITLE));
        output.push('\n');
        output.push_str(&format!(
            "{}\n\n",
            format!("{:^width$}", WELCOME_SUBTITLE, width = CARD_WIDTH).dimmed()
        ));

        if let Some(error) = &state.error {
            output.push_str(&format!("{} {}\n\n", "!".red().bold(), error.red()));
        }

        let button = if state.loading {
            format!("[ ... {} ]", SIGN_IN_BUTTON).dimmed()
        } else {
            format!("[ G {} ]", SIGN_IN_BUTTON).green().bold()
        };
        output.push_str(&format!("{}\n\n", button));
        output.push_str(&format!("{}\n", DOMAIN_NOTICE.dimmed()));

        if state.can_sign_in() {
            output.push_str(&format!(
                "\n{}\n",
                "Press Enter to sign in, or q to quit.".dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// One line per toast, destructive ones in red
    pub fn toast(toast: &Toast) -> String {
        let title = match toast.variant {
            ToastVariant::Destructive => toast.title.red().bold(),
            ToastVariant::Default => toast.title.cyan().bold(),
        };
        format!("{} {}", title, toast.description)
    }

    /// Result of `poliseek status`
    pub fn status(verdict: &PolicyVerdict) -> String {
        match verdict {
            PolicyVerdict::Accepted(session) => {
                let mut output = format!(
                    "{} {}\n",
                    "Signed in as".green().bold(),
                    session.email().unwrap_or_default()
                );
                if let Some(expires_at) = session.expires_at {
                    output.push_str(&format!(
                        "  {} {}\n",
                        "Session expires:".dimmed(),
                        expires_at.to_rfc3339()
                    ));
                }
                output
            }
            PolicyVerdict::RejectedWrongDomain { email } => format!(
                "{} {} is not a New Era University account\n",
                "Rejected:".red().bold(),
                email.as_deref().unwrap_or("<no email>")
            ),
            PolicyVerdict::NoSession => format!("{}\n", "Not signed in".yellow()),
        }
    }

    /// Result of `poliseek types`
    pub fn records(records: &[ChatRecord]) -> String {
        let mut output = Self::section_header(&format!("{} record(s)", records.len()));
        for (i, record) in records.iter().enumerate() {
            output.push_str(&format!(
                "  {:>3}  {:<18} {}\n",
                i,
                record.kind().cyan(),
                record.label()
            ));
            if let ChatRecord::ChatSession(session) = record {
                output.push_str(&format!("       {}\n", Self::session_times(session)));
            }
        }
        output
    }

    /// Creation and last-update times; unparseable timestamps are flagged
    fn session_times(session: &ChatSession) -> String {
        let stamp = |time: DateTime<Utc>| time.format(TIME_FORMAT).to_string();
        let created = match session.created_at_utc() {
            Ok(time) => format!("created {}", stamp(time)),
            Err(e) => e.to_string().red().to_string(),
        };
        match session.updated_at_utc() {
            Some(Ok(time)) => format!("{}, updated {}", created, stamp(time)),
            Some(Err(e)) => format!("{}, {}", created, e.to_string().red()),
            None => created,
        }
    }

    pub fn config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "error:".red().bold(), issue.message),
                Severity::Warning => format!("{} {}", "warning:".yellow().bold(), issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(CARD_WIDTH);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(CARD_WIDTH).cyan())
    }
}
