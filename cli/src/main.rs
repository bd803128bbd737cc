//! CLI entrypoint for NEUPoliSeek
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use poliseek_application::{IdentityProvider, LoginGate, SessionStatusUseCase};
use poliseek_domain::ChatRecord;
use poliseek_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, FileSessionStore, MemoryLocation,
    MemorySessionStore, SessionStore, SupabaseAuthClient, SupabaseConfig,
};
use poliseek_presentation::{
    BrowserLocation, Cli, Command, ConsoleFormatter, ConsoleNavigator, ConsoleNotifier,
    HomeScreen, LOGIN_ROUTE, LoginOutcome, LoginScreen, LoginView, OutputConfig,
};
use std::path::Path;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources() {
            println!("{}", line);
        }
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, &config.logging)?;
    info!("Starting NEUPoliSeek");

    let output = OutputConfig {
        color: config.output.color,
        open_browser: config.output.open_browser,
        ..OutputConfig::default()
    };
    output.apply();

    let command = cli.command();
    if let Command::Types { file } = &command {
        return check_types(file);
    }

    let issues = config.validate();
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::config_issues(&issues));
    }
    if issues.iter().any(|issue| issue.is_error()) {
        bail!("Invalid configuration. Run with --show-config to see where settings are read from.");
    }

    // === Dependency Injection ===
    let provider = build_provider(&config)?;

    match command {
        Command::Login { callback } => run_login(provider, &config, &output, callback).await,
        Command::SignIn => sign_in(provider, &config, &output).await,
        Command::SignOut => {
            provider.sign_out().await?;
            println!("Signed out");
            Ok(())
        }
        Command::Status => {
            let verdict = SessionStatusUseCase::new(provider).execute().await?;
            print!("{}", ConsoleFormatter::status(&verdict));
            Ok(())
        }
        Command::Types { file } => check_types(&file),
    }
}

/// Console logging filtered by `-v`, `RUST_LOG` or `[logging] level`, plus
/// an optional daily log file.
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(logging.level.as_deref().unwrap_or("warn"))
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match &logging.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory).with_context(|| {
                format!("Cannot create log directory {}", directory.display())
            })?;
            let appender = tracing_appender::rolling::daily(directory, "poliseek.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            Ok(None)
        }
    }
}

fn build_provider(config: &FileConfig) -> Result<Arc<dyn IdentityProvider>> {
    let url = config.auth.url.as_deref().context("auth.url is not set")?;
    let anon_key = config
        .auth
        .anon_key
        .clone()
        .context("auth.anon_key is not set")?;
    let supabase = SupabaseConfig::new(url, anon_key)?;

    let store: Arc<dyn SessionStore> = match config.session.resolved_store_path() {
        Some(path) => {
            info!("Session file: {}", path.display());
            Arc::new(FileSessionStore::new(path))
        }
        None => {
            warn!("Session persistence disabled; sign-in lasts for this run only");
            Arc::new(MemorySessionStore::new())
        }
    };

    Ok(Arc::new(SupabaseAuthClient::new(supabase, store)))
}

fn login_gate(
    provider: Arc<dyn IdentityProvider>,
    config: &FileConfig,
    output: &OutputConfig,
    callback: Option<String>,
    navigator: Arc<ConsoleNavigator>,
    notifier: Arc<ConsoleNotifier>,
) -> LoginGate {
    let memory = callback
        .as_deref()
        .map(MemoryLocation::from_callback)
        .unwrap_or_default();
    let location = Arc::new(BrowserLocation::new(memory).with_open_browser(output.open_browser));
    let login_config = config
        .login
        .to_login_config(config.auth.redirect_to.clone())
        .with_home_route(config.home_route());

    LoginGate::new(provider, navigator, notifier, location, login_config)
}

async fn run_login(
    provider: Arc<dyn IdentityProvider>,
    config: &FileConfig,
    output: &OutputConfig,
    callback: Option<String>,
) -> Result<()> {
    let navigator = Arc::new(ConsoleNavigator::new(LOGIN_ROUTE));
    let notifier = Arc::new(ConsoleNotifier::new());
    let teardown = CancellationToken::new();

    let gate = login_gate(
        provider.clone(),
        config,
        output,
        callback,
        navigator.clone(),
        notifier.clone(),
    )
    .with_cancellation(teardown.clone());
    let view = LoginView::new(notifier).with_progress(output.show_progress);
    let screen = LoginScreen::new(gate, view, navigator, teardown.clone());

    // Ctrl-C tears the login screen down
    let interrupt = {
        let teardown = teardown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                teardown.cancel();
            }
        })
    };

    let outcome = screen.run(BufReader::new(tokio::io::stdin())).await;
    interrupt.abort();

    match outcome {
        LoginOutcome::SignedIn { route } => {
            info!("Entering {}", route);
            let email = provider
                .get_session()
                .await
                .ok()
                .flatten()
                .and_then(|s| s.email().map(str::to_string));
            HomeScreen::new()
                .with_user(email)
                .run(BufReader::new(tokio::io::stdin()))
                .await?;
        }
        LoginOutcome::RedirectStarted(_) => print_callback_hint(),
        LoginOutcome::Quit | LoginOutcome::TornDown => {}
    }
    Ok(())
}

async fn sign_in(
    provider: Arc<dyn IdentityProvider>,
    config: &FileConfig,
    output: &OutputConfig,
) -> Result<()> {
    let navigator = Arc::new(ConsoleNavigator::new(LOGIN_ROUTE));
    let notifier = Arc::new(ConsoleNotifier::new());
    let gate = login_gate(provider, config, output, None, navigator, notifier);

    gate.sign_in().await?;
    print_callback_hint();
    Ok(())
}

fn print_callback_hint() {
    println!();
    println!("After signing in, copy the address the browser lands on and run:");
    println!("  poliseek login --callback '<redirect URL>'");
}

fn check_types(file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("Cannot read {}", file.display()))?;
    let records = ChatRecord::parse_all(&json)
        .with_context(|| format!("{} does not hold chat data", file.display()))?;
    print!("{}", ConsoleFormatter::records(&records));
    Ok(())
}
