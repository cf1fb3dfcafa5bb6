//! advisor CLI: Ask for advice from a conversation service

use advisor_engine::{
    Config, ConversationWidget, LogSink, MessageForm, ServiceKind, SubmitError, SubmitOutcome,
};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Chat widget for asking a conversation service for advice
#[derive(Parser)]
#[command(name = "advisor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: .advisor/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Conversation endpoint URL
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Use the offline mock service
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Send one message and print the conversation
    Ask {
        /// The question to send
        message: String,
    },

    /// Initialize .advisor/ directory and config
    Init,

    /// Print the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => match std::env::current_dir() {
            Ok(cwd) => Config::default_path(&cwd),
            Err(e) => {
                eprintln!("Error: failed to get current directory: {e}");
                std::process::exit(1);
            }
        },
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = effective_config(&cli, &config_path);
            init_tui_logging(&config);
            let rt = runtime();
            if let Err(e) = rt.block_on(advisor_tui::run_tui(&config)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Ask { ref message }) => {
            let config = effective_config(&cli, &config_path);
            init_logging(std::io::stderr);
            let rt = runtime();
            if !rt.block_on(cmd_ask(&config, message)) {
                std::process::exit(1);
            }
        }
        Some(Commands::Init) => {
            cmd_init(&config_path);
        }
        Some(Commands::Config { json }) => {
            let config = effective_config(&cli, &config_path);
            cmd_config(&config, json);
        }
    }
}

/// Load the config file if present and apply command-line overrides.
fn effective_config(cli: &Cli, path: &Path) -> Config {
    let mut config = match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config {}: {e}", path.display());
            std::process::exit(1);
        }
    };
    apply_overrides(&mut config, cli);
    config
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.clone_from(endpoint);
        config.service = ServiceKind::Http;
    }
    if cli.mock {
        config.service = ServiceKind::Mock;
    }
}

fn runtime() -> tokio::runtime::Runtime {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to create tokio runtime: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logging<W>(writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("advisor=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .try_init();
}

/// The terminal belongs to the TUI, so logs go to the configured file or nowhere.
fn init_tui_logging(config: &Config) {
    let Some(path) = &config.log_file else {
        init_logging(std::io::sink);
        return;
    };

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => init_logging(Mutex::new(file)),
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {e}", path.display());
            init_logging(std::io::sink);
        }
    }
}

/// Run one submission through the widget. Returns whether it was sent.
async fn cmd_ask(config: &Config, message: &str) -> bool {
    let mut widget = ConversationWidget::new(config.build_service(), MessageForm::new(), LogSink);
    widget.open_modal();

    match widget.submit(message).await {
        Ok(SubmitOutcome::Sent { .. }) => {
            for message in widget.transcript().messages() {
                println!("{}: {}", message.role(), message.content());
            }
            true
        }
        Ok(SubmitOutcome::Failed(e)) => {
            eprintln!("Error: {e}");
            false
        }
        Err(SubmitError::Invalid(e)) => {
            eprintln!("{e}");
            false
        }
        Err(e @ (SubmitError::Busy | SubmitError::Stale)) => {
            eprintln!("Error: {e}");
            false
        }
    }
}

fn cmd_init(config_path: &Path) {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return;
    }

    match Config::default().save(config_path) {
        Ok(()) => println!("Created {}", config_path.display()),
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_config(config: &Config, json: bool) {
    if json {
        match serde_json::to_string_pretty(config) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let service = match config.service {
        ServiceKind::Http => "http",
        ServiceKind::Mock => "mock",
    };
    println!("Endpoint:    {}", config.endpoint);
    println!("Service:     {service}");
    println!("Toast ticks: {}", config.toast_ticks);
    match &config.log_file {
        Some(path) => println!("Log file:    {}", path.display()),
        None => println!("Log file:    (none)"),
    }
}
