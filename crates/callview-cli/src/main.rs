//! callview CLI: terminal viewer for the call assistant conversation log

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use callview_client::{fetch_log, Config};

/// Conversation log viewer for the call assistant backend
#[derive(Parser)]
#[command(name = "callview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true, default_value = ".callview/config.json")]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Fetch the conversation log once and print it
    Fetch {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = load_config(&cli.config);
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(callview_tui::run_tui(config)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Fetch { json }) => {
            init_logging();
            cmd_fetch(&cli.config, json);
        }
        Some(Commands::Init) => {
            init_logging();
            cmd_init(&cli.config);
        }
    }
}

/// Log to stderr for the non-TUI commands; the TUI keeps the alternate
/// screen clean by not installing a subscriber.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Config {
    match Config::load_or_default(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_fetch(config_path: &Path, json: bool) {
    let config = load_config(config_path);

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let entries = match rt.block_on(fetch_log(&config)) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error fetching conversation log: {e}");
            std::process::exit(1);
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).expect("failed to serialize")
        );
        return;
    }

    if entries.is_empty() {
        println!("No conversation data available.");
        return;
    }

    for entry in &entries {
        let time = entry.time_str();
        if time.is_empty() {
            println!("{}: {}", entry.role.label(), entry.content);
        } else {
            println!("{time}  {}: {}", entry.role.label(), entry.content);
        }
    }
    println!("\n{} entry(ies) from {}", entries.len(), config.log_url());
}

fn cmd_init(config_path: &Path) {
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return;
    }

    let config = Config::default();
    match config.save(config_path) {
        Ok(()) => {
            println!("Created {}", config_path.display());
            println!("Edit it to point at your backend, or set CALLVIEW_BASE_URL");
        }
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}
