// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Frontdesk - a conversational customer support orchestrator.
//!
//! This is the binary entry point: an interactive support shell plus an
//! admin surface over the ticket store.

use clap::{Parser, Subcommand};

mod shell;
mod stub;
mod tickets;

/// Frontdesk - a conversational customer support orchestrator.
#[derive(Parser, Debug)]
#[command(name = "frontdesk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Launch an interactive support chat session.
    Shell {
        /// User identifier attached to the session and its tickets.
        #[arg(long, default_value = "local")]
        user: String,
    },
    /// Administer escalation tickets.
    Tickets {
        #[command(subcommand)]
        command: tickets::TicketCommand,
    },
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("frontdesk={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match frontdesk_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            frontdesk_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Shell { user }) => shell::run_shell(config, &user).await,
        Some(Commands::Tickets { command }) => tickets::run(config, command).await,
        None => {
            println!("frontdesk: use --help for available commands");
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
