// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `frontdesk tickets` admin subcommands over the ticket store.

use clap::Subcommand;
use colored::Colorize;
use frontdesk_config::FrontdeskConfig;
use frontdesk_core::error::FrontdeskError;
use frontdesk_core::types::{Priority, Ticket, TicketId, TicketStatus};
use frontdesk_tickets::TicketStore;

/// Ticket administration commands.
#[derive(Subcommand, Debug)]
pub enum TicketCommand {
    /// List all tickets, newest first.
    List {
        /// Only show tickets with this status.
        #[arg(long)]
        status: Option<TicketStatus>,
    },
    /// Show one ticket, including its conversation snapshot.
    Show { ticket_id: String },
    /// Update a ticket's status.
    Status {
        ticket_id: String,
        status: TicketStatus,
    },
    /// Append an admin reply to a ticket.
    Reply { ticket_id: String, text: String },
    /// Show ticket counts by status and priority.
    Stats,
}

pub async fn run(config: FrontdeskConfig, command: TicketCommand) -> Result<(), FrontdeskError> {
    let store = TicketStore::open(&config.tickets.store_path).await?;

    match command {
        TicketCommand::List { status } => {
            let tickets = store.list_tickets().await;
            let tickets: Vec<&Ticket> = tickets
                .iter()
                .filter(|t| status.is_none_or(|s| t.status == s))
                .collect();
            if tickets.is_empty() {
                println!("{}", "no tickets".dimmed());
                return Ok(());
            }
            for ticket in tickets {
                println!(
                    "{}  {}  {}  {}  {}",
                    ticket.ticket_id.to_string().bold(),
                    colorize_priority(ticket.priority),
                    ticket.status,
                    ticket.user_id,
                    ticket.reason.dimmed()
                );
            }
        }
        TicketCommand::Show { ticket_id } => {
            let Some(ticket) = store.get_ticket(&TicketId(ticket_id.clone())).await else {
                eprintln!("{}: no ticket {ticket_id}", "error".red());
                std::process::exit(1);
            };
            println!("{}", ticket.ticket_id.to_string().bold());
            println!("user:     {}", ticket.user_id);
            println!("reason:   {}", ticket.reason);
            println!("priority: {}", colorize_priority(ticket.priority));
            println!("status:   {}", ticket.status);
            println!("created:  {}", ticket.created_at);
            println!("updated:  {}", ticket.updated_at);
            println!();
            for message in &ticket.conversation {
                println!("{}: {}", message.role.to_string().to_uppercase().bold(), message.content);
            }
        }
        TicketCommand::Status { ticket_id, status } => {
            if store.update_status(&TicketId(ticket_id.clone()), status).await? {
                println!("{ticket_id} -> {status}");
            } else {
                eprintln!("{}: no ticket {ticket_id}", "error".red());
                std::process::exit(1);
            }
        }
        TicketCommand::Reply { ticket_id, text } => {
            if store.append_admin_reply(&TicketId(ticket_id.clone()), &text).await? {
                println!("reply appended to {ticket_id}");
            } else {
                eprintln!("{}: no ticket {ticket_id}", "error".red());
                std::process::exit(1);
            }
        }
        TicketCommand::Stats => {
            println!("{}", "by status".bold());
            for (status, count) in store.count_by_status().await {
                println!("  {status:<12} {count}");
            }
            println!("{}", "by priority".bold());
            for (priority, count) in store.count_by_priority().await {
                println!("  {priority:<12} {count}");
            }
        }
    }

    Ok(())
}

fn colorize_priority(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => priority.to_string().red(),
        Priority::Medium => priority.to_string().yellow(),
        Priority::Low => priority.to_string().normal(),
    }
}
