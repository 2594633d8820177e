use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod create;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8000")]
        port: String,
    },
    /// Ask whether the calendar is free at a time described in plain language
    Check {
        #[arg(long)]
        query: String,
    },
    /// Create a calendar event
    Create {
        #[arg(long)]
        subject: String,
        /// ISO 8601 start time in UTC
        #[arg(long)]
        start_time: String,
        /// ISO 8601 end time in UTC
        #[arg(long)]
        end_time: String,
        /// Attendee email address, can be repeated
        #[arg(long = "attendee")]
        attendees: Vec<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            let config = AppConfig::from_env()?;
            serve::run(host, port, config).await?;
        }
        Some(Command::Check { query }) => {
            let config = AppConfig::from_env()?;
            check::run(query, &config).await?;
        }
        Some(Command::Create {
            subject,
            start_time,
            end_time,
            attendees,
        }) => {
            let config = AppConfig::from_env()?;
            create::run(subject, start_time, end_time, attendees, &config).await?;
        }
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_repeated_attendees() {
        let cli = Cli::try_parse_from([
            "calbridge",
            "create",
            "--subject",
            "Sync",
            "--start-time",
            "2024-01-02T15:00:00Z",
            "--end-time",
            "2024-01-02T16:00:00Z",
            "--attendee",
            "bob@example.com",
            "--attendee",
            "alice@example.com",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Create { attendees, .. }) => {
                assert_eq!(attendees, vec!["bob@example.com", "alice@example.com"]);
            }
            _ => panic!("Expected Create command"),
        }
    }

    #[test]
    fn it_defaults_serve_address() {
        let cli = Cli::try_parse_from(["calbridge", "serve"]).unwrap();
        match cli.command {
            Some(Command::Serve { host, port }) => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, "8000");
            }
            _ => panic!("Expected Serve command"),
        }
    }
}
