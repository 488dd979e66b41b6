//! CLI argument structures
//!
//! Each subcommand stands in for one tab of the subscription form.

use crate::subscription::LeadTime;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Get a phone alert before scheduled power outages
#[derive(Parser)]
#[command(name = "energizame")]
#[command(about = "energizame - Manage phone alerts for scheduled power outages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Notification service root (overrides config and environment)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a phone to be warned before outages
    #[command(visible_alias = "agregar")]
    Add {
        /// National ID (10 digits)
        #[arg(long)]
        cedula: String,

        /// Phone number in the format 09XXXXXXXX
        #[arg(long)]
        telefono: String,

        /// Minutes of warning before the outage (5, 10, ..., 60)
        #[arg(long, value_name = "MINUTES", value_parser = parse_lead_time)]
        tiempo: Option<LeadTime>,
    },
    /// Remove all notifications registered for a national ID
    #[command(visible_alias = "eliminar")]
    Remove {
        /// National ID (10 digits)
        #[arg(long)]
        cedula: String,

        /// Phone number in the format 09XXXXXXXX
        #[arg(long)]
        telefono: String,
    },
    /// List the lead times that can be selected
    LeadTimes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_lead_time(value: &str) -> Result<LeadTime, String> {
    value.parse::<LeadTime>().map_err(|e| e.to_string())
}
