use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contentcraft")]
#[command(about = "Command-line client for the ContentCraft backend API")]
pub struct CliConfig {
    /// Backend base URL; `/api` is appended
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: Option<String>,

    /// TOML configuration file, used when no backend URL is given
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// List portfolio items
    Portfolio {
        /// Category, e.g. "Video Scripts"
        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long)]
        include_inactive: bool,
    },

    /// List testimonials
    Testimonials {
        #[arg(long)]
        include_inactive: bool,
    },

    /// Show headline stats, falling back to the built-in set on failure
    Stats,

    /// Probe backend liveness
    Health,

    /// Send a project inquiry
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        channel: Option<String>,

        /// 0-1k, 1k-10k, 10k-50k, 50k-100k, 100k-500k or 500k+
        #[arg(long)]
        subscribers: Option<String>,

        /// content-multiplier, travel-companion, audience-magnet, video-scripts, email-marketing, custom or retainer
        #[arg(long)]
        service: String,

        /// asap, 1-2-weeks, 2-4-weeks, 1-2-months or flexible
        #[arg(long)]
        project: Option<String>,

        /// under-500, 500-1000, 1000-2000, 2000-5000 or 5000+
        #[arg(long)]
        budget: Option<String>,

        #[arg(long)]
        message: String,
    },

    /// List received inquiries
    Inquiries {
        /// new, contacted, in-progress, completed or closed
        #[arg(long)]
        status: Option<String>,

        #[arg(long, default_value = "50")]
        limit: u32,
    },

    /// Change the status of an inquiry
    SetStatus { id: String, status: String },
}
