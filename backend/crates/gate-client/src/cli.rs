use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gate")]
#[command(about = "Email/password sign-in against a gate-server")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to client.server_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Directory holding the stored session (defaults to client.session_dir)
    #[arg(long, global = true)]
    pub session_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log diagnostics to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an account and start a session
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Start a session with existing credentials
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Print the current session, or null
    Whoami,

    /// Show the signed-in view; fails when no one is logged in
    Dashboard,
}
