//! CLI definitions for the `barbershop` binary.
//!
//! Uses clap derive macros for argument parsing. Running with no subcommand
//! starts the server.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use barbershop_types::config::{LogFormat, ServerConfig};

/// Barber shop directory REST service.
#[derive(Parser, Debug)]
#[command(name = "barbershop", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format: pretty or json.
    #[arg(long, global = true, env = "BARBERSHOP_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    /// Path of the optional TOML config file.
    #[arg(long, global = true, env = "BARBERSHOP_CONFIG", default_value = "barbershop.toml")]
    pub config: PathBuf,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run; bare `barbershop` is `serve`.
    pub fn resolved_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default).
    Serve,

    /// Create the barber table if missing, then exit.
    InitDb,
}

/// Overrides for the config file; unset flags keep the file's values.
///
/// Global, so they are accepted with or without a subcommand.
#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Interface to bind.
    #[arg(long, global = true, env = "BARBERSHOP_HOST")]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(short, long, global = true, env = "BARBERSHOP_PORT")]
    pub port: Option<u16>,

    /// SQLite database file.
    #[arg(long, global = true, env = "BARBERSHOP_DATABASE")]
    pub database: Option<String>,
}

impl ServerArgs {
    /// Layer these flags over `config`.
    pub fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database) = self.database {
            config.database_path = database;
        }
        config
    }
}
