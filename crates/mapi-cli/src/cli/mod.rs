//! CLI for the mapi management REST client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mapi_core::config::{self, ManagerConfig};
use mapi_core::session::ManagerSession;
use std::path::PathBuf;

use commands::{run_completions, run_get, run_info, run_meminfo, run_uptime};

/// Top-level CLI for the mapi management REST client.
#[derive(Debug, Parser)]
#[command(name = "mapi")]
#[command(about = "mapi: authenticated REST client for appliance management APIs", long_about = None)]
pub struct Cli {
    /// Manager base URL (overrides the configured value).
    #[arg(long, global = true, value_name = "URL")]
    pub manager_url: Option<String>,

    /// Username for HTTP Basic authentication (overrides the configured value).
    #[arg(long, global = true, value_name = "USER")]
    pub username: Option<String>,

    /// Password for HTTP Basic authentication (overrides the configured value).
    #[arg(long, global = true, value_name = "PASS")]
    pub password: Option<String>,

    /// Skip TLS certificate verification even if the config says otherwise.
    #[arg(long, global = true)]
    pub insecure: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// GET an endpoint path (or absolute URL) on the manager.
    Get {
        /// Endpoint path (e.g. /api/1.0/appliance-management/global/info) or absolute URL.
        target: String,

        /// Write the response body to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Ask the server for JSON instead of its default format.
        #[arg(long)]
        json: bool,
    },

    /// Show appliance global information.
    Info {
        /// Write the response body to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Ask the server for JSON instead of its default format.
        #[arg(long)]
        json: bool,
    },

    /// Show appliance memory usage.
    Meminfo {
        /// Write the response body to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Ask the server for JSON instead of its default format.
        #[arg(long)]
        json: bool,
    },

    /// Show appliance uptime.
    Uptime {
        /// Write the response body to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Ask the server for JSON instead of its default format.
        #[arg(long)]
        json: bool,
    },

    /// Generate a shell completion script on stdout.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Loads the config file and applies flag overrides for this invocation.
    fn resolved_config(&self) -> Result<ManagerConfig> {
        let mut cfg = config::load_or_init()?;
        if let Some(url) = &self.manager_url {
            cfg.manager_url = url.clone();
        }
        if let Some(user) = &self.username {
            cfg.username = user.clone();
        }
        if let Some(pass) = &self.password {
            cfg.password = pass.clone();
        }
        if self.insecure {
            cfg.accept_invalid_certs = true;
        }
        tracing::debug!(manager_url = %cfg.manager_url, username = %cfg.username, "resolved configuration");
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = &cli.command {
            run_completions(*shell);
            return Ok(());
        }

        let cfg = cli.resolved_config()?;
        let session = ManagerSession::from_config(&cfg);

        match &cli.command {
            CliCommand::Get {
                target,
                output,
                json,
            } => run_get(&session, &cfg, target, output.as_deref(), *json)?,
            CliCommand::Info { output, json } => {
                run_info(&session, &cfg, output.as_deref(), *json)?
            }
            CliCommand::Meminfo { output, json } => {
                run_meminfo(&session, &cfg, output.as_deref(), *json)?
            }
            CliCommand::Uptime { output, json } => {
                run_uptime(&session, &cfg, output.as_deref(), *json)?
            }
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
