//! Command-line interface definitions.
//!
//! Uses `clap` derive macros for declarative argument parsing. The run
//! itself lives in [`probe`].

mod probe;

use crate::config::AppSettings;
use crate::error::{CliResult, ConfigError};
use clap::builder::FalseyValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Check HTTP status and scan TCP ports 20-9999 for every host in a list.
///
/// Hosts are read one per line. Each one gets an HTTP HEAD request to
/// http://<host>, then a TCP connect sweep over ports 20-9999 with a
/// one second timeout per port.
#[derive(Parser, Debug)]
#[command(name = "subprobe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "HTTP status checker and TCP port scanner for host lists", long_about = None)]
pub struct Cli {
    /// File with one hostname per line [default: subdomains.txt]
    #[arg(value_name = "HOSTS_FILE")]
    pub hosts: Option<PathBuf>,

    /// Maximum number of hosts probed at once [default: 100]
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Skip the HTTP status phase
    #[arg(long)]
    pub skip_status: bool,

    /// Skip the port scan phase
    #[arg(long)]
    pub skip_ports: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub hosts_file: PathBuf,
    pub concurrency: usize,
}

impl Cli {
    /// Load the settings file and apply command-line overrides.
    pub fn resolve(&self) -> CliResult<RunOptions> {
        let settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        Ok(self.merge(settings)?)
    }

    fn merge(&self, settings: AppSettings) -> Result<RunOptions, ConfigError> {
        let concurrency = self.concurrency.unwrap_or(settings.concurrency);
        if concurrency == 0 {
            return Err(ConfigError::Invalid(
                "concurrency must be at least 1".to_string(),
            ));
        }

        Ok(RunOptions {
            hosts_file: self.hosts.clone().unwrap_or(settings.hosts_file),
            concurrency,
        })
    }

    /// Whether output lines should carry ANSI colors.
    pub fn colored(&self) -> bool {
        !self.no_color && console::colors_enabled()
    }
}
