use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "zosmf-bridge")]
#[command(about = "Talk to a z/OSMF host: USS files, datasets, jobs, commands")]
pub struct Cli {
    /// Connection profile TOML file
    #[arg(long, default_value = "./profile.toml")]
    pub profile: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Probe the connection and print the z/OSMF status
    Status,
    /// List a USS directory
    UssList { path: String },
    /// List datasets matching a filter
    DsList { filter: String },
    /// List the members of a partitioned dataset
    Members { dataset: String },
    /// List jobs by owner and prefix
    Jobs {
        owner: String,
        #[arg(default_value = "*")]
        prefix: String,
    },
    /// Print a job's spool file contents
    Spool {
        jobname: String,
        jobid: String,
        spool_id: i64,
    },
    /// Submit a job from a dataset
    Submit { dataset: String },
    /// Issue an MVS console command
    Console { command: String },
}
