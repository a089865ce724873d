use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitstreak")]
#[command(about = "Contribution graph for your local git repositories")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to the repository list file")]
    pub repos: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Scan {
        #[arg(required = true, help = "Folders to scan for git repositories")]
        paths: Vec<PathBuf>,
    },
    Stats {
        #[arg(help = "Author email to aggregate commits for")]
        email: String,

        #[arg(long, help = "Output day buckets as JSON instead of drawing")]
        json: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Scan { paths } => crate::scan::exec(self.repos.as_deref(), &paths),
            Commands::Stats { email, json } => {
                crate::stats::exec(self.repos.as_deref(), &email, json)
            }
        }
    }
}
