use anyhow::Result;
use clap::Parser;
use gitstreak::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
