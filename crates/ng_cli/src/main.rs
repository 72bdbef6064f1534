mod cli;
mod commands;
mod logging;

use clap::Parser;
use ng_core::Result;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    commands::run(cli.command).await
}
