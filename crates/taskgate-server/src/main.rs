//! taskgate - Entry Point

use clap::Parser;
use taskgate_server::run;

/// Command line interface for taskgate
#[derive(Parser, Debug)]
#[command(name = "taskgate")]
#[command(about = "taskgate - task manager API with token auth and ownership-aware authorization")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
