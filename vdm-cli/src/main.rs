//! VDM CLI - Command line tool for vacation destination data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "vdm-cli",
    version,
    about = "Summer vacation destination map data toolkit"
)]
struct Cli {
    /// Backend location: JSON file path, sqlite:<path>, http(s)://…, blob+http(s)://… or memory:
    #[arg(
        short = 's',
        long,
        env = "VDM_STORE",
        default_value = "vacation_data.json",
        global = true
    )]
    store: String,

    #[command(subcommand)]
    command: vdm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    vdm_cmd::run(&cli.store, cli.command).await
}
