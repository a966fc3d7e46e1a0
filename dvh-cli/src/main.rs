//! DVH CLI - Command line tool for daily-value hydrograph chart data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dvh-cli",
    version,
    about = "Daily-value hydrograph data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: dvh_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    dvh_cmd::run(cli.command)
}
