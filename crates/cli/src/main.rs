use clap::Parser;

use stockbook_cli::{Cli, CliConfig};

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_file(cli.file.clone());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    stockbook_cli::run(&cli.command, &config, &mut out)
}
