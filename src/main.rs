use anyhow::Result;
use clap::Parser;
use horario::cli::Cli;
use log::error;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = horario::load_config(&cli)?;

    let level = if cli.verbose { "debug" } else { config.logging.level.as_str() };
    horario::init_logger(level);

    if let Err(err) = horario::run(cli, &config) {
        error!("{:#}", err);
        std::process::exit(1);
    }

    Ok(())
}
