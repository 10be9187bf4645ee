use clap::Parser;
use seqkit::app::{handle_fatal_error, init_logging, AppConfig};
use seqkit::cli::{execute_command, Cli};
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(cli.verbose, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e.into(), cli.verbose),
    };
    init_logging(&config);
    debug!("Loaded settings: {:?}", config.settings);

    match execute_command(cli.command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => handle_fatal_error(e, config.verbose),
    }
}
