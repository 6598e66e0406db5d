use clap::Parser;
use dem_settings::cli::Cli;
use dem_settings::commands;
use dem_settings::error::{ErrorFormatter, RichError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    match commands::dispatch(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let rich = RichError::from(err);
            eprintln!("{}", ErrorFormatter::new(verbose).format(&rich));
            std::process::exit(1);
        }
    }
}
