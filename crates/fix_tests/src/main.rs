// crates/fix_tests/src/main.rs

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use fix_tests::{run_fixup, FixupConfig};
use fixup_defaults::SUCCESS_MESSAGE;

fn cli() -> Command {
    Command::new("fix_tests")
        .version("0.1.0")
        .about("Renames camelCase pass keys to snake_case in the second admin summaries describe block")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let verbose = matches.get_flag("verbose");

    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let config = FixupConfig::default();
    log::debug!("Using configuration: {:?}", config);
    run_fixup(&config)?;

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
