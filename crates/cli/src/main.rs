use clap::Parser;
use shoe_sizes_cli::{args::Args, commands, config::Config, logging};
use std::process::ExitCode;

const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match try_main(&args) {
        Ok(code) => code,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("error: {e}");
            ExitCode::from(USAGE_ERROR)
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<ExitCode> {
    let config = Config::resolve(args)?;
    let outcome = commands::run(&args.command, &config)?;
    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
    Ok(outcome.exit_code())
}
