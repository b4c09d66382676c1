mod args;

use args::{ArgsError, Config, USAGE};
use mdfix_rom::{Image, RomError};
use std::{env, io, process};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum FixError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Rom(#[from] RomError),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = env::args().skip(1).collect::<Vec<_>>();

    if args.is_empty() {
        println!("{}", USAGE);
        process::exit(-1);
    }

    if let Err(e) = run(args) {
        println!("Error: {}", e);
        process::exit(-1);
    }
}

fn run(args: Vec<String>) -> Result<(), FixError> {
    let config = Config::parse(args)?;

    debug!(?config, "parsed arguments");

    let mut image = Image::load(&config.input_path, config.padding(), config.pad_byte)?;
    let repair = image.repair().map_err(RomError::from)?;

    image.save(&config.input_path)?;

    if !config.quiet {
        println!("{}", repair.report());
    }

    Ok(())
}
