// src/bin/cli.rs
use clap::Parser;
use draw2wiki::{cli, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();

    // A log we can't open shouldn't stop the conversion.
    if let Err(e) = logging::init(&logging::default_path(), args.verbose) {
        eprintln!("Logging disabled: {e}");
    }

    cli::run(args)?;
    Ok(())
}
