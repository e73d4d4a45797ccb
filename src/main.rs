use std::io;

use anyhow::Result;
use clap::Parser;
use log::debug;

use sss2_discriminators::config::Args;
use sss2_discriminators::write_report;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    debug!("args: {:?}", args);

    let config = args.into_config()?;
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &config)?;

    Ok(())
}
