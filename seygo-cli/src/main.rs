//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use seygo_cli::{CliError, run};

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    match run() {
        Ok(()) => Ok(()),
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(eyre::Report::new(err).wrap_err("seygo failed")),
    }
}
