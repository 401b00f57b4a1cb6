#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names
)]

use anyhow::Result;
use clap::Parser;
use tagmatch::config::Config;
use tagmatch::observability::init_tracing;

mod app;
mod cli;

use cli::commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_or_init_at(path)?,
        None => Config::load_or_init()?,
    };

    // Initialize logging
    init_tracing(&config.observability)?;

    app::dispatch::dispatch(cli, config)
}
