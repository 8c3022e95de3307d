#![recursion_limit = "256"]

mod api;
mod application;
mod cli;
mod data;
mod domain;
mod infra;
mod ml;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // A missing .env is fine; the environment and flags still apply
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("newscheck=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
