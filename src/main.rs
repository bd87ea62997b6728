use std::{io, process::ExitCode};

use clap::Parser;
use html_checks::cli::{run, Opts};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    pretty_env_logger::init();

    let outcome = run(Opts::parse(), io::stdout()).await?;
    Ok(outcome.into())
}
