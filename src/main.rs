mod client;
mod commands;
mod player;
mod shared;

use std::{env, process::ExitCode};

use anyhow::Result;
use commands::{
    opts::{self, Action},
    update,
};
use shared::config::Config;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = Action::from_args(env::args_os()).unwrap_or_else(|err| err.exit());
    exit_code(run(action).await)
}

async fn run(action: Action) -> Result<()> {
    match action {
        Action::Help => print!("{}", opts::help_text()?),
        Action::Version(banner) => println!("{banner}"),
        Action::Update(opts) => update::run(Config::from_opts(opts)).await?,
    }
    Ok(())
}

/// Log a fatal error through tracing and turn it into a failing exit code.
fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
