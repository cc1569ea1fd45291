use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::{CommandFactory, ErrorKind, Parser};

use crate::shared::config::DEFAULT_PLAYER;

/// Long options that may also be spelled with a single dash, e.g. `-user`.
const LONG_OPTIONS: [&str; 4] = ["version", "user", "token", "player"];

/// Push the track currently playing in iTunes, or any other AppleScript
/// friendly player, to your Atlassian HipChat status.
#[derive(Parser, Debug)]
#[clap(
    name = "itunes-hipchat-status",
    author = "Christian Vozar",
    disable_version_flag = true
)]
pub struct Opts {
    /// Display application version.
    #[clap(long = "version")]
    pub show_version: bool,

    /// Atlassian HipChat ID or Email of user to update.
    #[clap(long, default_value = "")]
    pub user: String,

    /// Atlassian HipChat API v2 authentication token.
    #[clap(long, default_value = "")]
    pub token: String,

    /// AppleScript-friendly name of player application.
    #[clap(long, default_value = DEFAULT_PLAYER)]
    pub player: String,
}

/// What a single invocation should do.
#[derive(Debug)]
pub enum Action {
    Help,
    Version(String),
    Update(Opts),
}

impl Action {
    /// Decide on an action from raw process arguments, program name included.
    ///
    /// No options at all is a request for help rather than an error, and
    /// `--version` wins over everything else. Like Go's `flag`, option
    /// parsing stops at the first bare argument or `--`, so `prog stray` and
    /// `prog --` both count as no options.
    pub fn from_args<I, T>(args: I) -> Result<Action, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = normalize_args(args);
        if !starts_with_option(&args) {
            return Ok(Action::Help);
        }

        let opts = match Opts::try_parse_from(args) {
            Ok(opts) => opts,
            Err(err) if err.kind() == ErrorKind::DisplayVersion => {
                return Ok(Action::Version(version_banner()));
            }
            Err(err) => return Err(err),
        };
        if opts.show_version {
            return Ok(Action::Version(version_banner()));
        }
        Ok(Action::Update(opts))
    }
}

pub fn version_banner() -> String {
    format!(
        "iTunes to Atlassian HipChat Status {}",
        env!("CARGO_PKG_VERSION")
    )
}

/// The option summary printed when no options are given.
pub fn help_text() -> Result<String> {
    let mut buffer = Vec::new();
    Opts::command()
        .write_help(&mut buffer)
        .context("could not render help")?;
    String::from_utf8(buffer).context("help is not valid UTF-8")
}

/// Rewrite single-dash long options (`-user bob`, `-token=x`) into the
/// double-dash form clap understands. Everything after `--` is left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut past_terminator = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || past_terminator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                past_terminator = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_long_option(rest) => {
                    OsString::from(format!("-{text}"))
                }
                _ => arg,
            }
        })
        .collect()
}

/// Whether the first argument after the program name is an option.
fn starts_with_option(args: &[OsString]) -> bool {
    match args.get(1).and_then(|arg| arg.to_str()) {
        Some("--") | Some("-") | None => false,
        Some(arg) => arg.starts_with('-'),
    }
}

fn is_long_option(arg: &str) -> bool {
    let name = arg.split_once('=').map_or(arg, |(name, _)| name);
    LONG_OPTIONS.contains(&name)
}
