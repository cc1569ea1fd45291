use tracing::warn;

use crate::commands::opts::Opts;

/// Atlassian HipChat API endpoint for requests.
pub const HIPCHAT_API_URL: &str = "https://api.hipchat.com";
/// Atlassian HipChat API version to utilize.
pub const HIPCHAT_API_VERSION: &str = "v2";

pub const DEFAULT_PLAYER: &str = "iTunes";

/// Everything a single status update needs, resolved from the command line.
#[derive(Clone, Debug)]
pub struct Config {
    pub user: String,
    pub token: String,
    pub player: String,
    pub api_url: String,
}

impl Config {
    pub fn from_opts(opts: Opts) -> Self {
        // Empty values are passed through; HipChat rejects them downstream.
        if opts.user.is_empty() {
            warn!("No user given, the HipChat request will most likely fail");
        }
        if opts.token.is_empty() {
            warn!("No token given, the HipChat request will most likely fail");
        }

        Config {
            user: opts.user,
            token: opts.token,
            player: opts.player,
            api_url: HIPCHAT_API_URL.to_string(),
        }
    }
}
