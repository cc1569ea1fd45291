use std::process::Stdio;

use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::track::{truncate_status, Track};

const APPLESCRIPT_RUNTIME: &str = "osascript";

/// Errors from asking the player for its current track.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The scripting runtime could not be started
    #[error("could not run {runtime}: {source}")]
    Spawn {
        runtime: String,
        #[source]
        source: std::io::Error,
    },

    /// The script ran but exited with a non-zero code
    #[error("player script failed with exit code {code}: {stderr}")]
    ScriptFailed { code: i32, stderr: String },

    /// The script printed something that is not UTF-8
    #[error("player script output is not valid UTF-8")]
    InvalidOutput(#[from] std::string::FromUtf8Error),
}

/// Reads the current track from a player through AppleScript.
#[derive(Clone, Debug)]
pub struct PlayerProbe {
    runtime: String,
    player: String,
}

impl PlayerProbe {
    pub fn new(player: impl Into<String>) -> Self {
        PlayerProbe {
            runtime: APPLESCRIPT_RUNTIME.to_string(),
            player: player.into(),
        }
    }

    /// Use a different executable in place of `osascript`.
    #[cfg(test)]
    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    /// The HipChat-ready status for whatever is playing.
    ///
    /// Never fails: a player that is closed, a missing runtime or a broken
    /// script all come out as an empty status.
    pub async fn status(&self) -> String {
        match self.current_track().await {
            Ok(Some(track)) => {
                info!(
                    title = %track.title,
                    artist = ?track.artist,
                    album = ?track.album,
                    "{} reported current track",
                    self.player
                );
                truncate_status(track.display().trim())
            }
            Ok(None) => {
                debug!("{} is not running or has no current track", self.player);
                String::new()
            }
            Err(err) => {
                warn!("{err}: Using empty status");
                String::new()
            }
        }
    }

    /// Run the player script and parse what it printed.
    pub async fn current_track(&self) -> Result<Option<Track>, ProbeError> {
        let script = player_script(&self.player);
        debug!(runtime = %self.runtime, "Running player script:\n{script}");

        let output = Command::new(&self.runtime)
            .arg("-e")
            .arg(&script)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| ProbeError::Spawn {
                runtime: self.runtime.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::ScriptFailed {
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        Ok(Track::from_script_output(stdout.trim()))
    }
}

/// AppleScript printing the current track's name, artist and album on
/// separate lines, or nothing when the player is not running.
pub fn player_script(player: &str) -> String {
    let player = escape(player);
    format!(
        r#"if application "{player}" is running then
tell application "{player}"
set trackname to name of current track
set artistname to artist of current track
set albumname to album of current track

if artistname is missing value then
set artistname to ""
end if
if albumname is missing value then
set albumname to ""
end if

return trackname & linefeed & artistname & linefeed & albumname
end tell
end if"#
    )
}

/// Quote a value for use inside an AppleScript string literal.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
