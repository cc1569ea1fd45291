use anyhow::Result;
use tracing::{debug, info};

use crate::{
    client::hipchat::HipChatClient, player::applescript::PlayerProbe,
    shared::config::Config,
};

/// Read what is playing and push it to the user's HipChat status.
pub async fn run(config: Config) -> Result<()> {
    let probe = PlayerProbe::new(config.player.clone());
    let client = HipChatClient::with_base_url(config.api_url.clone());
    update_status(&probe, &client, &config).await
}

/// Probe, fetch, merge, write; in that order and nothing concurrently.
///
/// A failing probe only empties the status. Any HipChat failure aborts the
/// update before or during the write.
pub async fn update_status(
    probe: &PlayerProbe,
    client: &HipChatClient,
    config: &Config,
) -> Result<()> {
    let status = probe.status().await;
    debug!("Player status: {status:?}");

    let mut user = client.fetch_user(&config.user, &config.token).await?;
    user.merge_status(status);
    client.update_user(&user, &config.user, &config.token).await?;

    info!("HipChat status of {} updated", config.user);
    Ok(())
}
