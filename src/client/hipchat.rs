use anyhow::{anyhow, bail, Context, Result};
use reqwest::{header::CONTENT_TYPE, Response, Url};
use tracing::{debug, info};

use super::model::HipChatUser;
use crate::shared::config::HIPCHAT_API_VERSION;

/// Reads and writes HipChat user records over the v2 REST API.
pub struct HipChatClient {
    base_url: String,
    http: reqwest::Client,
}

impl HipChatClient {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        HipChatClient {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// `{base}/v2/user/{user}?auth_token={token}`
    pub fn user_url(&self, user: &str, token: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid HipChat API url: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("HipChat API url cannot have a path: {}", self.base_url))?
            .pop_if_empty()
            .extend([HIPCHAT_API_VERSION, "user", user]);
        url.query_pairs_mut().append_pair("auth_token", token);
        Ok(url)
    }

    /// Fetch the user record HipChat currently has for `user`.
    pub async fn fetch_user(&self, user: &str, token: &str) -> Result<HipChatUser> {
        info!("Fetching HipChat user {user}");
        let response = self
            .http
            .get(self.user_url(user, token)?)
            .send()
            .await
            .with_context(|| format!("could not fetch HipChat user {user}"))?;
        let response = ensure_success(response, "fetching", user).await?;

        let record = response
            .json::<HipChatUser>()
            .await
            .with_context(|| format!("could not decode HipChat user {user}"))?;
        debug!("{:#?}", record);
        Ok(record)
    }

    /// Write `record` back as the user record for `user`.
    pub async fn update_user(&self, record: &HipChatUser, user: &str, token: &str) -> Result<()> {
        let payload =
            serde_json::to_vec(record).context("could not serialize HipChat user")?;
        info!(status = %record.presence.status, show = %record.presence.show, "Updating HipChat user {user}");

        let response = self
            .http
            .put(self.user_url(user, token)?)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .with_context(|| format!("could not update HipChat user {user}"))?;
        ensure_success(response, "updating", user).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response, action: &str, user: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    bail!("HipChat answered {status} when {action} user {user}: {body}")
}
