//! LINE Reply API client.

use anyhow::Result;
use reqwest::Client;
use serde::Serialize;
use tracing::info;

use crate::render::LineMessage;

const REPLY_ENDPOINT: &str = "https://api.line.me/v2/bot/message/reply";

#[derive(Serialize)]
struct ReplyBody<'a> {
    #[serde(rename = "replyToken")]
    reply_token: &'a str,
    messages: &'a [LineMessage],
}

/// Thin client for sending replies through the LINE Messaging API.
#[derive(Clone)]
pub struct LineClient {
    http: Client,
    access_token: String,
}

impl LineClient {
    pub fn new(access_token: String) -> Self {
        Self { http: Client::new(), access_token }
    }

    /// Reply to an inbound event. Reply tokens are single-use and short-lived,
    /// so there is nothing to retry on failure.
    pub async fn reply(&self, reply_token: &str, messages: &[LineMessage]) -> Result<()> {
        self.http
            .post(REPLY_ENDPOINT)
            .bearer_auth(&self.access_token)
            .json(&ReplyBody { reply_token, messages })
            .send()
            .await?
            .error_for_status()?;
        info!("[LINE] Replied with {} message(s)", messages.len());
        Ok(())
    }
}
