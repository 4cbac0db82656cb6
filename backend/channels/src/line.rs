/// LINE channel adapter for lensbot.
///
/// Receives Messaging API webhooks, verifies the `x-line-signature` HMAC,
/// and answers text events with help, the task quick-reply panel, or a
/// classification result card.
///
/// Required env vars (read by the cli config):
///   LINE_CHANNEL_SECRET        — used to verify x-line-signature HMAC
///   LINE_CHANNEL_ACCESS_TOKEN  — bearer token for the Reply API
///   LINE_WEBHOOK_PATH          — path to mount the webhook (default: /webhooks/line)
use crate::parse::{has_known_task, parse_message};
use crate::render::{self, LineMessage};
use crate::send::LineClient;
use crate::ChannelAdapter;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Router,
};
use lensbot_core::classify;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{error, info, warn};

static HELP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(ヘルプ|help|？|\?|使い方)$").unwrap());

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct LineConfig {
    pub channel_secret: String,
    pub channel_access_token: String,
    pub webhook_path: String,
}

// ---------------------------------------------------------------------------
// Axum state
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct AppState {
    channel_secret: String,
    client: LineClient,
}

// ---------------------------------------------------------------------------
// LINE wire types
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
struct LineWebhook {
    #[serde(default)]
    events: Vec<LineEvent>,
}

#[derive(Deserialize, Debug)]
struct LineEvent {
    #[serde(rename = "type")]
    event_type: String,
    message: Option<LineEventMessage>,
    source: Option<LineSource>,
    #[serde(rename = "replyToken")]
    reply_token: Option<String>,
}

#[derive(Deserialize, Debug)]
struct LineEventMessage {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
struct LineSource {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Adapter struct
// ---------------------------------------------------------------------------

pub struct LineAdapter {
    config: LineConfig,
    client: LineClient,
}

impl LineAdapter {
    pub fn new(config: LineConfig) -> Self {
        let client = LineClient::new(config.channel_access_token.clone());
        Self { config, client }
    }
}

impl ChannelAdapter for LineAdapter {
    fn name(&self) -> &str {
        "line"
    }

    fn build_router(&self) -> Router {
        let state = AppState {
            channel_secret: self.config.channel_secret.clone(),
            client: self.client.clone(),
        };
        Router::new()
            .route(&self.config.webhook_path, post(handle_line_webhook))
            .with_state(state)
    }
}

// ---------------------------------------------------------------------------
// Webhook handler
// ---------------------------------------------------------------------------

async fn handle_line_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    // 1. Verify LINE signature (base64 HMAC-SHA256 over the raw body)
    if !verify_line_signature(&headers, &body, &state.channel_secret) {
        warn!("[LINE] Invalid signature — rejecting webhook");
        return (StatusCode::UNAUTHORIZED, "invalid_signature").into_response();
    }

    // 2. Parse JSON
    let payload: LineWebhook = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(err) => {
            error!("[LINE] Failed to parse webhook payload: {}", err);
            return (StatusCode::BAD_REQUEST, "bad_json").into_response();
        }
    };

    // 3. Handle each text message event; skipped events still get a 200.
    for event in payload.events {
        if event.event_type != "message" {
            continue;
        }
        let Some(message) = &event.message else { continue };
        if message.kind != "text" {
            continue;
        }
        let Some(reply_token) = &event.reply_token else { continue };
        let text = message.text.as_deref().unwrap_or("").trim();
        let user = event
            .source
            .as_ref()
            .and_then(|s| s.user_id.as_deref())
            .unwrap_or("unknown_user");
        info!("[LINE] Message from {}: {}", user, text);

        let messages = respond_to(text);
        if let Err(err) = state.client.reply(reply_token, &messages).await {
            error!("[LINE] Reply delivery failed: {}", err);
        }
    }

    (StatusCode::OK, "ok").into_response()
}

/// Pick the reply for one inbound text message.
fn respond_to(text: &str) -> Vec<LineMessage> {
    if HELP_PATTERN.is_match(text) {
        return vec![render::help_message()];
    }
    if text == "診断" || text == "診断開始" {
        return vec![render::intro_message()];
    }

    let input = parse_message(text);
    if !has_known_task(&input) {
        return vec![render::example_message()];
    }

    let result = classify(&input);
    vec![render::result_message(&input, &result)]
}

/// Verify the `x-line-signature` header: base64-encoded HMAC-SHA256 of the
/// raw request body, keyed with the channel secret.
fn verify_line_signature(headers: &HeaderMap, body: &[u8], channel_secret: &str) -> bool {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use hmac::{Hmac, Mac};
    use sha2::Sha256;

    let sig = match headers.get("x-line-signature").and_then(|v| v.to_str().ok()) {
        Some(s) => s.to_owned(),
        None => return false,
    };

    let mut mac = match Hmac::<Sha256>::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(body);
    let computed = STANDARD.encode(mac.finalize().into_bytes());
    computed == sig
}
