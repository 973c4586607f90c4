//! Gemini `generateContent` relay: try the configured primary endpoint,
//! then walk the candidate model/version matrix when it 404s or the
//! connection fails, stopping at the first 2xx answer.

use reqwest::StatusCode;
use serde_json::{Value, json};

use crate::config::Config;
use crate::error::AppError;
use crate::services::endpoints::{candidate_models, versioned_endpoints};

const SYSTEM_PROMPT: &str = "\
You are Netia AI, trained and created by Invation Studio.
You can speak and understand all languages and dialects.
You can adapt your style and tone to match the user, mimicking human-like conversation.
Be helpful, polite, friendly, and intelligent.
Always answer questions about your name with: \"My name is Netia AI, created by Invation Studio.\"
Provide examples, explanations, or context whenever possible to be as useful as possible.
If the user asks about humor, personality, or casual chat, respond naturally and human-like.
Always maintain Netia AI persona.";

/// Shown when no extraction strategy finds reply text.
const REPLY_NOT_FOUND: &str = "⚠️ لم يتم العثور على رد";

const BODY_PREVIEW_LIMIT: usize = 1200;

/// Outcome of a single delivery attempt. Network failures (including an
/// unreadable body) are captured so the probing loop can move on.
#[derive(Debug)]
enum Attempt {
    Http { status: StatusCode, body: String },
    Network(String),
}

impl Attempt {
    fn is_success(&self) -> bool {
        matches!(self, Attempt::Http { status, .. } if status.is_success())
    }

    // Fallback probing only starts when the endpoint is gone or unreachable.
    fn warrants_fallback(&self) -> bool {
        match self {
            Attempt::Http { status, .. } => *status == StatusCode::NOT_FOUND,
            Attempt::Network(_) => true,
        }
    }

    fn into_detail(self) -> String {
        match self {
            Attempt::Http { body, .. } => body,
            Attempt::Network(err) => err,
        }
    }
}

/// Forward one user message upstream and return the extracted reply text.
pub async fn relay_message(
    config: &Config,
    client: &reqwest::Client,
    message: &str,
) -> Result<String, AppError> {
    let payload = build_payload(message);

    tracing::info!(url = %config.api_url, "attempting primary Gemini endpoint");
    let mut attempt = try_post(client, &config.api_url, &payload, &config.api_key).await;

    if !attempt.is_success() && attempt.warrants_fallback() {
        tracing::warn!("primary endpoint failed (404 or network), probing fallbacks");
        'candidates: for model in candidate_models(&config.model, &config.api_url) {
            for endpoint in versioned_endpoints(&config.api_base, &model) {
                attempt = try_post(client, &endpoint, &payload, &config.api_key).await;
                if attempt.is_success() {
                    break 'candidates;
                }
            }
        }
    }

    let body = match attempt {
        Attempt::Http { status, body } if status.is_success() => body,
        failed => {
            tracing::error!("all Gemini endpoints failed");
            return Err(AppError::UpstreamFailure {
                details: failed.into_detail(),
            });
        }
    };

    // An empty 2xx body parses as {} and resolves to the placeholder reply,
    // not a parse failure.
    let raw = if body.is_empty() { "{}" } else { body.as_str() };
    let data: Value =
        serde_json::from_str(raw).map_err(|_| AppError::ParseFailure { body: body.clone() })?;

    tracing::debug!(response = %data, "Gemini response");
    Ok(extract_reply(&data))
}

// The API key travels as a header, never in the URL.
async fn try_post(client: &reqwest::Client, url: &str, payload: &Value, api_key: &str) -> Attempt {
    let mut request = client.post(url).json(payload);
    if !api_key.is_empty() {
        request = request.header("x-goog-api-key", api_key);
    }

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            match response.text().await {
                Ok(body) => {
                    tracing::debug!(
                        %url,
                        status = status.as_u16(),
                        body = %preview(&body),
                        "endpoint answered"
                    );
                    Attempt::Http { status, body }
                }
                Err(err) => {
                    tracing::warn!(%url, error = %err, "failed reading response body");
                    Attempt::Network(err.to_string())
                }
            }
        }
        Err(err) => {
            tracing::warn!(%url, error = %err, "network error");
            Attempt::Network(err.to_string())
        }
    }
}

// Persona instruction first, then the user message, both as bare parts.
fn build_payload(message: &str) -> Value {
    json!({
        "contents": [
            { "parts": [{ "text": SYSTEM_PROMPT }] },
            { "parts": [{ "text": message }] },
        ]
    })
}

/// Extraction strategies applied in order; first non-empty string wins.
const REPLY_STRATEGIES: [fn(&Value) -> Option<String>; 2] = [candidates_text, outputs_text];

fn extract_reply(data: &Value) -> String {
    REPLY_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(data).filter(|text| !text.is_empty()))
        .unwrap_or_else(|| REPLY_NOT_FOUND.to_string())
}

// candidates[0].content.parts[0].text, the generateContent shape.
fn candidates_text(data: &Value) -> Option<String> {
    data.pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

// First entry of outputs[0].content whose type mentions output_text, an
// alternate shape some deployments return.
fn outputs_text(data: &Value) -> Option<String> {
    data.pointer("/outputs/0/content")?
        .as_array()?
        .iter()
        .find(|entry| {
            entry
                .get("type")
                .and_then(Value::as_str)
                .is_some_and(|kind| kind.contains("output_text"))
        })
        .and_then(|entry| entry.get("text"))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_LIMIT).collect()
}
