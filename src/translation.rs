use crate::codec;
use crate::config::Config;
use crate::i18n::Locale;
use anyhow::{Context, Result};
use reqwest::header::USER_AGENT;
use serde_json::Value;
use tracing::{debug, warn};

/// Client identifier expected by the public translate endpoint
const CLIENT_ID: &str = "gtx";

/// The endpoint rejects requests without a browser-like agent
const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// Result of translating one chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// Segments returned by the backend, not necessarily as many as were sent
    Translated(Vec<String>),
    /// The chunk could not be translated; the reason is for logging only
    Fallback(String),
}

impl ChunkOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Align this outcome with the chunk it was produced for.
    ///
    /// A fallback yields the original chunk. A short response is padded with
    /// the originals at the missing positions, a long one is truncated.
    pub fn repair(self, chunk: &[String]) -> Vec<String> {
        match self {
            Self::Fallback(_) => chunk.to_vec(),
            Self::Translated(mut segments) => {
                if segments.len() < chunk.len() {
                    segments.extend_from_slice(&chunk[segments.len()..]);
                } else {
                    segments.truncate(chunk.len());
                }
                segments
            }
        }
    }
}

/// Translate one chunk from the source locale to `target`.
///
/// Never fails: network errors, error statuses, unexpected response shapes
/// and unencodable chunks all come back as [`ChunkOutcome::Fallback`].
pub async fn translate_chunk(
    client: &reqwest::Client,
    config: &Config,
    chunk: &[String],
    target: Locale,
) -> ChunkOutcome {
    if chunk.is_empty() {
        return ChunkOutcome::Translated(Vec::new());
    }

    match request_translation(client, config, chunk, target).await {
        Ok(segments) => {
            if segments.len() != chunk.len() {
                debug!(
                    "Translation to {} returned {} segments for {} strings",
                    target.code(),
                    segments.len(),
                    chunk.len()
                );
            }
            ChunkOutcome::Translated(segments)
        }
        Err(e) => {
            warn!("Error translating to {}: {:#}", target.code(), e);
            ChunkOutcome::Fallback(format!("{:#}", e))
        }
    }
}

async fn request_translation(
    client: &reqwest::Client,
    config: &Config,
    chunk: &[String],
    target: Locale,
) -> Result<Vec<String>> {
    let payload = codec::encode(chunk).context("Chunk cannot be encoded")?;
    let url = build_request_url(&config.translate_api_url, target, &payload);
    debug!(
        "Requesting translation of {} strings to {} ({} bytes)",
        chunk.len(),
        target.code(),
        url.len()
    );

    let response = client
        .get(&url)
        .header(USER_AGENT, BROWSER_USER_AGENT)
        .send()
        .await
        .context("Failed to send translation request")?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        anyhow::bail!("Translation API error ({}): {}", status, body);
    }

    let body = response
        .text()
        .await
        .context("Failed to read translation response")?;
    let parsed: Value =
        serde_json::from_str(&body).context("Failed to parse translation response")?;

    let text = extract_translated_text(&parsed)?;
    Ok(codec::decode(&text))
}

/// Query layout of the endpoint: client, sl, tl, dt, then the escaped payload.
///
/// Locale codes come from the registry and need no escaping.
fn build_request_url(base: &str, target: Locale, encoded_payload: &str) -> String {
    format!(
        "{}?client={}&sl={}&tl={}&dt=t&q={}",
        base,
        CLIENT_ID,
        Locale::source().code(),
        target.code(),
        encoded_payload
    )
}

/// Concatenate the first element of every segment in `response[0]`.
fn extract_translated_text(response: &Value) -> Result<String> {
    let segments = response
        .get(0)
        .and_then(Value::as_array)
        .context("Translation response has no segment list")?;

    let mut text = String::new();
    for segment in segments {
        let fragment = segment
            .get(0)
            .and_then(Value::as_str)
            .context("Translation segment has no text fragment")?;
        text.push_str(fragment);
    }
    Ok(text)
}
