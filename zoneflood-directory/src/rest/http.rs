//! HTTP plumbing shared by every directory call.
//!
//! One transport path for all verbs: send the request, classify transport
//! failures (timeout, 429, upstream 5xx), then hand the body to the
//! envelope parser. Error-code mapping happens here so the trait impl in
//! `directory.rs` only deals in URLs and payloads.

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{DirectoryError, Result};

use super::{ApiEnvelope, ErrorContext, RestZoneDirectory, error::map_api_error};

/// Maximum number of body bytes echoed into debug logs.
const LOG_BODY_LIMIT: usize = 256;

impl RestZoneDirectory {
    /// GET `path` and extract the envelope's `result`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &ErrorContext,
    ) -> Result<T> {
        let builder = self.client.get(self.url(path));
        let body = self.send(builder, "GET", path).await?;
        parse_result(&body, context)
    }

    /// POST `body` to `path` and extract the envelope's `result`.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: &ErrorContext,
    ) -> Result<T> {
        let builder = self.client.post(self.url(path)).json(body);
        let body = self.send(builder, "POST", path).await?;
        parse_result(&body, context)
    }

    /// POST `body` to `path`, accepting an envelope with no `result`.
    pub(crate) async fn post_ack<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        context: &ErrorContext,
    ) -> Result<()> {
        let builder = self.client.post(self.url(path)).json(body);
        let body = self.send(builder, "POST", path).await?;
        parse_ack(&body, context)
    }

    /// DELETE `path`, accepting an envelope with no `result`.
    pub(crate) async fn delete_ack(&self, path: &str, context: &ErrorContext) -> Result<()> {
        let builder = self.client.delete(self.url(path));
        let body = self.send(builder, "DELETE", path).await?;
        parse_ack(&body, context)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a prepared request and return the response body.
    ///
    /// Transport classification: reqwest timeouts become [`Timeout`],
    /// HTTP 429 becomes [`RateLimited`] (honoring `Retry-After`), and
    /// 502-504 become [`NetworkError`]. Everything else is left to the
    /// envelope parser, since the directory reports failures in the body
    /// regardless of status.
    ///
    /// [`Timeout`]: DirectoryError::Timeout
    /// [`RateLimited`]: DirectoryError::RateLimited
    /// [`NetworkError`]: DirectoryError::NetworkError
    async fn send(&self, builder: RequestBuilder, method: &str, path: &str) -> Result<String> {
        log::debug!("{method} {path}");

        let response = builder
            .header("Authorization", format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DirectoryError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    DirectoryError::NetworkError {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        log::debug!("{method} {path} -> {status}");

        // Read Retry-After before the body consumes the response.
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status == 429 {
            let body = response.text().await.unwrap_or_default();
            log::warn!("{method} {path} rate limited, retry_after={retry_after:?}");
            return Err(DirectoryError::RateLimited {
                retry_after,
                raw_message: Some(body),
            });
        }

        if matches!(status, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::NetworkError {
                detail: format!("HTTP {status}: {body}"),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DirectoryError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response body: {}", truncate_body(&body));

        Ok(body)
    }
}

/// Parse an envelope and require its `result` payload.
fn parse_result<T: DeserializeOwned>(body: &str, context: &ErrorContext) -> Result<T> {
    let envelope: ApiEnvelope<T> = decode_envelope(body)?;
    if !envelope.success {
        let (code, message) = envelope.first_error();
        return Err(map_api_error(code, message, context));
    }
    envelope.result.ok_or_else(|| DirectoryError::ParseError {
        detail: "response envelope is missing its result".to_string(),
    })
}

/// Parse an envelope where only the success flag matters.
fn parse_ack(body: &str, context: &ErrorContext) -> Result<()> {
    let envelope: ApiEnvelope<serde_json::Value> = decode_envelope(body)?;
    if !envelope.success {
        let (code, message) = envelope.first_error();
        return Err(map_api_error(code, message, context));
    }
    Ok(())
}

fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("Envelope parse failed: {e}");
        log::error!("Raw response: {}", truncate_body(body));
        DirectoryError::ParseError {
            detail: e.to_string(),
        }
    })
}

/// Cap a response body for logging, keeping the cut on a char boundary.
fn truncate_body(body: &str) -> String {
    if body.len() <= LOG_BODY_LIMIT {
        return body.to_string();
    }
    let cut = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= LOG_BODY_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... ({} bytes total)", &body[..cut], body.len())
}
