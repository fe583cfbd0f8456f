//! HTTP adapter for the remote reply service.
//!
//! POSTs `{ "message": ... }` and expects `{ "response": ... }` back.
//! Uses browser `fetch()` via gloo-net for WASM compatibility; the request
//! races a gloo-timers timeout.

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use chat_core::ports::{ReplyPort, ReplyRequest, ReplyResponse};
use chat_types::{ChatError, Result, config::ChatConfig};

pub struct HttpReplyService {
    endpoint: String,
    timeout_ms: u64,
}

impl HttpReplyService {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            endpoint: config.reply_endpoint.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, message: &str) -> Result<ReplyResponse> {
        let body = ReplyRequest {
            message: message.to_string(),
        };

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        decode_reply(status, &text)
    }
}

#[async_trait(?Send)]
impl ReplyPort for HttpReplyService {
    async fn reply(&self, message: &str) -> Result<ReplyResponse> {
        let timeout_ms = u32::try_from(self.timeout_ms).unwrap_or(u32::MAX);
        let request = Box::pin(self.post(message));
        let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ChatError::Timeout(self.timeout_ms)),
        }
    }
}

/// Turn a raw HTTP status and body into a reply.
///
/// Non-2xx statuses and bodies that are not a JSON object are failures.
/// An object without a `response` string decodes to `response: None`.
pub fn decode_reply(status: u16, body: &str) -> Result<ReplyResponse> {
    if !(200..300).contains(&status) {
        return Err(ChatError::Reply(format!("HTTP {}: {}", status, body)));
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(ChatError::Reply("Reply body is not a JSON object".to_string()));
    }

    let response = value
        .get("response")
        .and_then(|v| v.as_str())
        .map(String::from);
    if response.is_none() {
        if let Some(err) = value.get("error").and_then(|v| v.as_str()) {
            log::warn!("Reply service reported: {}", err);
        }
    }
    Ok(ReplyResponse { response })
}
