//! SMS notification provider implementation.
//!
//! Submits messages to a Twilio-compatible REST gateway
//! (`POST /2010-04-01/Accounts/{sid}/Messages.json` with form-encoded
//! `To`/`From`/`Body` and HTTP basic auth).

use std::time::Instant;

use async_trait::async_trait;

use super::provider::{NotificationProvider, OutboundMessage, ProviderReceipt};
use crate::config::SmsConfig;
use crate::error::{AppError, AppResult};

/// SMS notification provider
///
/// The HTTP client is injected at construction and shared process-wide;
/// reqwest clients are cheap handles over a pooled connector, so cloning one
/// into each provider is the intended usage.
#[derive(Clone)]
pub struct SmsProvider {
    client: reqwest::Client,
    config: SmsConfig,
}

impl SmsProvider {
    /// Creates a new SMS provider from a shared HTTP client and gateway
    /// credentials.
    pub fn new(client: reqwest::Client, config: SmsConfig) -> Self {
        Self { client, config }
    }

    /// Fails if gateway credentials were never configured.
    ///
    /// Credentials are process-wide settings loaded at startup; their absence
    /// is a configuration error, not a per-request one.
    fn ensure_configured(&self) -> AppResult<()> {
        if self.config.account_sid.is_empty() || self.config.auth_token.is_empty() {
            return Err(AppError::Configuration {
                key: "sms.account_sid".to_string(),
                source: anyhow::anyhow!("SMS gateway credentials are not set"),
            });
        }
        Ok(())
    }

    /// Message submission endpoint for the configured account.
    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[async_trait]
impl NotificationProvider for SmsProvider {
    /// Sends one SMS through the gateway.
    ///
    /// On acceptance the receipt carries the gateway's message SID. Transport
    /// failures (rejected number, auth failure, network error) come back as
    /// `AppError::Provider` and are contained by the dispatch orchestrator.
    async fn send(&self, message: &OutboundMessage) -> AppResult<ProviderReceipt> {
        let start = Instant::now();

        self.ensure_configured()?;

        let from = message.from.as_deref().ok_or_else(|| AppError::Provider {
            provider: "sms",
            message: "record carries no sender number, which the gateway requires".to_string(),
        })?;

        let params = [
            ("To", message.to.as_str()),
            ("From", from),
            ("Body", message.body.as_str()),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await;

        let duration_ms = start.elapsed().as_millis() as u64;

        match response {
            Ok(resp) if resp.status().is_success() => {
                let message_id = resp
                    .json::<serde_json::Value>()
                    .await
                    .ok()
                    .and_then(|v| v.get("sid").and_then(|s| s.as_str()).map(String::from));

                Ok(ProviderReceipt {
                    delivered: true,
                    message_id,
                    duration_ms,
                })
            }
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                Err(AppError::Provider {
                    provider: "sms",
                    message: format!("gateway returned {status}: {body}"),
                })
            }
            Err(e) => Err(AppError::Provider {
                provider: "sms",
                message: e.to_string(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        "sms"
    }
}
