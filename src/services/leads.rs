use anyhow::Context;
use async_trait::async_trait;

/// User-facing message for any failed submission, whatever the cause.
pub const LEAD_FAILURE_MESSAGE: &str =
    "Could not send. Please try again or contact via WhatsApp.";

#[async_trait]
pub trait LeadSender: Send + Sync {
    /// Posts the collected field values to the lead endpoint. Any
    /// non-success outcome is an error; no retry.
    async fn send_lead(&self, endpoint: &str, payload: &serde_json::Value) -> anyhow::Result<()>;
}

pub struct HttpLeadSender {
    client: reqwest::Client,
}

impl HttpLeadSender {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpLeadSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadSender for HttpLeadSender {
    async fn send_lead(&self, endpoint: &str, payload: &serde_json::Value) -> anyhow::Result<()> {
        self.client
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .context("failed to reach lead endpoint")?
            .error_for_status()
            .context("lead endpoint returned error")?;

        Ok(())
    }
}
