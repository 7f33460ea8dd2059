use anyhow::Context;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;

/// Operator mailbox that receives every lead. Overridable per deployment.
static LEAD_INBOX: Lazy<String> = Lazy::new(|| {
    std::env::var("LEAD_INBOX").unwrap_or_else(|_| "info@sinisterconsulting.com".to_string())
});

/// A fully assembled operator notification, ready to hand to the provider.
pub struct OutgoingEmail {
    pub subject: String,
    pub text: String,
}

/// Seam between the submission endpoint and the email-delivery provider.
/// The endpoint treats the provider as a black box: one send call, which
/// either returns or fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadMailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()>;
}

pub struct ResendMailer {
    client: Resend,
}

impl ResendMailer {
    pub fn from_env() -> Self {
        let api_key = std::env::var("RESEND_API_KEY")
            .expect("RESEND_API_KEY must be set");
        Self {
            client: Resend::new(&api_key),
        }
    }
}

#[async_trait]
impl LeadMailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()> {
        let inbox = LEAD_INBOX.as_str();
        let options = CreateEmailBaseOptions::new(inbox, [inbox], &email.subject)
            .with_text(&email.text);

        self.client
            .emails
            .send(options)
            .await
            .context("resend send failed")?;

        tracing::info!("Lead email dispatched to {}", inbox);
        Ok(())
    }
}
