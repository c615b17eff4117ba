use crate::adapters::EmailTransport;
use crate::config::{EmailSettings, Settings};
use crate::core::dispatcher::Dispatcher;
use crate::core::templates::render_client_inquiry;
use crate::domain::model::{ClientInquiry, DispatchReport, RecipientKind};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;

/// Sends client-inquiry emails to one or more agents. Construction
/// fails with an authentication error when no credentials are available;
/// callers must rebuild with valid settings.
#[derive(Debug)]
pub struct EmailMessenger {
    dispatcher: Dispatcher<EmailTransport>,
}

impl EmailMessenger {
    pub fn new(settings: &EmailSettings) -> Result<Self> {
        settings.validate()?;
        let transport = EmailTransport::new(settings)?;
        // SMTP needs no inter-recipient throttling.
        Ok(Self {
            dispatcher: Dispatcher::new(transport, Duration::ZERO),
        })
    }

    /// Reads `GMAIL_ADDRESS` / `GMAIL_APP_PASSWORD` and the SMTP server
    /// settings from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(&Settings::from_env().email)
    }

    /// Renders the inquiry once and fans it out to every recipient,
    /// returning the per-recipient report.
    pub async fn send_message(
        &self,
        inquiry: &ClientInquiry,
        recipients: &[String],
        kind: RecipientKind,
    ) -> Result<DispatchReport> {
        let rendered = render_client_inquiry(inquiry);
        self.dispatcher.dispatch(&rendered, recipients, kind).await
    }

    pub async fn send_to_individuals(
        &self,
        inquiry: &ClientInquiry,
        recipients: &[String],
    ) -> Result<DispatchReport> {
        self.send_message(inquiry, recipients, RecipientKind::Individual)
            .await
    }

    /// Sends to a single distribution-list address. The address is
    /// treated as opaque and skips individual-address validation.
    pub async fn send_to_group(
        &self,
        inquiry: &ClientInquiry,
        group_address: &str,
    ) -> Result<DispatchReport> {
        self.send_message(
            inquiry,
            &[group_address.to_string()],
            RecipientKind::Group,
        )
        .await
    }
}
