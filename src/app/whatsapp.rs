use crate::adapters::{DesktopAutomationDriver, WhatsAppTransport};
use crate::config::{Settings, WhatsAppSettings};
use crate::core::dispatcher::Dispatcher;
use crate::core::formatters::customer_interest_message;
use crate::domain::model::{CustomerInterest, DispatchReport, RecipientKind};
use crate::domain::ports::AutomationDriver;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::time::Duration;

/// Sends customer-interest messages through the automated WhatsApp web
/// client. Holds no credential; the browser session must already be
/// signed in.
pub struct WhatsAppMessenger<D: AutomationDriver = DesktopAutomationDriver> {
    dispatcher: Dispatcher<WhatsAppTransport<D>>,
}

impl WhatsAppMessenger<DesktopAutomationDriver> {
    pub fn new(settings: &WhatsAppSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::with_driver(
            DesktopAutomationDriver::new(settings),
            settings,
        ))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&Settings::from_env().whatsapp)
    }
}

impl<D: AutomationDriver> WhatsAppMessenger<D> {
    /// Builds the messenger over a substitute driver. Used by tests and
    /// by callers embedding their own automation backend.
    pub fn with_driver(driver: D, settings: &WhatsAppSettings) -> Self {
        let transport = WhatsAppTransport::new(driver, settings);
        Self {
            dispatcher: Dispatcher::new(transport, Duration::from_secs(settings.pacing_secs)),
        }
    }

    /// Renders the interest message once and fans it out to every
    /// recipient. Group mode accepts one or many group identifiers, the
    /// same as individual mode.
    pub async fn send_message(
        &self,
        interest: &CustomerInterest,
        recipients: &[String],
        kind: RecipientKind,
    ) -> Result<DispatchReport> {
        let message = customer_interest_message(interest);
        self.dispatcher.dispatch(&message, recipients, kind).await
    }

    pub async fn send_to_individuals(
        &self,
        interest: &CustomerInterest,
        phone_numbers: &[String],
    ) -> Result<DispatchReport> {
        self.send_message(interest, phone_numbers, RecipientKind::Individual)
            .await
    }

    pub async fn send_to_group(
        &self,
        interest: &CustomerInterest,
        group_id: &str,
    ) -> Result<DispatchReport> {
        self.send_message(interest, &[group_id.to_string()], RecipientKind::Group)
            .await
    }
}
