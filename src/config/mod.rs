pub mod file;

use crate::utils::error::Result;
use crate::utils::validation::{validate_email_address, validate_range, Validate};
use crate::utils::error::MessengerError;
use serde::{Deserialize, Serialize};
use std::env;

/// SMTP channel settings. Credentials may come from the environment or
/// be set explicitly; the email messenger refuses construction without
/// both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub sender_address: Option<String>,
    pub password: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            sender_address: None,
            password: None,
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 465,
        }
    }
}

/// WhatsApp channel settings: timing of the UI-automation sequence and
/// the desktop commands it shells out to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsAppSettings {
    /// Seconds to wait for the web client to load after opening a chat.
    pub load_delay_secs: u64,
    /// Seconds between recipients within one batch.
    pub pacing_secs: u64,
    pub close_tab: bool,
    pub open_command: String,
    pub clipboard_command: String,
    pub keystroke_command: String,
}

impl Default for WhatsAppSettings {
    fn default() -> Self {
        Self {
            load_delay_secs: 5,
            pacing_secs: 2,
            close_tab: true,
            open_command: "xdg-open".to_string(),
            clipboard_command: "xclip".to_string(),
            keystroke_command: "xdotool".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub email: EmailSettings,
    pub whatsapp: WhatsAppSettings,
}

impl Settings {
    /// Reads settings from the process environment, falling back to
    /// defaults for anything unset or unparsable. Called once per
    /// messenger construction; never reloaded mid-run.
    pub fn from_env() -> Self {
        let mut settings = Settings::default();

        settings.email.sender_address = env::var("GMAIL_ADDRESS").ok().filter(|v| !v.is_empty());
        settings.email.password = env::var("GMAIL_APP_PASSWORD").ok().filter(|v| !v.is_empty());
        if let Ok(host) = env::var("SMTP_SERVER") {
            if !host.is_empty() {
                settings.email.smtp_host = host;
            }
        }
        if let Some(port) = env_parse::<u16>("SMTP_PORT") {
            settings.email.smtp_port = port;
        }

        if let Some(delay) = env_parse::<u64>("WHATSAPP_DELAY") {
            settings.whatsapp.load_delay_secs = delay;
        }
        if let Some(pacing) = env_parse::<u64>("WHATSAPP_PACING") {
            settings.whatsapp.pacing_secs = pacing;
        }
        if let Some(close_tab) = env_parse::<bool>("WHATSAPP_CLOSE_TAB") {
            settings.whatsapp.close_tab = close_tab;
        }

        settings
    }

    pub fn with_email_credentials(
        mut self,
        sender_address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.email.sender_address = Some(sender_address.into());
        self.email.password = Some(password.into());
        self
    }

    pub fn with_smtp_server(mut self, host: impl Into<String>, port: u16) -> Self {
        self.email.smtp_host = host.into();
        self.email.smtp_port = port;
        self
    }

    pub fn with_load_delay(mut self, secs: u64) -> Self {
        self.whatsapp.load_delay_secs = secs;
        self
    }

    pub fn with_pacing(mut self, secs: u64) -> Self {
        self.whatsapp.pacing_secs = secs;
        self
    }

    pub fn with_close_tab(mut self, close_tab: bool) -> Self {
        self.whatsapp.close_tab = close_tab;
        self
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Validate for EmailSettings {
    fn validate(&self) -> Result<()> {
        if let Some(sender) = &self.sender_address {
            if !validate_email_address(sender) {
                return Err(MessengerError::Configuration {
                    message: format!("Invalid sender address: {}", sender),
                });
            }
        }
        if self.smtp_host.trim().is_empty() {
            return Err(MessengerError::Configuration {
                message: "SMTP host cannot be empty".to_string(),
            });
        }
        validate_range("smtp_port", self.smtp_port, 1, u16::MAX)?;
        Ok(())
    }
}

impl Validate for WhatsAppSettings {
    fn validate(&self) -> Result<()> {
        validate_range("load_delay_secs", self.load_delay_secs, 1, 300)?;
        validate_range("pacing_secs", self.pacing_secs, 0, 300)?;
        if self.open_command.trim().is_empty()
            || self.clipboard_command.trim().is_empty()
            || self.keystroke_command.trim().is_empty()
        {
            return Err(MessengerError::Configuration {
                message: "Automation commands cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.email.validate()?;
        self.whatsapp.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.email.smtp_host, "smtp.gmail.com");
        assert_eq!(settings.email.smtp_port, 465);
        assert_eq!(settings.whatsapp.load_delay_secs, 5);
        assert_eq!(settings.whatsapp.pacing_secs, 2);
        assert!(settings.whatsapp.close_tab);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_email_credentials("sales@example.com", "app-password")
            .with_smtp_server("smtp.example.com", 587)
            .with_load_delay(8)
            .with_pacing(0)
            .with_close_tab(false);

        assert_eq!(settings.email.sender_address.as_deref(), Some("sales@example.com"));
        assert_eq!(settings.email.smtp_host, "smtp.example.com");
        assert_eq!(settings.email.smtp_port, 587);
        assert_eq!(settings.whatsapp.load_delay_secs, 8);
        assert_eq!(settings.whatsapp.pacing_secs, 0);
        assert!(!settings.whatsapp.close_tab);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.email.sender_address = Some("not-an-address".to_string());
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.whatsapp.load_delay_secs = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.whatsapp.clipboard_command = String::new();
        assert!(settings.validate().is_err());
    }
}
