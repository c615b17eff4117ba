use crate::config::WhatsAppSettings;
use crate::domain::model::RecipientKind;
use crate::domain::ports::{AutomationDriver, Transport};
use crate::utils::error::{MessengerError, Result};
use crate::utils::validation::validate_phone_number;
use async_trait::async_trait;
use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;

/// Delivers chat messages by automating the browser-based WhatsApp
/// client: copy the body to the clipboard, open the chat, wait for the
/// page to load, paste and send. Authentication lives in the browser
/// session; this transport holds no credential.
///
/// Only one chat window can be automated at a time, which is why the
/// dispatcher runs strictly sequentially.
pub struct WhatsAppTransport<D: AutomationDriver> {
    driver: D,
    load_delay: Duration,
    close_tab: bool,
}

impl<D: AutomationDriver> WhatsAppTransport<D> {
    pub fn new(driver: D, settings: &WhatsAppSettings) -> Self {
        Self {
            driver,
            load_delay: Duration::from_secs(settings.load_delay_secs),
            close_tab: settings.close_tab,
        }
    }
}

#[async_trait]
impl<D: AutomationDriver> Transport for WhatsAppTransport<D> {
    type Message = String;

    fn channel(&self) -> &'static str {
        "whatsapp"
    }

    fn validate_recipient(&self, target: &str) -> bool {
        validate_phone_number(target)
    }

    fn invalid_recipient_message(&self, target: &str) -> String {
        format!("Invalid phone number format: {}", target)
    }

    async fn deliver(
        &self,
        message: &Self::Message,
        target: &str,
        kind: RecipientKind,
    ) -> Result<()> {
        self.driver.copy_to_clipboard(message)?;
        self.driver.open_chat(target, kind)?;

        // Give the web client time to open the chat before pasting.
        tokio::time::sleep(self.load_delay).await;
        self.driver.paste_and_send()?;
        tokio::time::sleep(Duration::from_secs(1)).await;

        if self.close_tab {
            self.driver.close_tab()?;
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
        Ok(())
    }
}

/// Live driver: shells out to the desktop automation tools configured in
/// [`WhatsAppSettings`] (defaults: `xdg-open`, `xclip`, `xdotool`).
/// Requires a running graphical session with WhatsApp Web signed in.
pub struct DesktopAutomationDriver {
    open_command: String,
    clipboard_command: String,
    keystroke_command: String,
}

impl DesktopAutomationDriver {
    pub fn new(settings: &WhatsAppSettings) -> Self {
        Self {
            open_command: settings.open_command.clone(),
            clipboard_command: settings.clipboard_command.clone(),
            keystroke_command: settings.keystroke_command.clone(),
        }
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let output = Command::new(program).args(args).output().map_err(|e| {
            MessengerError::messaging(
                "whatsapp",
                format!("failed to launch automation command '{}': {}", program, e),
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                "no output".to_string()
            } else {
                stderr
            };
            return Err(MessengerError::messaging(
                "whatsapp",
                format!("automation command '{}' failed: {}", program, detail),
            ));
        }
        Ok(())
    }

    fn chat_url(target: &str, kind: RecipientKind) -> String {
        match kind {
            RecipientKind::Individual => format!(
                "https://web.whatsapp.com/send?phone={}",
                target.replace('+', "%2B")
            ),
            RecipientKind::Group => format!("https://web.whatsapp.com/accept?code={}", target),
        }
    }
}

impl AutomationDriver for DesktopAutomationDriver {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.clipboard_command)
            .args(["-selection", "clipboard"])
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                MessengerError::messaging(
                    "whatsapp",
                    format!(
                        "failed to launch clipboard command '{}': {}",
                        self.clipboard_command, e
                    ),
                )
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
        }
        let status = child.wait()?;
        if !status.success() {
            return Err(MessengerError::messaging(
                "whatsapp",
                format!("clipboard command '{}' failed", self.clipboard_command),
            ));
        }
        Ok(())
    }

    fn open_chat(&self, target: &str, kind: RecipientKind) -> Result<()> {
        let url = Self::chat_url(target, kind);
        self.run(&self.open_command, &[url.as_str()])
    }

    fn paste_and_send(&self) -> Result<()> {
        self.run(&self.keystroke_command, &["key", "--clearmodifiers", "ctrl+v"])?;
        self.run(&self.keystroke_command, &["key", "Return"])
    }

    fn close_tab(&self) -> Result<()> {
        self.run(&self.keystroke_command, &["key", "--clearmodifiers", "ctrl+w"])
    }
}
