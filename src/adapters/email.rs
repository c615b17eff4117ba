use crate::config::EmailSettings;
use crate::core::templates::RenderedEmail;
use crate::domain::model::RecipientKind;
use crate::domain::ports::Transport;
use crate::utils::error::{MessengerError, Result};
use crate::utils::validation::validate_email_address;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// SMTP delivery for client-inquiry emails. One message per recipient
/// over a fresh TLS connection; the connection is dropped on every exit
/// path.
#[derive(Debug)]
pub struct EmailTransport {
    sender: Mailbox,
    username: String,
    password: String,
    smtp_host: String,
    smtp_port: u16,
}

impl EmailTransport {
    /// Fails with an authentication error when either credential is
    /// missing. Callers decide whether the credentials come from the
    /// environment or an explicit override.
    pub fn new(settings: &EmailSettings) -> Result<Self> {
        let (sender_address, password) = match (&settings.sender_address, &settings.password) {
            (Some(sender), Some(password)) => (sender.clone(), password.clone()),
            _ => {
                return Err(MessengerError::Authentication {
                    message: "Email credentials not provided".to_string(),
                })
            }
        };

        let sender: Mailbox = sender_address.parse()?;

        Ok(Self {
            sender,
            username: sender_address,
            password,
            smtp_host: settings.smtp_host.clone(),
            smtp_port: settings.smtp_port,
        })
    }
}

#[async_trait]
impl Transport for EmailTransport {
    type Message = RenderedEmail;

    fn channel(&self) -> &'static str {
        "email"
    }

    fn validate_recipient(&self, target: &str) -> bool {
        validate_email_address(target)
    }

    fn invalid_recipient_message(&self, target: &str) -> String {
        format!("Invalid email address: {}", target)
    }

    async fn deliver(
        &self,
        message: &Self::Message,
        target: &str,
        _kind: RecipientKind,
    ) -> Result<()> {
        let to: Mailbox = target.parse()?;

        let email = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.text.clone(),
                message.html.clone(),
            ))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.smtp_host)?
            .port(self.smtp_port)
            .credentials(Credentials::new(
                self.username.clone(),
                self.password.clone(),
            ))
            .build();

        mailer.send(email).await?;
        Ok(())
    }
}
