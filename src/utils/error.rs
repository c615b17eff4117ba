use thiserror::Error;

#[derive(Error, Debug)]
pub enum MessengerError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Authentication error: {message}")]
    Authentication { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Messaging error ({channel}): {message}")]
    Messaging {
        channel: &'static str,
        message: String,
    },

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Email build error: {0}")]
    Email(#[from] lettre::error::Error),

    #[error("Invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Settings file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl MessengerError {
    pub fn validation(message: impl Into<String>) -> Self {
        MessengerError::Validation {
            message: message.into(),
        }
    }

    pub fn messaging(channel: &'static str, message: impl Into<String>) -> Self {
        MessengerError::Messaging {
            channel,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MessengerError>;
