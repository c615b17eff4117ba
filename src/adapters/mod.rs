// Adapters layer: concrete transports talking to external systems
// (SMTP submission, desktop UI automation).

pub mod email;
pub mod whatsapp;

pub use email::EmailTransport;
pub use whatsapp::{DesktopAutomationDriver, WhatsAppTransport};
