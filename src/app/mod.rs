// Application layer: the public messenger facades composing renderer,
// dispatcher and transport per channel.

pub mod email;
pub mod whatsapp;

pub use email::EmailMessenger;
pub use whatsapp::WhatsAppMessenger;
