use crate::domain::model::RecipientKind;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Channel-specific delivery mechanism behind the generic dispatcher.
///
/// `Message` is the channel's rendered form of a payload (an email has a
/// subject plus two bodies, a chat message is one string). The
/// dispatcher renders once per call and hands the same message to every
/// recipient.
#[async_trait]
pub trait Transport: Send + Sync {
    type Message: Send + Sync;

    /// Channel name used in logs and error messages.
    fn channel(&self) -> &'static str;

    /// Syntactic check applied to individual-mode recipients before a
    /// delivery attempt. Group identifiers are opaque and skip this.
    fn validate_recipient(&self, target: &str) -> bool;

    /// Error text recorded when `validate_recipient` rejects a target.
    fn invalid_recipient_message(&self, target: &str) -> String;

    /// One-shot, blocking delivery to a single recipient. Any error is
    /// captured by the dispatcher as that recipient's outcome; it never
    /// aborts the batch.
    async fn deliver(
        &self,
        message: &Self::Message,
        target: &str,
        kind: RecipientKind,
    ) -> Result<()>;
}

/// Low-level actions for driving the browser-based WhatsApp client.
/// The live implementation shells out to desktop automation tools; tests
/// substitute a recording fake.
pub trait AutomationDriver: Send + Sync {
    /// Put the rendered message on the system clipboard.
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;

    /// Open the chat window for a phone number or group identifier.
    fn open_chat(&self, target: &str, kind: RecipientKind) -> Result<()>;

    /// Paste the clipboard into the active chat and press enter.
    fn paste_and_send(&self) -> Result<()>;

    /// Close the active browser tab.
    fn close_tab(&self) -> Result<()>;
}
