use crate::domain::model::{DeliveryOutcome, DispatchEntry, DispatchReport, RecipientKind};
use crate::domain::ports::Transport;
use crate::utils::error::{MessengerError, Result};
use std::time::Duration;

/// Fans one rendered message out across a recipient batch, sequentially,
/// and aggregates per-recipient outcomes into a [`DispatchReport`].
///
/// Validation failures before the loop (empty batch) are returned as
/// errors; everything that goes wrong for a single recipient is captured
/// in that recipient's outcome and never aborts the batch.
#[derive(Debug)]
pub struct Dispatcher<T: Transport> {
    transport: T,
    pacing: Duration,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, pacing: Duration) -> Self {
        Self { transport, pacing }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn dispatch(
        &self,
        message: &T::Message,
        recipients: &[String],
        kind: RecipientKind,
    ) -> Result<DispatchReport> {
        if recipients.is_empty() {
            return Err(MessengerError::validation(
                "At least one recipient must be provided",
            ));
        }

        let channel = self.transport.channel();
        let mut results: Vec<DispatchEntry> = Vec::with_capacity(recipients.len());

        for (i, recipient) in recipients.iter().enumerate() {
            tracing::info!(
                "Sending {} message to {} ({}/{})",
                channel,
                recipient,
                i + 1,
                recipients.len()
            );

            let outcome = self.attempt(message, recipient, kind).await;
            match &outcome.error {
                None => tracing::info!("{} message sent successfully to {}", channel, recipient),
                Some(error) => {
                    tracing::error!("Failed to send {} message to {}: {}", channel, recipient, error)
                }
            }
            upsert(&mut results, recipient, outcome);

            // Throttle between attempts so the underlying transport is
            // not hammered; nothing to wait for after the last one.
            if i + 1 < recipients.len() && !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        let report = DispatchReport::from_entries(results);
        tracing::info!(
            "{} sending complete: {}/{} successful",
            channel,
            report.statistics.successful,
            report.statistics.total
        );
        Ok(report)
    }

    async fn attempt(
        &self,
        message: &T::Message,
        recipient: &str,
        kind: RecipientKind,
    ) -> DeliveryOutcome {
        if recipient.trim().is_empty() {
            return DeliveryOutcome::failed(kind, "Recipient cannot be empty");
        }

        if kind == RecipientKind::Individual && !self.transport.validate_recipient(recipient) {
            return DeliveryOutcome::failed(kind, self.transport.invalid_recipient_message(recipient));
        }

        match self.transport.deliver(message, recipient, kind).await {
            Ok(()) => DeliveryOutcome::succeeded(kind),
            Err(e) => DeliveryOutcome::failed(kind, e.to_string()),
        }
    }
}

/// Last write wins for duplicate recipients; the first occurrence keeps
/// its position so entry order still mirrors input order.
fn upsert(results: &mut Vec<DispatchEntry>, recipient: &str, outcome: DeliveryOutcome) {
    match results.iter_mut().find(|e| e.recipient == recipient) {
        Some(entry) => entry.outcome = outcome,
        None => results.push(DispatchEntry {
            recipient: recipient.to_string(),
            outcome,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_phone_number;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scripted transport: succeeds unless the target is listed in
    /// `fail_for`, and records every delivery attempt.
    #[derive(Default)]
    struct FakeTransport {
        fail_for: Vec<String>,
        delivered: Mutex<Vec<String>>,
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl Transport for FakeTransport {
        type Message = String;

        fn channel(&self) -> &'static str {
            "fake"
        }

        fn validate_recipient(&self, target: &str) -> bool {
            validate_phone_number(target)
        }

        fn invalid_recipient_message(&self, target: &str) -> String {
            format!("Invalid phone number format: {}", target)
        }

        async fn deliver(
            &self,
            _message: &Self::Message,
            target: &str,
            _kind: RecipientKind,
        ) -> Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail_for.iter().any(|t| t == target) {
                return Err(MessengerError::messaging("fake", "transport refused"));
            }
            self.delivered.lock().unwrap().push(target.to_string());
            Ok(())
        }
    }

    fn dispatcher(transport: FakeTransport) -> Dispatcher<FakeTransport> {
        Dispatcher::new(transport, Duration::ZERO)
    }

    fn recipients(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_empty_recipient_list_is_rejected_before_any_attempt() {
        let d = dispatcher(FakeTransport::default());
        let err = d
            .dispatch(&"hello".to_string(), &[], RecipientKind::Individual)
            .await
            .unwrap_err();
        assert!(matches!(err, MessengerError::Validation { .. }));
        assert_eq!(d.transport().attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mixed_batch_statistics() {
        let d = dispatcher(FakeTransport::default());
        let batch = recipients(&[
            "+201129563904",
            "invalid-phone",
            "+201003869531",
            "",
            "+201555666777",
        ]);

        let report = d
            .dispatch(&"hello".to_string(), &batch, RecipientKind::Individual)
            .await
            .unwrap();

        assert_eq!(report.statistics.total, 5);
        assert_eq!(report.statistics.successful, 3);
        assert_eq!(report.statistics.failed, 2);
        assert_eq!(report.statistics.success_rate, 60.0);

        let invalid = report.outcome_for("invalid-phone").unwrap();
        assert!(!invalid.success);
        assert_eq!(
            invalid.error.as_deref(),
            Some("Invalid phone number format: invalid-phone")
        );
        let empty = report.outcome_for("").unwrap();
        assert_eq!(empty.error.as_deref(), Some("Recipient cannot be empty"));

        // Malformed entries never reached the transport.
        assert_eq!(d.transport().attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_the_batch() {
        let transport = FakeTransport {
            fail_for: vec!["+201003869531".to_string()],
            ..Default::default()
        };
        let d = dispatcher(transport);
        let batch = recipients(&["+201129563904", "+201003869531", "+201555666777"]);

        let report = d
            .dispatch(&"hello".to_string(), &batch, RecipientKind::Individual)
            .await
            .unwrap();

        assert_eq!(report.statistics.total, 3);
        assert_eq!(report.statistics.successful, 2);
        assert_eq!(report.statistics.failed, 1);
        let failed = report.outcome_for("+201003869531").unwrap();
        assert!(failed.error.as_deref().unwrap().contains("transport refused"));

        let delivered = d.transport().delivered.lock().unwrap().clone();
        assert_eq!(delivered, vec!["+201129563904", "+201555666777"]);
    }

    #[tokio::test]
    async fn test_group_mode_skips_format_validation_but_not_empty_check() {
        let d = dispatcher(FakeTransport::default());
        let batch = recipients(&["SalesTeamInviteCode123", "  "]);

        let report = d
            .dispatch(&"hello".to_string(), &batch, RecipientKind::Group)
            .await
            .unwrap();

        assert_eq!(report.statistics.successful, 1);
        assert_eq!(report.statistics.failed, 1);
        let ok = report.outcome_for("SalesTeamInviteCode123").unwrap();
        assert!(ok.success);
        assert_eq!(ok.kind, Some(RecipientKind::Group));
        assert!(ok.timestamp.is_some());
    }

    #[tokio::test]
    async fn test_group_mode_accepts_many_recipients() {
        let d = dispatcher(FakeTransport::default());
        let batch = recipients(&["GroupA", "GroupB", "GroupC"]);

        let report = d
            .dispatch(&"hello".to_string(), &batch, RecipientKind::Group)
            .await
            .unwrap();
        assert_eq!(report.statistics.total, 3);
        assert_eq!(report.statistics.successful, 3);
        assert_eq!(report.statistics.success_rate, 100.0);
    }

    #[tokio::test]
    async fn test_duplicate_recipient_overwrites_keeping_first_position() {
        let transport = FakeTransport {
            fail_for: vec!["+201129563904".to_string()],
            ..Default::default()
        };
        let d = Dispatcher::new(transport, Duration::ZERO);
        let batch = recipients(&["+201129563904", "+201003869531", "+201129563904"]);

        let report = d
            .dispatch(&"hello".to_string(), &batch, RecipientKind::Individual)
            .await
            .unwrap();

        assert_eq!(report.statistics.total, 2);
        assert_eq!(report.results[0].recipient, "+201129563904");
        assert_eq!(report.results[1].recipient, "+201003869531");
        assert_eq!(
            report.statistics.successful + report.statistics.failed,
            report.statistics.total
        );
    }
}
