use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
#[cfg(test)]
use mockall::automock;

use crate::utils::lead_validation::ContactLead;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("database pool unavailable: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database write failed: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("could not encode lead: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("form endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The only failure a visitor ever sees. Forwarding problems never show up here.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("primary lead store unavailable: {0}")]
    PrimarySinkUnavailable(#[source] SinkError),
}

/// Authoritative storage for leads. Append only.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn persist(&self, lead: &ContactLead, submitted_at: DateTime<Utc>) -> Result<(), SinkError>;
}

/// Best effort copy of a lead to some other channel. No delivery guarantee.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LeadForwarder: Send + Sync {
    async fn forward(&self, lead: &ContactLead) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub submitted_at: DateTime<Utc>,
}

pub struct LeadIntake {
    store: Arc<dyn LeadStore>,
    forwarder: Arc<dyn LeadForwarder>,
}

impl LeadIntake {
    pub fn new(store: Arc<dyn LeadStore>, forwarder: Arc<dyn LeadForwarder>) -> Self {
        Self { store, forwarder }
    }

    /// Persists the lead and, only once that succeeded, hands a copy to the
    /// forwarder on a detached task. The result depends on the store alone.
    pub async fn submit(&self, lead: ContactLead) -> Result<SubmissionReceipt, IntakeError> {
        let submitted_at = Utc::now();

        if let Err(e) = self.store.persist(&lead, submitted_at).await {
            tracing::error!("Failed to store contact lead: {}", e);
            return Err(IntakeError::PrimarySinkUnavailable(e));
        }
        tracing::info!("Stored contact lead submitted at {}", submitted_at.to_rfc3339());

        let forwarder = self.forwarder.clone();
        tokio::spawn(async move {
            match forwarder.forward(&lead).await {
                Ok(()) => tracing::debug!("Forwarded contact lead"),
                Err(e) => tracing::warn!("Forwarding contact lead failed, dropping it: {}", e),
            }
        });

        Ok(SubmissionReceipt { submitted_at })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::lead_validation::tests::sample_lead;
    use std::future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn unavailable() -> SinkError {
        SinkError::Database(diesel::result::Error::BrokenTransactionManager)
    }

    /// Forwarder that counts calls, wakes the test once called and then
    /// either fails or never finishes.
    struct ProbeForwarder {
        calls: AtomicUsize,
        called: Notify,
        hang: bool,
    }

    impl ProbeForwarder {
        fn new(hang: bool) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                called: Notify::new(),
                hang,
            })
        }
    }

    #[async_trait]
    impl LeadForwarder for ProbeForwarder {
        async fn forward(&self, _lead: &ContactLead) -> Result<(), SinkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.called.notify_one();
            if self.hang {
                future::pending::<()>().await;
            }
            Err(unavailable())
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        stored: Mutex<Vec<(ContactLead, DateTime<Utc>)>>,
    }

    #[async_trait]
    impl LeadStore for RecordingStore {
        async fn persist(&self, lead: &ContactLead, submitted_at: DateTime<Utc>) -> Result<(), SinkError> {
            self.stored.lock().unwrap().push((lead.clone(), submitted_at));
            Ok(())
        }
    }

    #[tokio::test]
    async fn store_failure_is_reported_and_nothing_is_forwarded() {
        let mut store = MockLeadStore::new();
        store.expect_persist().times(1).returning(|_, _| Err(unavailable()));
        let mut forwarder = MockLeadForwarder::new();
        forwarder.expect_forward().never();

        let intake = LeadIntake::new(Arc::new(store), Arc::new(forwarder));
        let result = intake.submit(sample_lead()).await;

        assert!(matches!(result, Err(IntakeError::PrimarySinkUnavailable(_))));
    }

    #[tokio::test]
    async fn stores_the_lead_with_a_server_timestamp() {
        let store = Arc::new(RecordingStore::default());
        let forwarder = ProbeForwarder::new(false);
        let intake = LeadIntake::new(store.clone(), forwarder.clone());

        let before = Utc::now();
        let receipt = intake.submit(sample_lead()).await.unwrap();
        let after = Utc::now();

        let stored = store.stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].0, sample_lead());
        assert_eq!(stored[0].1, receipt.submitted_at);
        assert!(before <= receipt.submitted_at && receipt.submitted_at <= after);
    }

    #[tokio::test]
    async fn forwarding_failure_does_not_change_the_outcome() {
        let store = Arc::new(RecordingStore::default());
        let forwarder = ProbeForwarder::new(false);
        let intake = LeadIntake::new(store, forwarder.clone());

        assert!(intake.submit(sample_lead()).await.is_ok());

        tokio::time::timeout(Duration::from_secs(5), forwarder.called.notified())
            .await
            .expect("forwarder is dispatched after a successful store");
        assert_eq!(forwarder.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn success_does_not_wait_for_a_stalled_forwarder() {
        let store = Arc::new(RecordingStore::default());
        let forwarder = ProbeForwarder::new(true);
        let intake = LeadIntake::new(store, forwarder.clone());

        let receipt = tokio::time::timeout(Duration::from_secs(1), intake.submit(sample_lead()))
            .await
            .expect("submit returns without waiting on the forwarder");
        assert!(receipt.is_ok());

        tokio::time::timeout(Duration::from_secs(5), forwarder.called.notified())
            .await
            .expect("forwarder still gets the lead");
    }

    #[tokio::test]
    async fn each_submission_is_forwarded_once() {
        let store = Arc::new(RecordingStore::default());
        let forwarder = ProbeForwarder::new(false);
        let intake = LeadIntake::new(store.clone(), forwarder.clone());

        for _ in 0..3 {
            intake.submit(sample_lead()).await.unwrap();
            tokio::time::timeout(Duration::from_secs(5), forwarder.called.notified())
                .await
                .unwrap();
        }

        assert_eq!(store.stored.lock().unwrap().len(), 3);
        assert_eq!(forwarder.calls.load(Ordering::SeqCst), 3);
    }
}
