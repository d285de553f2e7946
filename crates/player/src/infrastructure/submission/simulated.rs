//! Simulated enrollment backend
//!
//! Accepts every request after a fixed delay. Stands in for a real
//! endpoint; the page shows the same pending and confirmation states.

use crate::application::dto::{EnrollmentRequest, SubmissionReceipt};
use crate::ports::outbound::{EnrollmentSubmissionPort, SubmissionError};
use crate::state::Platform;

#[derive(Clone)]
pub struct SimulatedSubmitter {
    platform: Platform,
    delay_ms: u64,
}

impl SimulatedSubmitter {
    pub fn new(platform: Platform, delay_ms: u64) -> Self {
        Self { platform, delay_ms }
    }

    // The port future must be Send on native, so the timer is picked here
    // instead of going through the platform sleep provider.
    #[cfg(not(target_arch = "wasm32"))]
    async fn wait(&self) {
        tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
    }

    #[cfg(target_arch = "wasm32")]
    async fn wait(&self) {
        self.platform.sleep_ms(self.delay_ms).await;
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl EnrollmentSubmissionPort for SimulatedSubmitter {
    async fn submit(
        &self,
        request: EnrollmentRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        tracing::debug!(
            delay_ms = self.delay_ms,
            fields = request.fields.len(),
            "Simulating submission"
        );
        self.wait().await;
        Ok(SubmissionReceipt::issued_at_unix(self.platform.now_unix_secs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{create_mock_platform, MOCK_START_MILLIS};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_configured_delay() {
        let submitter = SimulatedSubmitter::new(create_mock_platform(), 2000);
        let start = tokio::time::Instant::now();

        let receipt = submitter
            .submit(EnrollmentRequest::default())
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(
            receipt.received_at.timestamp(),
            (MOCK_START_MILLIS / 1000) as i64
        );
    }

    #[tokio::test(start_paused = true)]
    async fn still_pending_before_delay() {
        let submitter = SimulatedSubmitter::new(create_mock_platform(), 2000);
        let pending = tokio::time::timeout(
            Duration::from_millis(1999),
            submitter.submit(EnrollmentRequest::default()),
        )
        .await;
        assert!(pending.is_err());
    }
}
