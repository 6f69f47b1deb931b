//! Bucket poller
//!
//! Triggers a bucket, polls every run until none is working, then
//! compares each run's result with the expected outcome.

use std::sync::Arc;
use std::time::Duration;

use radar_core::domain::outcome::RunOutcome;
use radar_core::domain::run::{RunDescriptor, RunResult};
use tracing::{debug, info, warn};

use crate::api::RadarApi;
use crate::error::{ClientError, Result};

/// How long to wait between fetch rounds and how many rounds to allow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Sleep between fetch rounds
    pub interval: Duration,
    /// Number of refresh rounds after the initial fetch; 0 means a run
    /// still working after the first fetch is an immediate timeout
    pub retry_limit: u32,
}

impl PollPolicy {
    pub fn new(interval: Duration, retry_limit: u32) -> Self {
        Self {
            interval,
            retry_limit,
        }
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), 60)
    }
}

/// Final evaluation of a bucket run
#[derive(Debug, Clone, PartialEq)]
pub struct BucketVerdict {
    /// Outcome every run was expected to have
    pub expected: RunOutcome,
    /// Whether every run matched `expected`
    pub passed: bool,
    /// Results in trigger order
    pub results: Vec<RunResult>,
}

impl BucketVerdict {
    /// Compare every result with the expected outcome
    ///
    /// An empty result list passes.
    pub fn evaluate(expected: RunOutcome, results: Vec<RunResult>) -> Self {
        let passed = results.iter().all(|r| r.result().matches(&expected));
        Self {
            expected,
            passed,
            results,
        }
    }

    /// Runs whose result differs from the expected outcome
    pub fn mismatches(&self) -> impl Iterator<Item = &RunResult> {
        self.results
            .iter()
            .filter(|r| !r.result().matches(&self.expected))
    }

    /// One `name: result - url` line per mismatching run
    pub fn report_lines(&self) -> Vec<String> {
        self.mismatches()
            .map(|r| {
                format!(
                    "{}: {} - {}",
                    r.run.display_name(),
                    r.result(),
                    r.run.url.as_deref().unwrap_or_default()
                )
            })
            .collect()
    }

    pub fn summary(&self) -> String {
        if self.passed {
            format!(
                "Tests finished working. Success! All results were: {}",
                self.expected
            )
        } else {
            "Tests finished working. Bucket returned unexpected test results:".to_string()
        }
    }

    pub fn into_parts(self) -> (bool, Vec<RunResult>) {
        (self.passed, self.results)
    }
}

/// Drives the trigger-and-poll loop against a [`RadarApi`]
pub struct BucketPoller {
    api: Arc<dyn RadarApi>,
    policy: PollPolicy,
}

impl BucketPoller {
    /// Creates a new bucket poller
    pub fn new(api: Arc<dyn RadarApi>, policy: PollPolicy) -> Self {
        Self { api, policy }
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    /// Trigger a bucket, wait for every run to finish and evaluate the results
    ///
    /// # Errors
    /// - [`ClientError::MissingTriggerUrl`] if `trigger_url` is blank
    /// - [`ClientError::TimedOut`] if runs are still working after the retry limit
    /// - any transport or API error, which aborts the whole operation
    pub async fn poll_and_evaluate(
        &self,
        trigger_url: &str,
        expected: &RunOutcome,
    ) -> Result<BucketVerdict> {
        if trigger_url.trim().is_empty() {
            return Err(ClientError::MissingTriggerUrl);
        }

        let runs = self.api.trigger(trigger_url).await?;
        info!("Bucket triggered {} run(s)", runs.len());

        let results = self.wait_for_results(&runs).await?;
        let verdict = BucketVerdict::evaluate(expected.clone(), results);

        if verdict.passed {
            info!("{}", verdict.summary());
        } else {
            warn!("{}", verdict.summary());
            for line in verdict.report_lines() {
                warn!("{}", line);
            }
        }

        Ok(verdict)
    }

    /// Fetch every run until none is working
    ///
    /// Every round re-fetches all runs, not just the ones still working,
    /// so the returned list always mirrors the trigger order.
    pub async fn wait_for_results(&self, runs: &[RunDescriptor]) -> Result<Vec<RunResult>> {
        let mut attempt: u32 = 1;
        let mut results = self.fetch_all(runs).await?;

        while results.iter().any(RunResult::is_working) {
            info!("Waiting for tests to finish working, attempt {}", attempt);

            if attempt > self.policy.retry_limit {
                return Err(ClientError::TimedOut { attempts: attempt });
            }

            tokio::time::sleep(self.policy.interval).await;
            attempt += 1;
            results = self.fetch_all(runs).await?;
        }

        debug!("All runs finished after {} fetch round(s)", attempt);
        Ok(results)
    }

    async fn fetch_all(&self, runs: &[RunDescriptor]) -> Result<Vec<RunResult>> {
        let mut results = Vec::with_capacity(runs.len());
        for run in runs {
            results.push(self.api.fetch_result(run).await?);
        }
        Ok(results)
    }
}
