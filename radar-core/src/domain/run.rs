//! Run domain types

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::outcome::RunOutcome;

/// One execution of one test within a bucket
///
/// Produced by the trigger call. Identity is the triple
/// (`bucket_key`, `test_id`, `test_run_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunDescriptor {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub environment_id: Option<String>,
    pub bucket_key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub agent: Option<String>,
    #[serde(default)]
    pub test_name: Option<String>,
    pub test_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub environment_name: Option<String>,
    #[serde(default)]
    pub test_url: Option<String>,
    #[serde(default)]
    pub test_run_url: Option<String>,
    pub test_run_id: String,
}

impl RunDescriptor {
    /// A run known only by its identity, e.g. when looked up directly
    pub fn from_identity(
        bucket_key: impl Into<String>,
        test_id: impl Into<String>,
        test_run_id: impl Into<String>,
    ) -> Self {
        Self {
            status: None,
            environment_id: None,
            bucket_key: bucket_key.into(),
            variables: Default::default(),
            agent: None,
            test_name: None,
            test_id: test_id.into(),
            url: None,
            region: None,
            environment_name: None,
            test_url: None,
            test_run_url: None,
            test_run_id: test_run_id.into(),
        }
    }

    /// Path of the result detail resource for this run
    pub fn result_path(&self) -> String {
        format!(
            "/buckets/{}/tests/{}/results/{}",
            self.bucket_key, self.test_id, self.test_run_id
        )
    }

    /// Display name, falling back to the test id when the service sent none
    pub fn display_name(&self) -> &str {
        self.test_name.as_deref().unwrap_or(&self.test_id)
    }
}

/// Outcome fields of a run, as returned by the result detail call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDetail {
    #[serde(default)]
    pub started_at: Option<f64>,
    /// `None` while the run is still working
    #[serde(default)]
    pub finished_at: Option<f64>,
    pub result: RunOutcome,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requests_executed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assertions_defined: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assertions_passed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub assertions_failed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scripts_defined: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scripts_passed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scripts_failed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables_defined: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables_passed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables_failed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requests: Vec<RequestOutcome>,
}

/// Outcome of a single request step inside a run
///
/// Every field is nullable: the service reports placeholders while the
/// run is working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestOutcome {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub assertions_defined: Option<u32>,
    #[serde(default)]
    pub assertions_passed: Option<u32>,
    #[serde(default)]
    pub assertions_failed: Option<u32>,
    #[serde(default)]
    pub scripts_defined: Option<u32>,
    #[serde(default)]
    pub scripts_passed: Option<u32>,
    #[serde(default)]
    pub scripts_failed: Option<u32>,
    #[serde(default)]
    pub variables_defined: Option<u32>,
    #[serde(default)]
    pub variables_passed: Option<u32>,
    #[serde(default)]
    pub variables_failed: Option<u32>,
    #[serde(default)]
    pub assertions: Option<serde_json::Value>,
    #[serde(default)]
    pub scripts: Option<serde_json::Value>,
    #[serde(default)]
    pub variables: Option<serde_json::Value>,
}

/// A run together with the latest detail fetched for it
///
/// Each poll builds a fresh value; the descriptor (and so the identity)
/// is carried over unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    #[serde(flatten)]
    pub run: RunDescriptor,
    #[serde(flatten)]
    pub detail: ResultDetail,
}

impl RunResult {
    pub fn new(run: RunDescriptor, detail: ResultDetail) -> Self {
        Self { run, detail }
    }

    /// Same run, newer detail
    pub fn refreshed(self, detail: ResultDetail) -> Self {
        Self {
            run: self.run,
            detail,
        }
    }

    pub fn result(&self) -> &RunOutcome {
        &self.detail.result
    }

    pub fn is_working(&self) -> bool {
        self.detail.result.is_working()
    }

    pub fn started_at_utc(&self) -> Option<DateTime<Utc>> {
        self.detail.started_at.and_then(epoch_to_utc)
    }

    pub fn finished_at_utc(&self) -> Option<DateTime<Utc>> {
        self.detail.finished_at.and_then(epoch_to_utc)
    }

    /// Wall time of the run, once both ends are known
    pub fn duration(&self) -> Option<TimeDelta> {
        Some(self.finished_at_utc()? - self.started_at_utc()?)
    }
}

fn epoch_to_utc(seconds: f64) -> Option<DateTime<Utc>> {
    let whole = seconds.trunc() as i64;
    let nanos = ((seconds - seconds.trunc()) * 1e9).round() as u32;
    DateTime::from_timestamp(whole, nanos.min(999_999_999))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
