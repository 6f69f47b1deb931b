//! Run outcome

use serde::{Deserialize, Serialize};

/// The `result` of a test run as reported by the service
///
/// The set of values is owned by the service, so anything that is not one
/// of the known states is kept verbatim in [`RunOutcome::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RunOutcome {
    Working,
    Pass,
    Fail,
    Other(String),
}

impl RunOutcome {
    /// Wire form of the outcome
    pub fn as_str(&self) -> &str {
        match self {
            RunOutcome::Working => "working",
            RunOutcome::Pass => "pass",
            RunOutcome::Fail => "fail",
            RunOutcome::Other(value) => value,
        }
    }

    /// `working` is the only non-terminal state
    pub fn is_working(&self) -> bool {
        matches!(self, RunOutcome::Working)
    }

    /// Exact, case-sensitive comparison on the wire form
    pub fn matches(&self, expected: &RunOutcome) -> bool {
        self.as_str() == expected.as_str()
    }
}

impl From<&str> for RunOutcome {
    fn from(value: &str) -> Self {
        match value {
            "working" => RunOutcome::Working,
            "pass" => RunOutcome::Pass,
            "fail" => RunOutcome::Fail,
            other => RunOutcome::Other(other.to_string()),
        }
    }
}

impl From<String> for RunOutcome {
    fn from(value: String) -> Self {
        match value.as_str() {
            "working" | "pass" | "fail" => RunOutcome::from(value.as_str()),
            _ => RunOutcome::Other(value),
        }
    }
}

impl From<RunOutcome> for String {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for RunOutcome {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RunOutcome::from(s))
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
