//! Trigger DTOs

use serde::{Deserialize, Serialize};

use crate::domain::run::RunDescriptor;

/// Body of a successful bucket trigger call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerResponse {
    pub data: TriggerData,
}

/// Runs started by the trigger, in the order the service reported them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerData {
    #[serde(default)]
    pub runs_started: Option<u32>,
    #[serde(default)]
    pub runs_failed: Option<u32>,
    #[serde(default)]
    pub runs_total: Option<u32>,
    pub runs: Vec<RunDescriptor>,
}

impl TriggerResponse {
    /// Extract the run descriptors, preserving response order
    pub fn into_runs(self) -> Vec<RunDescriptor> {
        self.data.runs
    }
}
