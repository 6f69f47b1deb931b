//! Result detail DTOs

use serde::{Deserialize, Serialize};

use crate::domain::run::{ResultDetail, RunDescriptor, RunResult};

/// Body of a successful result detail call
///
/// The `data` object also repeats identity fields of the run; those are
/// ignored in favour of the descriptor the caller already holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultDetailResponse {
    pub data: ResultDetail,
}

impl ResultDetailResponse {
    /// Merge the fetched outcome onto a known run
    pub fn into_result(self, run: RunDescriptor) -> RunResult {
        RunResult::new(run, self.data)
    }
}
