use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::errors::Errors;

/// Serializable summary of a completed invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationReport {
    pub id: Uuid,
    pub service: String,
    pub success: bool,
    pub errors: Errors,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: i64,
}

impl InvocationReport {
    pub fn to_json(&self) -> crate::core::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
