use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One logged observation: the weight lifted for an exercise on a day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub weight: f64,
}

/// The whole store. Serialized transparently so the file is a single JSON
/// object keyed by exercise name, each value an array of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressData {
    pub exercises: BTreeMap<String, Vec<Record>>,
}

#[derive(Debug, Deserialize)]
pub struct LogRequest {
    pub exercise: String,
    pub date: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub last: f64,
    pub best: f64,
    /// `None` when there is no prior record to compare against; serialized
    /// as `null`, which is distinct from a delta of zero.
    pub delta: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub exercise: String,
    pub slug: String,
    pub records: Vec<Record>,
    pub summary: Option<ProgressSummary>,
}
