use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::report::ReportId;

/// Column-level view of a report after header detection.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedData {
    pub report_id: ReportId,
    pub headers: Vec<String>,
    pub row_count: u64,
    pub sample_rows: Vec<IndexMap<String, String>>,
    /// Column name to detected semantic type.
    pub detected_fields: IndexMap<String, String>,
    pub confidence: f64,
}
