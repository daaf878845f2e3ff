use chrono::NaiveDate;
use derive_more::{Display, From};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::network::CardNetwork;

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Display,
    From,
    Deserialize,
    Serialize,
)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReportId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Stage of the card lifecycle a report covers.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    Deserialize,
    Serialize,
)]
pub enum ReportType {
    Authorization,
    Settlement,
    Clearing,
    #[default]
    Unknown,
}

impl ReportType {
    /// Keyword classifier over the lowercased filename. The first matching
    /// group wins, so `auth_settlement.csv` is an authorization report.
    #[must_use]
    pub fn infer_from_filename(filename: &str) -> Self {
        let filename = filename.to_lowercase();
        let contains_any =
            |words: &[&str]| words.iter().any(|word| filename.contains(word));
        if contains_any(&["auth", "approve"]) {
            Self::Authorization
        } else if contains_any(&["settle", "batch"]) {
            Self::Settlement
        } else if contains_any(&["clear"]) {
            Self::Clearing
        } else {
            Self::Unknown
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    strum::Display,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportStatus {
    Uploaded,
    Processing,
    Parsed,
    #[default]
    Normalized,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A parsed statement or report as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: ReportId,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub network: CardNetwork,
    pub row_count: u64,
    pub date_range: DateRange,
    #[serde(default)]
    pub status: ReportStatus,
    /// Any further template fields, copied through untouched.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope {
    pub report: Report,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportList {
    pub reports: Vec<Report>,
}
