use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    network::CardNetwork,
    report::{ReportId, ReportStatus, ReportType},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FileType {
    Pdf,
    Csv,
    Xlsx,
    Unknown,
}

/// What the service knows about an uploaded file before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub report_id: ReportId,
    pub filename: String,
    pub file_type: FileType,
    pub file_size: usize,
    /// Lowercase hex SHA-256 of the file contents.
    pub checksum: String,
    pub upload_time: DateTime<Utc>,
    pub status: ReportStatus,
    pub network: CardNetwork,
    pub report_type: ReportType,
}
