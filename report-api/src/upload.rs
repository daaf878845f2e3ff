use std::sync::Arc;

use serde::Deserialize;

use crate::{
    catalog::ReportCatalog,
    types::{
        network::CardNetwork,
        report::{Report, ReportId, ReportType},
    },
    utils::hash::rolling_hash,
};

pub const DEFAULT_FILENAME: &str = "uploaded_report";
const UPLOAD_ID_PREFIX: &str = "upl_";

/// Body of `POST /reports/parse-upload`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub network_hint: Option<CardNetwork>,
}

/// Turns an uploaded filename into a report by relabeling the closest
/// catalog template. Pure: the same request always yields the same report.
#[derive(Debug, Clone)]
pub struct UploadParser {
    catalog: Arc<ReportCatalog>,
}

impl UploadParser {
    #[must_use]
    pub fn new(catalog: Arc<ReportCatalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn parse(&self, request: ParseRequest) -> Report {
        let filename = request
            .filename
            .filter(|filename| !filename.is_empty())
            .unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        let network = request
            .network_hint
            .unwrap_or_else(|| CardNetwork::infer_from_filename(&filename));
        let report_type = ReportType::infer_from_filename(&filename);
        let template = self.catalog.find_template(report_type, network);

        let mut report = template.clone();
        report.id = upload_id(&filename, network, report_type);
        report.name =
            format!("Parsed Upload — {} ({network})", basename(&filename));
        tracing::debug!(
            filename = %filename,
            %network,
            %report_type,
            template = %template.id,
            id = %report.id,
            "parsed upload"
        );
        report
    }
}

/// `upl_` followed by at most eight lowercase hex digits of the rolling
/// hash of `<filename>:<network>:<type>`. Not zero padded.
#[must_use]
pub fn upload_id(
    filename: &str,
    network: CardNetwork,
    report_type: ReportType,
) -> ReportId {
    let hash = rolling_hash(&format!("{filename}:{network}:{report_type}"));
    let hex = format!("{hash:x}");
    let digits = &hex[..hex.len().min(8)];
    ReportId::new(format!("{UPLOAD_ID_PREFIX}{digits}"))
}

/// Strips the final extension: everything from the last `.` onwards.
fn basename(filename: &str) -> &str {
    filename
        .rfind('.')
        .map_or(filename, |index| &filename[..index])
}
