//! Inspection of uploaded files: format sniffing and content checksums.

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::{
    error::invalid_req::InvalidRequestError,
    types::{
        metadata::{FileType, UploadMetadata},
        network::CardNetwork,
        report::{ReportStatus, ReportType},
    },
    upload::upload_id,
};

/// Filename recorded when the multipart part carries none.
pub const UNNAMED_UPLOAD: &str = "unknown";
/// Bytes scanned for a comma when deciding whether content is CSV.
const CSV_SNIFF_LEN: usize = 1000;

/// Content signatures take precedence over the extension: PDF magic, then
/// any zip container (xlsx is one), then CSV by extension or a comma near
/// the start, then the bare extension.
#[must_use]
pub fn detect_file_type(filename: &str, content: &[u8]) -> FileType {
    if infer::archive::is_pdf(content) {
        return FileType::Pdf;
    }
    if infer::archive::is_zip(content) || infer::doc::is_xlsx(content) {
        return FileType::Xlsx;
    }
    let extension = filename
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_lowercase())
        .unwrap_or_default();
    let head = &content[..content.len().min(CSV_SNIFF_LEN)];
    if extension == "csv" || head.contains(&b',') {
        return FileType::Csv;
    }
    match extension.as_str() {
        "xlsx" => FileType::Xlsx,
        "pdf" => FileType::Pdf,
        _ => FileType::Unknown,
    }
}

#[must_use]
pub fn checksum(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

/// Validates an upload and describes it. Network and report type come from
/// the same filename heuristics as parsed uploads, so both endpoints agree
/// on the report id for a given filename.
pub fn describe_upload(
    filename: Option<&str>,
    content: &[u8],
    max_size: usize,
) -> Result<UploadMetadata, InvalidRequestError> {
    if content.is_empty() {
        return Err(InvalidRequestError::EmptyFile);
    }
    if content.len() > max_size {
        return Err(InvalidRequestError::FileTooLarge {
            size: content.len(),
            limit: max_size,
        });
    }
    let filename = filename
        .filter(|filename| !filename.is_empty())
        .unwrap_or(UNNAMED_UPLOAD);
    let network = CardNetwork::infer_from_filename(filename);
    let report_type = ReportType::infer_from_filename(filename);
    let metadata = UploadMetadata {
        report_id: upload_id(filename, network, report_type),
        filename: filename.to_string(),
        file_type: detect_file_type(filename, content),
        file_size: content.len(),
        checksum: checksum(content),
        upload_time: Utc::now(),
        status: ReportStatus::Uploaded,
        network,
        report_type,
    };
    tracing::info!(
        report_id = %metadata.report_id,
        file_type = %metadata.file_type,
        file_size = metadata.file_size,
        "upload received"
    );
    Ok(metadata)
}
