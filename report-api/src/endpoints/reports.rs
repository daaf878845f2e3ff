use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        multipart::MultipartRejection,
        rejection::QueryRejection,
    },
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::{
    app_state::AppState,
    error::{api::ApiError, invalid_req::InvalidRequestError},
    intake,
    synthetic::{self, DEFAULT_TRANSACTION_LIMIT},
    types::{
        metadata::UploadMetadata,
        parsed::ParsedData,
        report::{ReportEnvelope, ReportId, ReportList},
        transaction::TransactionList,
    },
    upload::ParseRequest,
};

/// Prefix shared by every report id the service hands out for demo data.
const DEMO_REPORT_PREFIX: &str = "r_";

/// `POST /reports/parse-upload`
pub async fn parse_upload(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ReportEnvelope>, ApiError> {
    let request: ParseRequest = serde_json::from_slice(&body)
        .map_err(InvalidRequestError::InvalidRequestBody)?;
    let report = state.upload_parser().parse(request);
    Ok(Json(ReportEnvelope { report }))
}

/// Multipart part that carries the uploaded report.
const UPLOAD_FIELD: &str = "file";

/// `POST /reports/upload`
///
/// Reads the `file` part of a multipart body and answers with its metadata.
/// Nothing is stored.
pub async fn upload_report(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadMetadata>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        InvalidRequestError::InvalidMultipart(rejection.body_text())
    })?;
    while let Some(field) = multipart.next_field().await.map_err(|error| {
        InvalidRequestError::InvalidMultipart(error.body_text())
    })? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().map(ToString::to_string);
        let content = field.bytes().await.map_err(|error| {
            InvalidRequestError::InvalidMultipart(error.body_text())
        })?;
        let metadata = intake::describe_upload(
            filename.as_deref(),
            &content,
            state.config().server.max_upload_size,
        )?;
        return Ok(Json(metadata));
    }
    Err(InvalidRequestError::MissingFile.into())
}

/// `GET /reports`
pub async fn list_reports(State(state): State<AppState>) -> Json<ReportList> {
    Json(ReportList {
        reports: state.catalog().templates().to_vec(),
    })
}

/// `GET /reports/{report_id}`
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<ReportId>,
) -> Result<Json<ReportEnvelope>, ApiError> {
    let report = state
        .catalog()
        .get(&report_id)
        .cloned()
        .ok_or_else(|| InvalidRequestError::NotFound(report_id.to_string()))?;
    Ok(Json(ReportEnvelope { report }))
}

/// `GET /reports/{report_id}/parsed`
pub async fn get_parsed(Path(report_id): Path<ReportId>) -> Json<ParsedData> {
    Json(synthetic::parsed_preview(report_id))
}

#[derive(Debug, Deserialize)]
pub struct TransactionsQuery {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_TRANSACTION_LIMIT
}

/// `GET /reports/{report_id}/transactions`
pub async fn get_transactions(
    Path(report_id): Path<ReportId>,
    query: Result<Query<TransactionsQuery>, QueryRejection>,
) -> Result<Json<TransactionList>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        InvalidRequestError::InvalidQuery(rejection.body_text())
    })?;
    Ok(Json(TransactionList {
        transactions: synthetic::transactions(&report_id, query.limit),
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    report_id: ReportId,
    status: &'static str,
    message: &'static str,
}

/// `POST /reports/{report_id}/process`
///
/// Acknowledges the request; no work is actually scheduled.
pub async fn trigger_processing(
    State(state): State<AppState>,
    Path(report_id): Path<ReportId>,
) -> Result<Json<ProcessResponse>, ApiError> {
    if !state.catalog().contains(&report_id)
        && !report_id.as_str().starts_with(DEMO_REPORT_PREFIX)
    {
        return Err(InvalidRequestError::NotFound(report_id.to_string()).into());
    }
    tracing::info!(%report_id, "processing queued");
    Ok(Json(ProcessResponse {
        report_id,
        status: "processing_queued",
        message: "Report processing has been queued",
    }))
}
