use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use report_api::{
    tests::harness::Harness, types::network::CardNetwork,
    types::report::ReportType, upload::upload_id,
};
use serde_json::Value;

const BOUNDARY: &str = "report-api-test-boundary";

fn multipart_part(name: &str, filename: Option<&str>, content: &[u8]) -> Vec<u8> {
    let disposition = match filename {
        Some(filename) => format!(
            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
        ),
        None => format!("Content-Disposition: form-data; name=\"{name}\"\r\n"),
    };
    let mut part = format!("--{BOUNDARY}\r\n{disposition}\r\n").into_bytes();
    part.extend_from_slice(content);
    part.extend_from_slice(b"\r\n");
    part
}

fn upload_request(parts: &[Vec<u8>]) -> Request<Body> {
    let mut body = parts.concat();
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Request::builder()
        .method(Method::POST)
        .uri("http://localhost/reports/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn upload(
    harness: &mut Harness,
    parts: &[Vec<u8>],
) -> (StatusCode, Value) {
    let response = harness.call(upload_request(parts)).await;
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn csv_upload_is_described() {
    let mut harness = Harness::builder().build();
    let content = b"txn_id,amount\n1,2.50\n";
    let (status, body) = upload(
        &mut harness,
        &[multipart_part("file", Some("visa_settlement.csv"), content)],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "visa_settlement.csv");
    assert_eq!(body["fileType"], "csv");
    assert_eq!(body["fileSize"], content.len());
    assert_eq!(body["status"], "uploaded");
    assert_eq!(body["network"], "Visa");
    assert_eq!(body["reportType"], "Settlement");
    assert_eq!(
        body["reportId"],
        upload_id(
            "visa_settlement.csv",
            CardNetwork::Visa,
            ReportType::Settlement
        )
        .as_str()
    );
    assert!(body["uploadTime"].is_string());
}

#[tokio::test]
async fn checksum_is_sha256_of_contents() {
    let mut harness = Harness::builder().build();
    let (status, body) = upload(
        &mut harness,
        &[multipart_part("file", Some("notes.txt"), b"abc")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["checksum"],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(body["fileType"], "unknown");
}

#[tokio::test]
async fn magic_bytes_override_extension() {
    let mut harness = Harness::builder().build();
    let (_, pdf) = upload(
        &mut harness,
        &[multipart_part("file", Some("mastercard_auth.csv"), b"%PDF-1.4\n")],
    )
    .await;
    assert_eq!(pdf["fileType"], "pdf");
    assert_eq!(pdf["network"], "Mastercard");
    assert_eq!(pdf["reportType"], "Authorization");

    let (_, xlsx) = upload(
        &mut harness,
        &[multipart_part(
            "file",
            Some("batch.dat"),
            b"PK\x03\x04\x14\x00\x00\x00\x08\x00",
        )],
    )
    .await;
    assert_eq!(xlsx["fileType"], "xlsx");
}

#[tokio::test]
async fn other_fields_are_skipped() {
    let mut harness = Harness::builder().build();
    let (status, body) = upload(
        &mut harness,
        &[
            multipart_part("comment", None, b"first upload"),
            multipart_part("file", Some("clearing.pdf"), b"plain text"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "clearing.pdf");
    assert_eq!(body["fileType"], "pdf");
    assert_eq!(body["reportType"], "Clearing");
}

#[tokio::test]
async fn empty_file_is_rejected() {
    let mut harness = Harness::builder().build();
    let (status, body) = upload(
        &mut harness,
        &[multipart_part("file", Some("empty.csv"), b"")],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Uploaded file is empty");
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn file_over_configured_limit_is_rejected() {
    // test config allows 1024 bytes
    let mut harness = Harness::builder().build();
    let content = vec![b'x'; 2048];
    let (status, body) = upload(
        &mut harness,
        &[multipart_part("file", Some("big.csv"), &content)],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Uploaded file is 2048 bytes, the limit is 1024"
    );
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let mut harness = Harness::builder().build();
    let (status, body) = upload(
        &mut harness,
        &[multipart_part("attachment", Some("a.csv"), b"a,b")],
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Multipart body has no `file` field"
    );
}

#[tokio::test]
async fn non_multipart_body_is_rejected() {
    let mut harness = Harness::builder().build();
    let request = Request::builder()
        .method(Method::POST)
        .uri("http://localhost/reports/upload")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = harness.call(request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
