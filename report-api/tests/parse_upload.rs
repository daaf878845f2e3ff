use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use report_api::{
    catalog::ReportCatalog,
    tests::harness::Harness,
    types::{
        network::CardNetwork,
        report::{DateRange, Report, ReportId, ReportStatus, ReportType},
    },
    utils::hash::rolling_hash,
};
use serde_json::{Value, json};

fn parse_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("http://localhost/reports/parse-upload")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn parse(harness: &mut Harness, body: Value) -> Value {
    let response = harness.call(parse_request(body.to_string())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn expected_id(input: &str) -> String {
    format!("upl_{:x}", rolling_hash(input))
}

#[tokio::test]
async fn mastercard_statement_example() {
    let mut harness = Harness::builder().build();
    let body =
        parse(&mut harness, json!({ "filename": "march_mastercard_statement.pdf" }))
            .await;
    let report = &body["report"];
    assert_eq!(
        report["id"],
        expected_id("march_mastercard_statement.pdf:Mastercard:Unknown")
    );
    assert_eq!(
        report["name"],
        "Parsed Upload — march_mastercard_statement (Mastercard)"
    );
}

#[tokio::test]
async fn same_input_same_report() {
    let mut harness = Harness::builder().build();
    let request = json!({ "filename": "visa_auth_week51.csv" });
    let first = parse(&mut harness, request.clone()).await;
    let second = parse(&mut harness, request).await;
    assert_eq!(first, second);
    assert_eq!(first["report"]["type"], "Authorization");
    assert_eq!(first["report"]["network"], "Visa");
    assert_eq!(first["report"]["rowCount"], 168);
}

#[tokio::test]
async fn empty_body_object_uses_defaults() {
    let mut harness = Harness::builder().build();
    let body = parse(&mut harness, json!({})).await;
    assert_eq!(
        body["report"]["id"],
        expected_id("uploaded_report:Visa:Unknown")
    );
    assert_eq!(
        body["report"]["name"],
        "Parsed Upload — uploaded_report (Visa)"
    );
}

#[tokio::test]
async fn network_hint_is_used_verbatim() {
    let mut harness = Harness::builder().build();
    let body = parse(
        &mut harness,
        json!({ "filename": "daily_settlement.csv", "networkHint": "Mastercard" }),
    )
    .await;
    let report = &body["report"];
    assert_eq!(report["network"], "Mastercard");
    assert_eq!(report["type"], "Settlement");
    assert_eq!(
        report["id"],
        expected_id("daily_settlement.csv:Mastercard:Settlement")
    );
    assert_eq!(
        report["name"],
        "Parsed Upload — daily_settlement (Mastercard)"
    );
}

#[tokio::test]
async fn network_inferred_from_filename() {
    let mut harness = Harness::builder().build();
    let body =
        parse(&mut harness, json!({ "filename": "statement_mastercard.csv" }))
            .await;
    assert!(
        body["report"]["name"]
            .as_str()
            .unwrap()
            .ends_with("(Mastercard)")
    );
    let body =
        parse(&mut harness, json!({ "filename": "statement_visa.csv" })).await;
    assert!(body["report"]["name"].as_str().unwrap().ends_with("(Visa)"));
}

#[tokio::test]
async fn miss_copies_first_template_of_injected_catalog() {
    let first = Report {
        id: ReportId::new("r_only_first"),
        name: "First".to_string(),
        report_type: ReportType::Settlement,
        network: CardNetwork::Visa,
        row_count: 3,
        date_range: DateRange {
            start: "2025-01-01".parse().unwrap(),
            end: "2025-01-02".parse().unwrap(),
        },
        status: ReportStatus::Parsed,
        extra: [("source".to_string(), json!("sftp"))].into_iter().collect(),
    };
    let second = Report {
        id: ReportId::new("r_second"),
        report_type: ReportType::Authorization,
        network: CardNetwork::Mastercard,
        row_count: 99,
        ..first.clone()
    };
    let catalog = ReportCatalog::new(vec![first, second]).unwrap();
    let mut harness = Harness::builder().with_catalog(catalog).build();

    let body =
        parse(&mut harness, json!({ "filename": "mastercard_clearing.csv" }))
            .await;
    let report = &body["report"];
    assert_eq!(report["type"], "Settlement");
    assert_eq!(report["network"], "Visa");
    assert_eq!(report["rowCount"], 3);
    assert_eq!(report["status"], "parsed");
    assert_eq!(report["source"], "sftp");
    assert_eq!(report["dateRange"], json!({ "start": "2025-01-01", "end": "2025-01-02" }));
    assert_eq!(
        report["name"],
        "Parsed Upload — mastercard_clearing (Mastercard)"
    );
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let mut harness = Harness::builder().build();
    let response = harness.call(parse_request("{\"filename\": ")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_network_hint_is_bad_request() {
    let mut harness = Harness::builder().build();
    let response = harness
        .call(parse_request(
            json!({ "filename": "x.csv", "networkHint": "Amex" }).to_string(),
        ))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn response_carries_request_id() {
    let mut harness = Harness::builder().build();
    let response = harness.call(parse_request("{}")).await;
    assert!(response.headers().contains_key("x-request-id"));

    let mut request = parse_request("{}");
    request
        .headers_mut()
        .insert("x-request-id", "caller-chosen-id".parse().unwrap());
    let response = harness.call(request).await;
    assert_eq!(response.headers()["x-request-id"], "caller-chosen-id");
}
