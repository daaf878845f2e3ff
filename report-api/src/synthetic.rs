//! Deterministic stand-ins for the data a real parsing pipeline would
//! produce. Seeded from the report id so repeated calls agree.

use indexmap::IndexMap;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    types::{
        network::CardNetwork,
        parsed::ParsedData,
        report::ReportId,
        transaction::{LifecycleStage, NormalizedTransaction, TransactionStatus},
    },
    utils::hash::rolling_hash,
};

/// Upper bound on transactions returned for a single report.
pub const MAX_TRANSACTIONS: usize = 50;
pub const DEFAULT_TRANSACTION_LIMIT: usize = 100;

const MERCHANTS: &[(&str, &str)] = &[
    ("m_athena", "Athena Grocers"),
    ("m_orbit", "Orbit Electronics"),
    ("m_summit", "Summit Travel"),
    ("m_bistro", "Bistro North"),
];
// three in four transactions are approved
const STATUSES: &[TransactionStatus] = &[
    TransactionStatus::Approved,
    TransactionStatus::Approved,
    TransactionStatus::Approved,
    TransactionStatus::Declined,
];
const DECLINE_CODES: &[&str] = &["05", "51", "91"];
const APPROVED_CODE: &str = "00";

#[must_use]
pub fn parsed_preview(report_id: ReportId) -> ParsedData {
    let headers = [
        "transaction_id",
        "timestamp",
        "merchant_id",
        "amount",
        "currency",
        "status",
    ];
    let row = |values: [&str; 6]| -> IndexMap<String, String> {
        headers
            .iter()
            .zip(values)
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect()
    };
    let detected_fields = [
        ("transaction_id", "identifier"),
        ("timestamp", "datetime"),
        ("merchant_id", "identifier"),
        ("amount", "currency_amount"),
        ("currency", "currency_code"),
        ("status", "categorical"),
    ]
    .into_iter()
    .map(|(field, kind)| (field.to_string(), kind.to_string()))
    .collect();

    ParsedData {
        report_id,
        headers: headers.iter().map(ToString::to_string).collect(),
        row_count: 168,
        sample_rows: vec![
            row([
                "txn_001",
                "2025-12-18T10:30:00Z",
                "m_athena",
                "125.50",
                "USD",
                "approved",
            ]),
            row([
                "txn_002",
                "2025-12-18T10:35:00Z",
                "m_orbit",
                "89.99",
                "USD",
                "approved",
            ]),
        ],
        detected_fields,
        confidence: 0.92,
    }
}

/// Generates `min(limit, MAX_TRANSACTIONS)` transactions for `report_id`.
/// Network and lifecycle stage are read off the id itself.
#[must_use]
pub fn transactions(
    report_id: &ReportId,
    limit: usize,
) -> Vec<NormalizedTransaction> {
    let id = report_id.as_str();
    let lowered = id.to_lowercase();
    let network = if lowered.contains("visa") {
        CardNetwork::Visa
    } else {
        CardNetwork::Mastercard
    };
    let lifecycle_stage = if lowered.contains("auth") {
        LifecycleStage::Auth
    } else {
        LifecycleStage::Settlement
    };
    let mut rng = StdRng::seed_from_u64(u64::from(rolling_hash(id)));

    (0..limit.min(MAX_TRANSACTIONS))
        .map(|index| {
            let (merchant_id, merchant_name) =
                *MERCHANTS.choose(&mut rng).unwrap_or(&MERCHANTS[0]);
            let status = *STATUSES
                .choose(&mut rng)
                .unwrap_or(&TransactionStatus::Approved);
            let timestamp = format!(
                "2025-12-{:02}T{:02}:{:02}:00Z",
                rng.random_range(18..=24),
                rng.random_range(0..=23),
                rng.random_range(0..=59),
            );
            let cents: u32 = rng.random_range(1_000..=50_000);
            let response_code = match status {
                TransactionStatus::Approved => APPROVED_CODE,
                TransactionStatus::Declined => DECLINE_CODES
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(DECLINE_CODES[0]),
            };
            NormalizedTransaction {
                transaction_id: format!("txn_{id}_{index:04}"),
                timestamp,
                network,
                lifecycle_stage,
                merchant_id: merchant_id.to_string(),
                merchant_name: merchant_name.to_string(),
                amount: f64::from(cents) / 100.0,
                currency: "USD".to_string(),
                status,
                response_code: Some(response_code.to_string()),
            }
        })
        .collect()
}
