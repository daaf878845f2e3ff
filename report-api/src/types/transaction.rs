use serde::{Deserialize, Serialize};

use super::network::CardNetwork;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LifecycleStage {
    Auth,
    Clearing,
    Settlement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Approved,
    Declined,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTransaction {
    pub transaction_id: String,
    pub timestamp: String,
    pub network: CardNetwork,
    pub lifecycle_stage: LifecycleStage,
    pub merchant_id: String,
    pub merchant_name: String,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionList {
    pub transactions: Vec<NormalizedTransaction>,
}
