use serde::{Deserialize, Serialize};

/// Payment network a report was produced by.
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
pub enum CardNetwork {
    #[default]
    Visa,
    Mastercard,
}

impl CardNetwork {
    /// Filename heuristic used when the caller gives no hint: anything
    /// mentioning "master" (any case) is Mastercard, everything else Visa.
    #[must_use]
    pub fn infer_from_filename(filename: &str) -> Self {
        if filename.to_lowercase().contains("master") {
            Self::Mastercard
        } else {
            Self::Visa
        }
    }
}
