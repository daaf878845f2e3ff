use std::path::Path;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::{
    error::init::InitError,
    types::{
        network::CardNetwork,
        report::{DateRange, Report, ReportId, ReportStatus, ReportType},
    },
};

/// Ordered, read-only set of report templates.
///
/// A catalog always holds at least one report: the template lookup falls
/// back to the first entry, so emptiness is rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCatalog {
    reports: Vec<Report>,
}

impl ReportCatalog {
    /// Returns `None` if `reports` is empty.
    #[must_use]
    pub fn new(reports: Vec<Report>) -> Option<Self> {
        if reports.is_empty() {
            None
        } else {
            Some(Self { reports })
        }
    }

    /// The templates shipped with the service: authorization and settlement
    /// summaries for both networks.
    #[must_use]
    pub fn builtin() -> Self {
        let auth_range = date_range((2025, 12, 18), (2025, 12, 24));
        let settle_range = date_range((2025, 12, 11), (2025, 12, 24));
        let template = |id: &str,
                        name: &str,
                        report_type: ReportType,
                        network: CardNetwork,
                        row_count: u64,
                        date_range: DateRange| Report {
            id: ReportId::new(id),
            name: name.to_string(),
            report_type,
            network,
            row_count,
            date_range,
            status: ReportStatus::Normalized,
            extra: IndexMap::new(),
        };
        Self {
            reports: vec![
                template(
                    "r_auth_visa_dec",
                    "Authorization Summary — Dec 18–24 (Visa)",
                    ReportType::Authorization,
                    CardNetwork::Visa,
                    168,
                    auth_range,
                ),
                template(
                    "r_auth_mc_dec",
                    "Authorization Summary — Dec 18–24 (Mastercard)",
                    ReportType::Authorization,
                    CardNetwork::Mastercard,
                    168,
                    auth_range,
                ),
                template(
                    "r_settle_visa_dec",
                    "Settlement Batch — Dec 11–24 (Visa)",
                    ReportType::Settlement,
                    CardNetwork::Visa,
                    14,
                    settle_range,
                ),
                template(
                    "r_settle_mc_dec",
                    "Settlement Batch — Dec 11–24 (Mastercard)",
                    ReportType::Settlement,
                    CardNetwork::Mastercard,
                    14,
                    settle_range,
                ),
            ],
        }
    }

    /// Loads templates from a YAML (or JSON, which is valid YAML) file
    /// holding a list of reports.
    pub fn from_path(path: &Path) -> Result<Self, InitError> {
        let contents =
            std::fs::read_to_string(path).map_err(|error| {
                InitError::CatalogRead {
                    path: path.to_path_buf(),
                    error,
                }
            })?;
        let reports: Vec<Report> =
            serde_yml::from_str(&contents).map_err(|error| {
                InitError::CatalogParse {
                    path: path.to_path_buf(),
                    error,
                }
            })?;
        tracing::debug!(path = %path.display(), count = reports.len(), "loaded report catalog");
        Self::new(reports)
            .ok_or_else(|| InitError::EmptyCatalog(path.to_path_buf()))
    }

    #[must_use]
    pub fn templates(&self) -> &[Report] {
        &self.reports
    }

    #[must_use]
    pub fn get(&self, id: &ReportId) -> Option<&Report> {
        self.reports.iter().find(|report| &report.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ReportId) -> bool {
        self.get(id).is_some()
    }

    /// First template matching both `report_type` and `network`. A miss is
    /// not an error: the first template in the catalog is returned instead.
    #[must_use]
    pub fn find_template(
        &self,
        report_type: ReportType,
        network: CardNetwork,
    ) -> &Report {
        self.reports
            .iter()
            .find(|report| {
                report.report_type == report_type && report.network == network
            })
            .unwrap_or(&self.reports[0])
    }
}

impl Default for ReportCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn date_range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    let date = |(year, month, day): (i32, u32, u32)| {
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("builtin catalog dates are valid")
    };
    DateRange {
        start: date(start),
        end: date(end),
    }
}
