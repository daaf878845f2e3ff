use std::sync::Arc;

use crate::{catalog::ReportCatalog, config::Config, upload::UploadParser};

#[derive(Debug, Clone)]
pub struct AppState(pub Arc<InnerAppState>);

impl AppState {
    #[must_use]
    pub fn new(config: Config, catalog: ReportCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let upload_parser = UploadParser::new(Arc::clone(&catalog));
        Self(Arc::new(InnerAppState {
            config,
            catalog,
            upload_parser,
        }))
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.0.config
    }

    #[must_use]
    pub fn catalog(&self) -> &ReportCatalog {
        &self.0.catalog
    }

    #[must_use]
    pub fn upload_parser(&self) -> &UploadParser {
        &self.0.upload_parser
    }
}

#[derive(Debug)]
pub struct InnerAppState {
    pub config: Config,
    /// Read-only templates shared by every handler.
    pub catalog: Arc<ReportCatalog>,
    pub upload_parser: UploadParser,
}
