pub mod catalog;
pub mod server;

use std::path::PathBuf;

use config::ConfigError;
use displaydoc::Display;
use json_patch::merge;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::init::InitError;

const ENV_PREFIX: &str = "REPORT_API";

#[derive(Debug, Error, Display)]
pub enum Error {
    /// error collecting config sources: {0}
    Source(#[from] ConfigError),
    /// deserialization error for input config: {0}
    InputConfigDeserialization(#[from] serde_path_to_error::Error<ConfigError>),
    /// deserialization error for merged config: {0}
    MergedConfigDeserialization(
        #[from] serde_path_to_error::Error<serde_json::Error>,
    ),
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    pub telemetry: telemetry::Config,
    pub server: self::server::ServerConfig,
    pub catalog: self::catalog::CatalogConfig,
}

impl Config {
    /// Reads the config from defaults, an optional file, and
    /// `REPORT_API__`-prefixed environment variables, in increasing order of
    /// precedence.
    pub fn try_read(
        config_file_path: Option<PathBuf>,
    ) -> Result<Self, Box<Error>> {
        let mut default_config = serde_json::to_value(Self::default())
            .expect("default config is serializable");
        let mut builder = config::Config::builder();
        if let Some(path) = config_file_path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .try_parsing(true)
                .separator("__")
                .convert_case(config::Case::Kebab),
        );
        let input_config: serde_json::Value = builder
            .build()
            .map_err(Error::from)
            .map_err(Box::new)?
            .try_deserialize()
            .map_err(Error::from)
            .map_err(Box::new)?;
        merge(&mut default_config, &input_config);

        let config: Config = serde_path_to_error::deserialize(default_config)
            .map_err(Error::from)
            .map_err(Box::new)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), InitError> {
        if self.server.request_timeout.is_zero() {
            return Err(InitError::InvalidConfig(
                "server.request-timeout must be greater than zero",
            ));
        }
        if self.server.max_upload_size == 0 {
            return Err(InitError::InvalidConfig(
                "server.max-upload-size must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(feature = "testing")]
impl crate::tests::TestDefault for Config {
    fn test_default() -> Self {
        use crate::tests::TestDefault;

        let telemetry = telemetry::Config {
            level: "info,report_api=trace".to_string(),
            format: telemetry::Format::Compact,
        };
        Config {
            telemetry,
            server: self::server::ServerConfig::test_default(),
            catalog: self::catalog::CatalogConfig::default(),
        }
    }
}
