//! Configuration for the adsight CLI

use adsight_types::AnalysisConfig;
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Thresholds and switches for generation and evaluation
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CliConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `ADSIGHT_*` environment variables (`ADSIGHT_ANALYSIS__MIN_CONFIDENCE=0.7`).
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&CliConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ADSIGHT")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("analysis.platform_keywords")
                .try_parsing(true),
        );

        let config: CliConfig = builder.build()?.try_deserialize()?;
        config.analysis.validate()?;
        Ok(config)
    }
}
