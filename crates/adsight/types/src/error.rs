/// Invalid analysis configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config value {name} out of range: {value}")]
    OutOfRange { name: String, value: f64 },
    #[error("platform keyword list contains an empty entry")]
    EmptyKeyword,
}
