/// Recommender version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Human-readable message for users the content engine cannot serve.
pub const CONTENT_NOT_APPLICABLE_MESSAGE: &str =
    "Content based recommendation cannot work for new user.";

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "RECO_";

/// Project config filename looked up by `RecoConfig::load_from_dir`.
pub const CONFIG_FILENAME: &str = "reco.toml";
