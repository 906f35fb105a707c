//! # Marketscope Configuration Crate
//!
//! Loads the application settings: where the market data store lives and the
//! default analysis date range the dashboard commands fall back to.

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AnalysisDefaults, Config, StoreSettings};

/// Loads the application configuration from the `config.toml` file.
///
/// Settings can be overridden through the environment with the
/// `MARKETSCOPE_` prefix (e.g. `MARKETSCOPE_STORE__PATH=/tmp/market.db`).
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .add_source(config::Environment::with_prefix("MARKETSCOPE").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    Ok(config)
}
