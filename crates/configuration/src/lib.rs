use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, FilterDefaults, Source};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the configuration file,
/// deserializes it into our strongly-typed `Config` struct, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        // Optionally, one could add environment variables here as well.
        // .add_source(config::Environment::with_prefix("PRISM"));
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;

    if config.source.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "source.endpoint must not be empty".to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::StatusFilter;
    use rust_decimal::Decimal;

    #[test]
    fn deserializes_a_full_config_document() {
        let raw = r#"
            [source]
            endpoint = "http://localhost:5000/crm-data"

            [filters]
            status = "All"
            min_value = 0
            max_value = 100000
        "#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.source.endpoint, "http://localhost:5000/crm-data");
        assert_eq!(config.filters.status, StatusFilter::All);
        assert_eq!(config.filters.min_value, Decimal::ZERO);
        assert_eq!(config.filters.max_value, Decimal::from(100000));
    }

    #[test]
    fn status_defaults_to_all_when_omitted() {
        let raw = r#"
            [source]
            endpoint = "http://localhost:5000/crm-data"

            [filters]
            min_value = 0
            max_value = 100000
        "#;

        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.filters.status, StatusFilter::All);
    }
}
