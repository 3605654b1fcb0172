// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::Settings;

/// Loads the application settings.
///
/// Sources, in increasing precedence: built-in defaults, an optional
/// `config.toml` next to the binary, and `LMS_*` environment variables
/// (e.g. `LMS_DATABASE_URL`, `LMS_LISTEN_PORT`, `LMS_SEED_DEMO`).
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("database_url", "sqlite://lms.db")?
        .set_default("listen_port", 3000_i64)?
        .set_default("seed_demo", true)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::with_prefix("LMS"))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let settings = load_config().unwrap();
        assert_eq!(settings.listen_port, 3000);
        assert!(settings.seed_demo);
        assert!(settings.database_url.starts_with("sqlite:"));
    }
}
