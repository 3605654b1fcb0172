use serde::Deserialize;

/// The root configuration structure for the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Connection string for the record store (e.g. "sqlite://lms.db").
    pub database_url: String,
    /// TCP port the HTTP server listens on.
    pub listen_port: u16,
    /// Whether to insert the demo records at startup.
    pub seed_demo: bool,
}
