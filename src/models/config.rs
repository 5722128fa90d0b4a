use serde::Deserialize;

/// Configuration options for the Blossom planner service.
///
/// Loaded in `main` from an optional `config.yaml` plus environment
/// overrides (see `dotenvy`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Cookie signing key material; must be at least 64 bytes.
    pub secret_key: String,
}

fn default_database_url() -> String {
    "planner.db".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}
