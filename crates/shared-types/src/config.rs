use serde::{Deserialize, Serialize};

/// Default socket address for the dashboard server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Feature flags controlling optional server behaviour.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces over OTLP (still requires `OTEL_EXPORTER_OTLP_ENDPOINT`).
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the generated OpenAPI document at `/api-docs/openapi.json`.
    #[serde(default)]
    pub openapi: bool,
}

/// `[server]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

/// `[storage]` table.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Directory of `*.json` documents loaded at startup.
    #[serde(default)]
    pub documents_dir: Option<String>,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.telemetry);
        assert!(!flags.openapi);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.storage.documents_dir, None);
    }

    #[test]
    fn deserialize_partial_toml() {
        let toml_str = r#"
[server]
bind_addr = "0.0.0.0:3000"

[features]
openapi = true
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:3000");
        assert!(config.features.openapi);
        assert!(!config.features.telemetry);
    }

    #[test]
    fn deserialize_storage_table() {
        let toml_str = r#"
[storage]
documents_dir = "data/documents"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.storage.documents_dir.as_deref(),
            Some("data/documents")
        );
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: AppConfig = toml::from_str("[features]\nstripe = true\n").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
    }
}
