use shared_types::AppConfig;
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Read a config file, falling back to defaults when it is missing or
/// unparseable.
pub fn read_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "config file not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Apply `BIND_ADDR` and `DOCUMENTS_DIR` overrides from an environment lookup.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(addr) = lookup("BIND_ADDR").filter(|v| !v.is_empty()) {
        config.server.bind_addr = addr;
    }
    if let Some(dir) = lookup("DOCUMENTS_DIR").filter(|v| !v.is_empty()) {
        config.storage.documents_dir = Some(dir);
    }
    config
}

/// Load `.env`, `config.toml` and environment overrides into the global
/// config. Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = apply_env_overrides(read_config(Path::new(CONFIG_PATH)), |key| {
            std::env::var(key).ok()
        });
        tracing::info!(
            bind_addr = %config.server.bind_addr,
            documents_dir = ?config.storage.documents_dir,
            features = ?config.features,
            "configuration loaded"
        );
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn invalid_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server\nbind_addr = ").unwrap();
        assert_eq!(read_config(&path), AppConfig::default());
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[features]\nopenapi = true\n").unwrap();
        assert!(read_config(&path).features.openapi);
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> =
            HashMap::from([("BIND_ADDR", "0.0.0.0:9000"), ("DOCUMENTS_DIR", "/srv/docs")]);
        let config = apply_env_overrides(AppConfig::default(), |key| {
            env.get(key).map(|v| v.to_string())
        });
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.storage.documents_dir.as_deref(), Some("/srv/docs"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config = apply_env_overrides(AppConfig::default(), |_| Some(String::new()));
        assert_eq!(config, AppConfig::default());
    }
}
