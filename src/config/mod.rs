// Configuration module entry point
// Loads layered configuration and builds the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, Overrides};

/// Default config file name (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "filewalker";

impl Config {
    /// Load configuration from the given file path (extension optional)
    ///
    /// Precedence, lowest first: defaults, file, `FILEWALKER_*` environment,
    /// command-line overrides.
    pub fn load_from(config_path: &str, overrides: &Overrides) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8888)?
            .set_default("browser.render", "html")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.shutdown_timeout", 30)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("FILEWALKER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("server.host", overrides.host.clone())?
            .set_override_option("server.port", overrides.port.map(i64::from))?
            .set_override_option("browser.render", overrides.render.map(|m| m.as_str()))?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Defaults with access logging off, for handler and server tests
#[cfg(test)]
pub fn test_config(render: crate::browser::RenderMode) -> Config {
    let dir = std::env::temp_dir().join("filewalker-no-config");
    let overrides = Overrides {
        render: Some(render),
        ..Overrides::default()
    };
    let mut cfg = Config::load_from(&dir.join("absent").to_string_lossy(), &overrides)
        .expect("default configuration loads");
    cfg.logging.access_log = false;
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::RenderMode;

    fn missing_file() -> String {
        let dir = tempfile::tempdir().unwrap();
        dir.path()
            .join("absent")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::load_from(&missing_file(), &Overrides::default()).unwrap();
        assert_eq!(cfg.server.port, 8888);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.browser.render, RenderMode::Html);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.performance.keep_alive);
        assert!(cfg.performance.max_connections.is_none());
        assert_eq!(cfg.performance.shutdown_timeout, 30);
    }

    #[test]
    fn test_file_and_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walker.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9000
workers = 2

[browser]
render = "json"

[performance]
max_connections = 64
"#,
        )
        .unwrap();
        let path = path.to_string_lossy().into_owned();

        let cfg = Config::load_from(&path, &Overrides::default()).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.browser.render, RenderMode::Json);
        assert_eq!(cfg.performance.max_connections, Some(64));

        let overrides = Overrides {
            host: Some("127.0.0.1".to_string()),
            port: Some(7000),
            render: Some(RenderMode::Html),
        };
        let cfg = Config::load_from(&path, &overrides).unwrap();
        assert_eq!(cfg.server.port, 7000);
        assert_eq!(cfg.browser.render, RenderMode::Html);
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:7000".parse().unwrap()
        );
    }

    #[test]
    fn test_invalid_address() {
        let overrides = Overrides {
            host: Some("not a host".to_string()),
            ..Overrides::default()
        };
        let cfg = Config::load_from(&missing_file(), &overrides).unwrap();
        assert!(cfg.get_socket_addr().is_err());
    }
}
