use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub timeouts: Timeouts,
}

/// Where the catalog API lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Scheme + host + port, without the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Transport timeouts, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeouts {
    /// Connection timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub connect_seconds: u64,
    /// Read timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub read_seconds: u64,
    /// Write timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub write_seconds: u64,
}

fn default_base_url() -> String {
    "http://10.0.2.2:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect_seconds: default_timeout(),
            read_seconds: default_timeout(),
            write_seconds: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeouts.read_seconds, 30);
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
[backend]
base_url = "https://tragos.example.com"

[timeouts]
read_seconds = 10
"#,
        )
        .unwrap();
        assert_eq!(config.backend.base_url, "https://tragos.example.com");
        assert_eq!(config.timeouts.read_seconds, 10);
        assert_eq!(config.timeouts.connect_seconds, 30);
    }
}
