use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use lumen_core::SensorConfig;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// Sampling parameters served to devices. Keys omitted from the file
    /// fall back to the deployment defaults.
    pub sensor: SensorConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address for the HTTP server to listen on
    pub http_addr: SocketAddr,
}

impl Config {
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            sensor: SensorConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8090".parse().unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            http_addr = "127.0.0.1:9999"

            [sensor]
            point_n_averaged = 128
            "#,
        )
        .unwrap();

        assert_eq!(config.server.http_addr, "127.0.0.1:9999".parse().unwrap());
        assert_eq!(config.sensor.point_n_averaged, 128);
        assert_eq!(config.sensor.burst_n_samples, 512);
        assert_eq!(config.sensor.expiration, 10);
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.server.http_addr, "0.0.0.0:8090".parse().unwrap());
        assert_eq!(config.sensor, SensorConfig::default());
    }
}
