use std::{io::ErrorKind, net::SocketAddr, path::Path};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bind: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

impl Config {
    /// Read the config file, or fall back to defaults if there isn't one.
    pub fn read(path: impl AsRef<Path>) -> eyre::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::read("does-not-exist.toml").unwrap();
        assert_eq!(config.bind, "127.0.0.1:8000".parse().unwrap());
    }

    #[test]
    fn bind_is_read_from_toml() {
        let config: Config = toml::from_str("bind = \"0.0.0.0:3000\"").unwrap();
        assert_eq!(config.bind, "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<Config>("prot = 3000").is_err());
    }
}
