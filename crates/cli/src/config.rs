use core::fmt::{self, Debug};
use std::{env, fs, io, path::Path, path::PathBuf};

use msgsig_crypto::{Secp256k1SigningKey, SigningError};
use thiserror::Error;
use zeroize::Zeroizing;

pub const LOG_ENV_VAR: &str = "MSGSIG_LOG";
pub const PRIVATE_KEY_ENV_VAR: &str = "MSGSIG_PRIVATE_KEY";

const FALLBACK_LOG_ENV_VAR: &str = "RUST_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no signing key: set MSGSIG_PRIVATE_KEY or pass --key-file")]
    MissingPrivateKey,

    #[error("read key file {}: {source}", .path.display())]
    ReadKeyFile { path: PathBuf, source: io::Error },

    #[error("invalid signing key: {0}")]
    InvalidPrivateKey(#[from] SigningError),
}

#[derive(Clone)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,

    /// Hex-encoded secp256k1 secret used by `msgsig sign`
    pub private_key: Option<Zeroizing<String>>,
}

impl Config {
    /// Create a new configuration from environment variables
    pub fn from_env() -> Self {
        let log_filter = env::var(LOG_ENV_VAR)
            .or_else(|_| env::var(FALLBACK_LOG_ENV_VAR))
            .unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        let private_key = env::var(PRIVATE_KEY_ENV_VAR).ok().map(Zeroizing::new);

        Self {
            log_filter,
            private_key,
        }
    }

    /// A key file takes precedence over the environment
    pub fn signing_key(&self, key_file: Option<&Path>) -> Result<Secp256k1SigningKey, ConfigError> {
        let secret = match key_file {
            Some(path) => Zeroizing::new(fs::read_to_string(path).map_err(|source| {
                ConfigError::ReadKeyFile {
                    path: path.to_path_buf(),
                    source,
                }
            })?),
            None => self
                .private_key
                .clone()
                .ok_or(ConfigError::MissingPrivateKey)?,
        };
        Ok(Secp256k1SigningKey::from_hex(secret.as_str())?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            private_key: None,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("log_filter", &self.log_filter)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use msgsig_test_utils::keys::{self, REFERENCE_SECRET};

    use super::*;

    fn with_key(secret: &str) -> Config {
        Config {
            private_key: Some(Zeroizing::new(secret.to_string())),
            ..Config::default()
        }
    }

    #[test]
    fn key_from_config() {
        let key = with_key(&hex_secret()).signing_key(None).unwrap();
        assert_eq!(keys::address_of(&key), keys::address_of(&keys::reference()));
    }

    #[test]
    fn key_file_takes_precedence() {
        let path = env::temp_dir().join(format!("msgsig-key-{}", std::process::id()));
        fs::write(&path, format!("0x{}\n", hex_secret())).unwrap();

        let key = with_key("not a key").signing_key(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(keys::address_of(&key), keys::address_of(&keys::reference()));
    }

    #[test]
    fn missing_key() {
        assert!(matches!(
            Config::default().signing_key(None),
            Err(ConfigError::MissingPrivateKey)
        ));
    }

    #[test]
    fn unreadable_key_file() {
        assert!(matches!(
            Config::default().signing_key(Some(Path::new("/nonexistent/msgsig/key"))),
            Err(ConfigError::ReadKeyFile { .. })
        ));
    }

    #[test]
    fn invalid_key() {
        assert!(matches!(
            with_key("0x1234").signing_key(None),
            Err(ConfigError::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn debug_redacts_key() {
        let debug = format!("{:?}", with_key(&hex_secret()));
        assert!(!debug.contains(&hex_secret()));
        assert!(debug.contains("<redacted>"));
    }

    fn hex_secret() -> String {
        hex::encode(REFERENCE_SECRET)
    }
}
