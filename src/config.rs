//! Client configuration.

use crate::network::Network;
use crate::params::KeyCase;
use std::env::VarError;
use std::fmt;
use url::Url;

/// Environment variable holding the API key for [`ClientConfig::from_env`].
pub const API_KEY_ENV: &str = "ETHERSCAN_API_KEY";

/// Environment variable holding the network selector for [`ClientConfig::from_env`].
pub const NETWORK_ENV: &str = "ETHERSCAN_NETWORK";

/// Errors raised while building a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is required")]
    MissingApiKey,
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("base URL must not carry a fragment: {0}")]
    BaseUrlFragment(String),
    #[error("ETHERSCAN_API_KEY is not valid unicode")]
    NonUnicodeApiKey,
}

/// Immutable settings shared by every request a client makes.
///
/// A config can only be obtained through [`ClientConfig::new`] (or
/// [`ClientConfig::from_env`]), so the API key is guaranteed non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    network: Network,
    base_url: Option<Url>,
    key_case: KeyCase,
}

impl ClientConfig {
    /// Creates a mainnet configuration for `api_key`.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] if the key is empty or blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            network: Network::default(),
            base_url: None,
            key_case: KeyCase::default(),
        })
    }

    /// Reads `ETHERSCAN_API_KEY` and, optionally, `ETHERSCAN_NETWORK`.
    ///
    /// An unset or unrecognized network falls back to mainnet.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) => key,
            Err(VarError::NotPresent) => return Err(ConfigError::MissingApiKey),
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NonUnicodeApiKey),
        };
        let network = std::env::var(NETWORK_ENV).ok();
        Ok(Self::new(api_key)?.with_network(Network::from_selector(network.as_deref())))
    }

    /// Selects the explorer deployment.
    #[must_use]
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Sends every request to `base_url` instead of the network's origin.
    ///
    /// Meant for self-hosted or third-party explorers that speak the same API.
    /// A query already present on `base_url` (e.g. `chainid=1`) is kept and
    /// every request's pairs are appended after it. Fragments are rejected.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url)?;
        if url.fragment().is_some() {
            return Err(ConfigError::BaseUrlFragment(base_url.to_string()));
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Sets the key-casing policy applied to every request.
    #[must_use]
    pub fn with_key_case(mut self, key_case: KeyCase) -> Self {
        self.key_case = key_case;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn key_case(&self) -> KeyCase {
        self.key_case
    }

    /// The origin requests are sent to: the override if set, otherwise the
    /// network's entry in the origin table.
    pub fn base_url(&self) -> &str {
        match &self.base_url {
            Some(url) => url.as_str(),
            None => self.network.base_url(),
        }
    }

    /// [`Self::base_url`] as a [`Url`] that requests extend with their pairs.
    pub fn origin(&self) -> Url {
        match &self.base_url {
            Some(url) => url.clone(),
            None => self.network.url(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("network", &self.network)
            .field("base_url", &self.base_url())
            .field("key_case", &self.key_case)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_rejected() {
        for key in ["", "   "] {
            let err = ClientConfig::new(key).unwrap_err();
            assert!(matches!(err, ConfigError::MissingApiKey));
            assert_eq!(err.to_string(), "API key is required");
        }
    }

    #[test]
    fn defaults_to_mainnet() {
        let config = ClientConfig::new("K").unwrap();
        assert_eq!(config.network(), Network::Mainnet);
        assert_eq!(config.base_url(), "https://api.etherscan.io/api");
        assert_eq!(config.key_case(), KeyCase::Preserve);
        assert_eq!(config.api_key(), "K");
    }

    #[test]
    fn network_selects_origin() {
        let config = ClientConfig::new("K").unwrap().with_network(Network::Sepolia);
        assert_eq!(config.base_url(), "https://api-sepolia.etherscan.io/api");
    }

    #[test]
    fn base_url_override_wins() {
        let config = ClientConfig::new("K")
            .unwrap()
            .with_network(Network::Goerli)
            .with_base_url("https://explorer.example.org/api")
            .unwrap();
        assert_eq!(config.base_url(), "https://explorer.example.org/api");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ClientConfig::new("K")
            .unwrap()
            .with_base_url("not a url")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn base_url_with_fragment_is_rejected() {
        let err = ClientConfig::new("K")
            .unwrap()
            .with_base_url("https://explorer.example.org/api#x")
            .unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrlFragment(_)));
    }

    #[test]
    fn base_url_query_is_kept() {
        let config = ClientConfig::new("K")
            .unwrap()
            .with_base_url("https://api.etherscan.io/v2/api?chainid=1")
            .unwrap();
        assert_eq!(config.origin().query(), Some("chainid=1"));
    }

    #[test]
    fn env_api_key_errors_are_distinguished() {
        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "API key is required"
        );
        assert_eq!(
            ConfigError::NonUnicodeApiKey.to_string(),
            "ETHERSCAN_API_KEY is not valid unicode"
        );
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ClientConfig::new("super-secret").unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
