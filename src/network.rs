//! Explorer deployments and the origin each one is served from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Origin of every supported deployment, in declaration order of [`Network`].
static ORIGINS: [&str; 4] = [
    "https://api.etherscan.io/api",
    "https://api-sepolia.etherscan.io/api",
    "https://api-goerli.etherscan.io/api",
    "https://api-holesky.etherscan.io/api",
];

/// An Etherscan deployment (mainnet or a named test network).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Ethereum mainnet.
    #[default]
    Mainnet,
    /// Sepolia testnet.
    Sepolia,
    /// Goerli testnet (deprecated upstream, still answered by the explorer).
    Goerli,
    /// Holesky testnet.
    Holesky,
}

impl Network {
    /// Every supported network, in table order.
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Sepolia,
        Network::Goerli,
        Network::Holesky,
    ];

    /// Returns the API origin (scheme, host and path prefix) for this network.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        ORIGINS[self as usize]
    }

    /// The origin as a parsed [`Url`], ready to carry a query string.
    #[must_use]
    pub fn url(self) -> Url {
        Url::parse(self.base_url()).expect("origin table holds absolute URLs")
    }

    /// Returns the lowercase selector used in configuration, e.g. `"sepolia"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Sepolia => "sepolia",
            Self::Goerli => "goerli",
            Self::Holesky => "holesky",
        }
    }

    /// Resolves a loosely supplied selector.
    ///
    /// Absent or unrecognized selectors fall back to [`Network::Mainnet`]
    /// instead of failing. Use [`str::parse`] when an unknown name should be
    /// an error.
    #[must_use]
    pub fn from_selector(selector: Option<&str>) -> Self {
        selector
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown network name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownNetwork(s.to_string()))
    }
}
