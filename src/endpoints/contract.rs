use crate::client::{EtherscanClient, Result};
use crate::params::Params;
use crate::types::{ProxyVerification, SourceCodeVerification};
use serde_json::Value;

const MODULE: &str = "contract";

/// Endpoints of the `contract` module.
///
/// The two `verify_*` submissions are POSTed as form bodies; they return a
/// GUID that can be polled with [`Contract::check_verification_status`] or
/// [`Contract::check_proxy_verification`].
#[derive(Debug, Clone, Copy)]
pub struct Contract<'a> {
    client: &'a EtherscanClient,
}

impl<'a> Contract<'a> {
    pub(crate) fn new(client: &'a EtherscanClient) -> Self {
        Self { client }
    }

    /// ABI of a verified contract.
    pub async fn abi(&self, address: impl Into<String>) -> Result<Value> {
        let params = Params::new().with("address", address.into());
        self.client.call(MODULE, "getabi", params).await
    }

    /// Source code of a verified contract.
    pub async fn source_code(&self, address: impl Into<String>) -> Result<Value> {
        let params = Params::new().with("address", address.into());
        self.client.call(MODULE, "getsourcecode", params).await
    }

    /// Deployer address and creation transaction of up to five contracts.
    pub async fn creator<I, S>(&self, contract_addresses: I) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let addresses: Vec<String> = contract_addresses.into_iter().map(Into::into).collect();
        let params = Params::new().with("contractaddresses", addresses);
        self.client.call(MODULE, "getcontractcreation", params).await
    }

    /// Submits source code for verification.
    pub async fn verify_source_code(&self, submission: SourceCodeVerification) -> Result<Value> {
        self.client
            .submit(MODULE, "verifysourcecode", submission)
            .await
    }

    /// Submits a proxy contract for verification.
    pub async fn verify_proxy_contract(&self, submission: ProxyVerification) -> Result<Value> {
        self.client
            .submit(MODULE, "verifyproxycontract", submission)
            .await
    }

    /// Status of a source code verification request.
    pub async fn check_verification_status(&self, guid: impl Into<String>) -> Result<Value> {
        let params = Params::new().with("guid", guid.into());
        self.client.call(MODULE, "checkverifystatus", params).await
    }

    /// Status of a proxy verification request.
    pub async fn check_proxy_verification(&self, guid: impl Into<String>) -> Result<Value> {
        let params = Params::new().with("guid", guid.into());
        self.client
            .call(MODULE, "checkproxyverification", params)
            .await
    }
}
