use crate::client::{EtherscanClient, Result};
use crate::params::{IntoParams, Params};
use crate::types::{BlockType, PageOptions, Tag, TransactionOptions};
use serde_json::Value;

const MODULE: &str = "account";

/// Endpoints of the `account` module.
#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    client: &'a EtherscanClient,
}

impl<'a> Account<'a> {
    pub(crate) fn new(client: &'a EtherscanClient) -> Self {
        Self { client }
    }

    /// Ether balance of a single address.
    pub async fn balance(&self, address: impl Into<String>, tag: Option<Tag>) -> Result<Value> {
        let params = Params::new()
            .with("address", address.into())
            .with("tag", tag);
        self.client.call(MODULE, "balance", params).await
    }

    /// Ether balances of several addresses in one call.
    pub async fn balance_multi<I, S>(&self, addresses: I, tag: Option<Tag>) -> Result<Value>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let addresses: Vec<String> = addresses.into_iter().map(Into::into).collect();
        let params = Params::new().with("address", addresses).with("tag", tag);
        self.client.call(MODULE, "balancemulti", params).await
    }

    /// Normal transactions sent from or to `address`.
    pub async fn normal_transactions(
        &self,
        address: impl Into<String>,
        options: TransactionOptions,
    ) -> Result<Value> {
        self.client
            .call(MODULE, "txlist", with_address(address, options))
            .await
    }

    /// Internal transactions involving `address`.
    pub async fn internal_transactions(
        &self,
        address: impl Into<String>,
        options: TransactionOptions,
    ) -> Result<Value> {
        self.client
            .call(MODULE, "txlistinternal", with_address(address, options))
            .await
    }

    /// Internal transactions performed within one transaction.
    pub async fn internal_transactions_by_hash(
        &self,
        tx_hash: impl Into<String>,
    ) -> Result<Value> {
        let params = Params::new().with("txhash", tx_hash.into());
        self.client.call(MODULE, "txlistinternal", params).await
    }

    /// Internal transactions within a block range.
    pub async fn internal_transactions_by_block_range(
        &self,
        options: TransactionOptions,
    ) -> Result<Value> {
        self.client.call(MODULE, "txlistinternal", options).await
    }

    /// ERC-20 transfers of `contract_address` involving `address`.
    pub async fn erc20_token_events(
        &self,
        address: impl Into<String>,
        contract_address: impl Into<String>,
        options: TransactionOptions,
    ) -> Result<Value> {
        let params = token_params(address, contract_address, options);
        self.client.call(MODULE, "tokentx", params).await
    }

    /// ERC-721 transfers of `contract_address` involving `address`.
    pub async fn erc721_token_events(
        &self,
        address: impl Into<String>,
        contract_address: impl Into<String>,
        options: TransactionOptions,
    ) -> Result<Value> {
        let params = token_params(address, contract_address, options);
        self.client.call(MODULE, "tokennfttx", params).await
    }

    /// ERC-1155 transfers of `contract_address` involving `address`.
    pub async fn erc1155_token_events(
        &self,
        address: impl Into<String>,
        contract_address: impl Into<String>,
        options: TransactionOptions,
    ) -> Result<Value> {
        let params = token_params(address, contract_address, options);
        self.client.call(MODULE, "token1155tx", params).await
    }

    /// Blocks validated by `address`.
    pub async fn validated_blocks(
        &self,
        address: impl Into<String>,
        block_type: BlockType,
        options: PageOptions,
    ) -> Result<Value> {
        let mut params = Params::new()
            .with("address", address.into())
            .with("blocktype", block_type);
        params.extend(options.into_params());
        self.client.call(MODULE, "getminedblocks", params).await
    }

    /// Beacon chain withdrawals credited to `address`.
    pub async fn beacon_chain_withdrawals(
        &self,
        address: impl Into<String>,
        options: TransactionOptions,
    ) -> Result<Value> {
        self.client
            .call(MODULE, "txsBeaconWithdrawal", with_address(address, options))
            .await
    }

    /// Ether balance of `address` at block `block_no` (PRO tier).
    pub async fn historical_balance(
        &self,
        address: impl Into<String>,
        block_no: u64,
    ) -> Result<Value> {
        let params = Params::new()
            .with("address", address.into())
            .with("blockno", block_no);
        self.client.call(MODULE, "balancehistory", params).await
    }
}

fn with_address(address: impl Into<String>, options: TransactionOptions) -> Params {
    let mut params = Params::new().with("address", address.into());
    params.extend(options.into_params());
    params
}

fn token_params(
    address: impl Into<String>,
    contract_address: impl Into<String>,
    options: TransactionOptions,
) -> Params {
    let mut params = Params::new()
        .with("address", address.into())
        .with("contractaddress", contract_address.into());
    params.extend(options.into_params());
    params
}
