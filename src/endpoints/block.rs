use crate::client::{EtherscanClient, Result};
use crate::params::Params;
use crate::types::{Closest, DateRange};
use serde_json::Value;

/// Endpoints of the `block` module, plus the daily block statistics served
/// from `stats`.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    client: &'a EtherscanClient,
}

impl<'a> Block<'a> {
    pub(crate) fn new(client: &'a EtherscanClient) -> Self {
        Self { client }
    }

    /// Block and uncle rewards for block `block_no`.
    pub async fn block_reward(&self, block_no: u64) -> Result<Value> {
        let params = Params::new().with("blockno", block_no);
        self.client.call("block", "getblockreward", params).await
    }

    /// Estimated seconds until block `block_no` is mined.
    pub async fn block_countdown(&self, block_no: u64) -> Result<Value> {
        let params = Params::new().with("blockno", block_no);
        self.client.call("block", "getblockcountdown", params).await
    }

    /// Block mined at `timestamp` (Unix seconds).
    pub async fn block_number_by_timestamp(
        &self,
        timestamp: u64,
        closest: Option<Closest>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("timestamp", timestamp)
            .with("closest", closest);
        self.client.call("block", "getblocknobytime", params).await
    }

    // ── Daily statistics ─────────────────────────────────────────

    pub async fn daily_avg_block_size(&self, range: DateRange) -> Result<Value> {
        self.client.call("stats", "dailyavgblocksize", range).await
    }

    pub async fn daily_block_count(&self, range: DateRange) -> Result<Value> {
        self.client.call("stats", "dailyblkcount", range).await
    }

    pub async fn daily_block_rewards(&self, range: DateRange) -> Result<Value> {
        self.client.call("stats", "dailyblockrewards", range).await
    }

    pub async fn daily_avg_block_time(&self, range: DateRange) -> Result<Value> {
        self.client.call("stats", "dailyavgblocktime", range).await
    }

    pub async fn daily_uncle_block_count(&self, range: DateRange) -> Result<Value> {
        self.client.call("stats", "dailyuncleblkcount", range).await
    }
}
