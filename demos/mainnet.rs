//! Example: Query Etherscan for various information.
//!
//! Run with: ETHERSCAN_API_KEY=... cargo run --example mainnet
//! Set ETHERSCAN_NETWORK=sepolia to target a testnet.

use etherscan_client::types::{Closest, Sort, Tag, TransactionOptions};
use etherscan_client::{ClientConfig, EtherscanClient, client::Result};

const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env()?;
    println!("=== Etherscan client ({}) ===\n", config.network());
    let client = EtherscanClient::new(config);

    // 1. Balance
    println!("1. Fetching balance...");
    let balance = client.account().balance(VITALIK, Some(Tag::Latest)).await?;
    println!("   Balance (wei): {}", balance["result"]);
    println!();

    // 2. Latest transactions
    println!("2. Fetching the five most recent transactions...");
    let options = TransactionOptions::default().paged(1, 5).sorted(Sort::Desc);
    let txs = client.account().normal_transactions(VITALIK, options).await?;
    if let Some(list) = txs["result"].as_array() {
        for tx in list {
            println!("   {} -> {} ({} wei)", tx["from"], tx["to"], tx["value"]);
        }
    } else {
        println!("   {}", txs["message"]);
    }
    println!();

    // 3. Block by timestamp
    println!("3. Fetching block mined at 2020-01-10 06:42:04 UTC...");
    let block = client
        .block()
        .block_number_by_timestamp(1_578_638_524, Some(Closest::Before))
        .await?;
    println!("   Block number: {}", block["result"]);
    println!();

    // 4. Contract ABI
    println!("4. Fetching USDT contract ABI...");
    let abi = client.contract().abi(USDT).await?;
    let len = abi["result"].as_str().map_or(0, str::len);
    println!("   ABI length: {len} bytes");

    println!("\n=== Done! ===");
    Ok(())
}
