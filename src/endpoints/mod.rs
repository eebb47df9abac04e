//! Endpoint groups, one handle per API module.
//!
//! Handles borrow the [`EtherscanClient`](crate::EtherscanClient) they come
//! from and hold no state of their own.

mod account;
mod block;
mod contract;
mod logs;
mod transaction;

pub use account::Account;
pub use block::Block;
pub use contract::Contract;
pub use logs::Logs;
pub use transaction::Transaction;
