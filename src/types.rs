//! Typed parameter records, one per group of endpoints.
//!
//! Each record knows the exact wire names its endpoint expects and turns
//! itself into a [`Params`] bag through [`IntoParams`]. Optional fields left
//! as `None` never reach the query string.

use crate::params::{IntoParams, ParamValue, Params};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Value sent on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for ParamValue {
            fn from(value: $name) -> Self {
                ParamValue::Text(value.as_str().to_string())
            }
        }
    };
}

/// Pre-defined block parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Earliest,
    Pending,
    #[default]
    Latest,
}

wire_enum!(Tag { Earliest => "earliest", Pending => "pending", Latest => "latest" });

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    Asc,
    Desc,
}

wire_enum!(Sort { Asc => "asc", Desc => "desc" });

/// Kind of block credited to a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Canonical blocks.
    Blocks,
    /// Uncle blocks only.
    Uncles,
}

wire_enum!(BlockType { Blocks => "blocks", Uncles => "uncles" });

/// Which side of a timestamp to pick a block from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Closest {
    Before,
    After,
}

wire_enum!(Closest { Before => "before", After => "after" });

/// Boolean operator joining two log topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicOperator {
    And,
    Or,
}

wire_enum!(TopicOperator { And => "and", Or => "or" });

/// Format of submitted source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodeFormat {
    SoliditySingleFile,
    /// Recommended by the explorer.
    #[default]
    SolidityStandardJsonInput,
}

wire_enum!(CodeFormat {
    SoliditySingleFile => "solidity-single-file",
    SolidityStandardJsonInput => "solidity-standard-json-input",
});

// ── Account ─────────────────────────────────────────────────────────────

/// Block range, pagination and ordering for transaction listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionOptions {
    pub start_block: Option<u64>,
    pub end_block: Option<u64>,
    pub page: Option<u32>,
    pub offset: Option<u32>,
    pub sort: Option<Sort>,
}

impl TransactionOptions {
    /// Restricts the listing to `start..=end`.
    #[must_use]
    pub fn blocks(mut self, start: u64, end: u64) -> Self {
        self.start_block = Some(start);
        self.end_block = Some(end);
        self
    }

    #[must_use]
    pub fn paged(mut self, page: u32, offset: u32) -> Self {
        self.page = Some(page);
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub fn sorted(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl IntoParams for TransactionOptions {
    fn into_params(self) -> Params {
        Params::new()
            .with("startblock", self.start_block)
            .with("endblock", self.end_block)
            .with("page", self.page)
            .with("offset", self.offset)
            .with("sort", self.sort)
    }
}

/// Plain pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub page: Option<u32>,
    pub offset: Option<u32>,
}

impl IntoParams for PageOptions {
    fn into_params(self) -> Params {
        Params::new()
            .with("page", self.page)
            .with("offset", self.offset)
    }
}

// ── Stats ───────────────────────────────────────────────────────────────

/// Inclusive day range for the daily statistics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub sort: Option<Sort>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            sort: None,
        }
    }

    #[must_use]
    pub fn sorted(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl IntoParams for DateRange {
    fn into_params(self) -> Params {
        Params::new()
            .with("startdate", self.start.format("%Y-%m-%d").to_string())
            .with("enddate", self.end.format("%Y-%m-%d").to_string())
            .with("sort", self.sort)
    }
}

// ── Logs ────────────────────────────────────────────────────────────────

/// Filter for `logs/getLogs`.
///
/// `fromBlock` and `toBlock` are the only camel-cased names the explorer
/// expects; everything else is lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub from_block: Option<u64>,
    pub to_block: Option<u64>,
    pub page: Option<u32>,
    pub offset: Option<u32>,
    pub topic0: Option<String>,
    pub topic1: Option<String>,
    pub topic2: Option<String>,
    pub topic3: Option<String>,
    pub topic0_1_opr: Option<TopicOperator>,
    pub topic0_2_opr: Option<TopicOperator>,
    pub topic0_3_opr: Option<TopicOperator>,
    pub topic1_2_opr: Option<TopicOperator>,
    pub topic1_3_opr: Option<TopicOperator>,
    pub topic2_3_opr: Option<TopicOperator>,
}

impl LogOptions {
    #[must_use]
    pub fn blocks(mut self, from: u64, to: u64) -> Self {
        self.from_block = Some(from);
        self.to_block = Some(to);
        self
    }

    #[must_use]
    pub fn paged(mut self, page: u32, offset: u32) -> Self {
        self.page = Some(page);
        self.offset = Some(offset);
        self
    }
}

impl IntoParams for LogOptions {
    fn into_params(self) -> Params {
        Params::new()
            .with("fromBlock", self.from_block)
            .with("toBlock", self.to_block)
            .with("page", self.page)
            .with("offset", self.offset)
            .with("topic0", self.topic0)
            .with("topic1", self.topic1)
            .with("topic2", self.topic2)
            .with("topic3", self.topic3)
            .with("topic0_1_opr", self.topic0_1_opr)
            .with("topic0_2_opr", self.topic0_2_opr)
            .with("topic0_3_opr", self.topic0_3_opr)
            .with("topic1_2_opr", self.topic1_2_opr)
            .with("topic1_3_opr", self.topic1_3_opr)
            .with("topic2_3_opr", self.topic2_3_opr)
    }
}

// ── Verification ────────────────────────────────────────────────────────

/// Source code submission for `contract/verifysourcecode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCodeVerification {
    /// Chain to verify on, e.g. `1` for mainnet.
    pub chain_id: u64,
    pub code_format: CodeFormat,
    /// Flattened source or standard-JSON input, matching `code_format`.
    pub source_code: String,
    /// ABI-encoded constructor arguments, if the contract takes any.
    pub constructor_arguments: Option<String>,
    /// e.g. `contracts/Verified.sol:Verified`.
    pub contract_name: String,
    pub contract_address: String,
    /// e.g. `v0.8.26+commit.8a97fa7a`.
    pub compiler_version: String,
    /// Single-file submissions only.
    pub optimization_used: Option<bool>,
    pub runs: Option<u32>,
    pub evm_version: Option<String>,
    pub license_type: Option<u32>,
}

impl SourceCodeVerification {
    /// Standard-JSON submission with every optional field unset.
    pub fn standard_json(
        chain_id: u64,
        contract_address: impl Into<String>,
        contract_name: impl Into<String>,
        compiler_version: impl Into<String>,
        source_code: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            code_format: CodeFormat::SolidityStandardJsonInput,
            source_code: source_code.into(),
            constructor_arguments: None,
            contract_name: contract_name.into(),
            contract_address: contract_address.into(),
            compiler_version: compiler_version.into(),
            optimization_used: None,
            runs: None,
            evm_version: None,
            license_type: None,
        }
    }

    #[must_use]
    pub fn with_constructor_arguments(mut self, args: impl Into<String>) -> Self {
        self.constructor_arguments = Some(args.into());
        self
    }
}

impl IntoParams for SourceCodeVerification {
    fn into_params(self) -> Params {
        Params::new()
            .with("chainid", self.chain_id)
            .with("codeformat", self.code_format)
            .with("sourcecode", self.source_code)
            // misspelling is the explorer's
            .with("constructorarguements", self.constructor_arguments)
            .with("contractname", self.contract_name)
            .with("contractaddress", self.contract_address)
            .with("compilerversion", self.compiler_version)
            .with("optimizationused", self.optimization_used.map(u8::from))
            .with("runs", self.runs)
            .with("evmversion", self.evm_version)
            .with("licensetype", self.license_type)
    }
}

/// Proxy submission for `contract/verifyproxycontract`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyVerification {
    /// Address of the proxy.
    pub address: String,
    /// Implementation the proxy is expected to point at; the explorer
    /// detects it when unset.
    pub expected_implementation: Option<String>,
}

impl ProxyVerification {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            expected_implementation: None,
        }
    }

    #[must_use]
    pub fn expecting(mut self, implementation: impl Into<String>) -> Self {
        self.expected_implementation = Some(implementation.into());
        self
    }
}

impl IntoParams for ProxyVerification {
    fn into_params(self) -> Params {
        Params::new()
            .with("address", self.address)
            .with("expectedimplementation", self.expected_implementation)
    }
}
