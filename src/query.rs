//! Classifies positional command arguments into the lookups they describe.
use std::{fmt::Display, str::FromStr};

use ethers::types::{Address, H256};
use log::warn;
use thiserror::Error;

use crate::utils::{is_valid_address, is_valid_hash, parse_int};

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("invalid hash")]
    InvalidHash,
    #[error("invalid arguments")]
    InvalidArgs,
    #[error("invalid block height, tag or hash")]
    InvalidBlockInfo,
    #[error("invalid address")]
    InvalidAddress,
}

/// The transaction a `tx` command refers to.
#[derive(Clone, Debug, PartialEq)]
pub enum TxQuery {
    Hash(H256),
    BlockHashAndIndex { block_hash: H256, index: u64 },
    BlockNumberAndIndex { block_number: u64, index: u64 },
}

impl TxQuery {
    /// Resolves one or two positional arguments.
    ///
    /// - `<hash>`: a transaction hash.
    /// - `<block_hash> <index>` or `<index> <block_hash>`.
    /// - `<block_number> <index>` in either order. The larger integer is taken
    /// to be the block number.
    pub fn from_args<T: AsRef<str>>(args: &[T]) -> Result<Self, QueryError> {
        match args {
            [hash] => {
                let hash = hash.as_ref();
                if !is_valid_hash(hash) {
                    return Err(QueryError::InvalidHash);
                }
                Ok(TxQuery::Hash(to_h256(hash)?))
            }
            [first, second] => from_pair(first.as_ref(), second.as_ref()),
            _ => Err(QueryError::InvalidArgs),
        }
    }
}

fn from_pair(first: &str, second: &str) -> Result<TxQuery, QueryError> {
    match (parse_int(first), parse_int(second)) {
        (None, Some(index)) if is_valid_hash(first) => Ok(TxQuery::BlockHashAndIndex {
            block_hash: to_h256(first)?,
            index,
        }),
        (Some(index), None) if is_valid_hash(second) => Ok(TxQuery::BlockHashAndIndex {
            block_hash: to_h256(second)?,
            index,
        }),
        (Some(a), Some(b)) => {
            let (block_number, index) = if a >= b { (a, b) } else { (b, a) };
            warn!(
                "Both arguments are integers, assuming block number {block_number} and index {index}"
            );
            Ok(TxQuery::BlockNumberAndIndex {
                block_number,
                index,
            })
        }
        _ => Err(QueryError::InvalidArgs),
    }
}

impl Display for TxQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxQuery::Hash(hash) => write!(f, "transaction {hash:?}"),
            TxQuery::BlockHashAndIndex { block_hash, index } => {
                write!(f, "transaction {index} of block {block_hash:?}")
            }
            TxQuery::BlockNumberAndIndex {
                block_number,
                index,
            } => write!(f, "transaction {index} of block {block_number}"),
        }
    }
}

/// Named blocks accepted in place of a block number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockTag {
    Latest,
    Earliest,
    Pending,
    Safe,
    Finalized,
}

impl BlockTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockTag::Latest => "latest",
            BlockTag::Earliest => "earliest",
            BlockTag::Pending => "pending",
            BlockTag::Safe => "safe",
            BlockTag::Finalized => "finalized",
        }
    }
}

impl FromStr for BlockTag {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(BlockTag::Latest),
            "earliest" => Ok(BlockTag::Earliest),
            "pending" => Ok(BlockTag::Pending),
            "safe" => Ok(BlockTag::Safe),
            "finalized" => Ok(BlockTag::Finalized),
            _ => Err(QueryError::InvalidBlockInfo),
        }
    }
}

/// A block referred to by height, tag or hash.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockId {
    Number(u64),
    Tag(BlockTag),
    Hash(H256),
}

impl BlockId {
    /// The block parameter as it appears in a JSON-RPC request.
    ///
    /// Hashes are only valid for the `*ByHash` methods.
    pub fn to_rpc_param(&self) -> String {
        match self {
            BlockId::Number(number) => format!("0x{number:x}"),
            BlockId::Tag(tag) => tag.as_str().to_string(),
            BlockId::Hash(hash) => format!("{hash:?}"),
        }
    }
}

impl FromStr for BlockId {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(number) = parse_int(s) {
            return Ok(BlockId::Number(number));
        }
        if is_valid_hash(s) {
            return Ok(BlockId::Hash(to_h256(s)?));
        }
        Ok(BlockId::Tag(s.parse()?))
    }
}

impl Default for BlockId {
    fn default() -> Self {
        BlockId::Tag(BlockTag::Latest)
    }
}

/// Parses a 0x-prefixed account address.
pub fn parse_address(s: &str) -> Result<Address, QueryError> {
    if !is_valid_address(s) {
        return Err(QueryError::InvalidAddress);
    }
    Address::from_str(s).map_err(|_| QueryError::InvalidAddress)
}

fn to_h256(s: &str) -> Result<H256, QueryError> {
    H256::from_str(s).map_err(|_| QueryError::InvalidHash)
}
