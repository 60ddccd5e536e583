use ethers::types::{Address, Block, Bloom, Bytes, H256, H64, U256};
use serde::Serialize;

use crate::utils::{option_u256_decimal, u256_decimal};

/// Block record printed by the `block` command.
///
/// `T` is a transaction hash, or a full transaction object.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRecord<T> {
    pub number: Option<u64>,
    pub hash: Option<H256>,
    pub parent_hash: H256,
    #[serde(serialize_with = "u256_decimal")]
    pub timestamp: U256,
    pub miner: Option<Address>,
    #[serde(serialize_with = "u256_decimal")]
    pub gas_limit: U256,
    #[serde(serialize_with = "u256_decimal")]
    pub gas_used: U256,
    #[serde(serialize_with = "option_u256_decimal")]
    pub base_fee_per_gas: Option<U256>,
    #[serde(serialize_with = "u256_decimal")]
    pub difficulty: U256,
    #[serde(serialize_with = "option_u256_decimal")]
    pub total_difficulty: Option<U256>,
    pub state_root: H256,
    pub transactions_root: H256,
    pub receipts_root: H256,
    pub sha3_uncles: H256,
    pub logs_bloom: Option<Bloom>,
    #[serde(serialize_with = "option_u256_decimal")]
    pub size: Option<U256>,
    pub nonce: Option<H64>,
    pub mix_hash: Option<H256>,
    pub extra_data: Bytes,
    pub uncles: Vec<H256>,
    pub transactions: Vec<T>,
}

impl<T> From<Block<T>> for BlockRecord<T> {
    fn from(block: Block<T>) -> Self {
        BlockRecord {
            number: block.number.map(|n| n.as_u64()),
            hash: block.hash,
            parent_hash: block.parent_hash,
            timestamp: block.timestamp,
            miner: block.author,
            gas_limit: block.gas_limit,
            gas_used: block.gas_used,
            base_fee_per_gas: block.base_fee_per_gas,
            difficulty: block.difficulty,
            total_difficulty: block.total_difficulty,
            state_root: block.state_root,
            transactions_root: block.transactions_root,
            receipts_root: block.receipts_root,
            sha3_uncles: block.uncles_hash,
            logs_bloom: block.logs_bloom,
            size: block.size,
            nonce: block.nonce,
            mix_hash: block.mix_hash,
            extra_data: block.extra_data,
            uncles: block.uncles,
            transactions: block.transactions,
        }
    }
}
