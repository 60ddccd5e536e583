//! For representing a transaction for display.

use ethers::types::{
    Address, Bytes, Transaction as RpcTransaction, TransactionReceipt, H256, U256,
};
use serde::Serialize;
use thiserror::Error;

use crate::utils::{option_u256_decimal, u256_decimal};

#[derive(Debug, Error, PartialEq)]
pub enum TransactionError {
    #[error("raw encoding is not supported for transaction type {0}")]
    UnsupportedRawType(u64),
}

/// Status of a transaction as derived from its block and receipt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub enum TxStatus {
    /// Not yet included in a block (still in the mempool).
    #[default]
    #[serde(rename = "TX_PENDING")]
    Pending,
    /// Included in a block but reverted (e.g., out of gas).
    #[serde(rename = "TX_FAIL")]
    Fail,
    /// Included in a block and executed successfully.
    #[serde(rename = "TX_SUCCESS")]
    Success,
}

impl TxStatus {
    /// Derives the status from the block number and receipt status flag.
    pub fn derive(block_number: Option<u64>, receipt_status: Option<u64>) -> Self {
        match (block_number, receipt_status) {
            (None, _) => TxStatus::Pending,
            (Some(_), Some(0)) => TxStatus::Fail,
            (Some(_), _) => TxStatus::Success,
        }
    }
}

/// Flat transaction record printed by the `tx` command.
///
/// Quantities are decimal strings, hashes and addresses are hex.
#[derive(Clone, Debug, Serialize)]
pub struct Transaction {
    pub hash: H256,
    pub status: TxStatus,
    #[serde(rename = "blockHash")]
    pub block_hash: Option<H256>,
    #[serde(rename = "blockNumber")]
    pub block_number: Option<u64>,
    pub from: Address,
    pub to: Option<Address>,
    #[serde(serialize_with = "u256_decimal")]
    pub value: U256,
    pub gas: u64,
    #[serde(rename = "gasPrice", serialize_with = "option_u256_decimal")]
    pub gas_price: Option<U256>,
    #[serde(rename = "gasTipCap", serialize_with = "option_u256_decimal")]
    pub gas_tip_cap: Option<U256>,
    #[serde(rename = "gasFeeCap", serialize_with = "option_u256_decimal")]
    pub gas_fee_cap: Option<U256>,
    pub nonce: u64,
    #[serde(rename = "positionInBlock")]
    pub index: u64,
    #[serde(rename = "type")]
    pub tx_type: u64,
    pub data: Bytes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<TransactionReceipt>,
    pub v: u64,
    #[serde(serialize_with = "u256_decimal")]
    pub r: U256,
    #[serde(serialize_with = "u256_decimal")]
    pub s: U256,
    /// Source for the raw encoding, not part of the record.
    #[serde(skip)]
    raw: RpcTransaction,
}

impl From<RpcTransaction> for Transaction {
    fn from(tx: RpcTransaction) -> Self {
        // Legacy transactions only have a gas price, which caps both tip and fee.
        let gas_tip_cap = tx.max_priority_fee_per_gas.or(tx.gas_price);
        let gas_fee_cap = tx.max_fee_per_gas.or(tx.gas_price);
        Transaction {
            hash: tx.hash,
            status: TxStatus::default(),
            block_hash: tx.block_hash,
            block_number: tx.block_number.map(|n| n.as_u64()),
            from: tx.from,
            to: tx.to,
            value: tx.value,
            gas: tx.gas.low_u64(),
            gas_price: tx.gas_price.or(tx.max_fee_per_gas),
            gas_tip_cap,
            gas_fee_cap,
            nonce: tx.nonce.low_u64(),
            index: tx.transaction_index.map(|i| i.as_u64()).unwrap_or_default(),
            tx_type: tx.transaction_type.map(|t| t.as_u64()).unwrap_or_default(),
            data: tx.input.clone(),
            receipt: None,
            v: tx.v.as_u64(),
            r: tx.r,
            s: tx.s,
            raw: tx,
        }
    }
}

impl Transaction {
    /// Sets status and position in block from the receipt (if any).
    ///
    /// The receipt index takes precedence over the index used in the lookup.
    pub fn apply_receipt(&mut self, receipt: Option<&TransactionReceipt>) -> &mut Self {
        let receipt_status = receipt.and_then(|r| r.status).map(|s| s.as_u64());
        self.status = TxStatus::derive(self.block_number, receipt_status);
        if let Some(receipt) = receipt {
            self.index = receipt.transaction_index.as_u64();
        }
        self
    }

    /// Attaches the full receipt to the record.
    pub fn with_receipt(&mut self, receipt: TransactionReceipt) -> &mut Self {
        self.receipt = Some(receipt);
        self
    }

    /// The signed transaction as RLP bytes (typed transactions include the type prefix).
    ///
    /// Only legacy, access list (1) and dynamic fee (2) transactions can be encoded.
    pub fn rlp(&self) -> Result<Bytes, TransactionError> {
        match self.tx_type {
            0..=2 => Ok(self.raw.rlp()),
            other => Err(TransactionError::UnsupportedRawType(other)),
        }
    }
}
