use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::query::BlockId;

/// Envelope for every response. A null `result` is kept as `None` so the caller can
/// distinguish "not found" from a malformed body.
///
/// `id` is null in replies to requests the node could not parse.
#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct JsonRpcResponse<T> {
    id: Option<Value>,
    jsonrpc: String,
    pub(crate) result: Option<T>,
    pub(crate) error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize, Serialize)]
pub(crate) struct JsonRpcError {
    pub(crate) code: i64,
    pub(crate) message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct JsonRpcRequest {
    jsonrpc: String,
    pub(crate) method: String,
    params: Vec<Value>,
    id: u64,
}

impl JsonRpcRequest {
    fn new(method: &str, params: Vec<Value>) -> Self {
        JsonRpcRequest {
            jsonrpc: "2.0".to_owned(),
            method: method.to_owned(),
            params,
            id: 1,
        }
    }
}

/// Generates a JSON-RPC request for eth_blockNumber.
pub(crate) fn block_number() -> JsonRpcRequest {
    JsonRpcRequest::new("eth_blockNumber", vec![])
}

/// Generates a JSON-RPC request for eth_getTransactionByHash for
/// the given transaction.
pub(crate) fn get_transaction_by_hash(hash: &H256) -> JsonRpcRequest {
    JsonRpcRequest::new("eth_getTransactionByHash", vec![json!(hash)])
}

/// Generates a JSON-RPC request for eth_getTransactionByBlockHashAndIndex.
pub(crate) fn get_transaction_by_block_hash_and_index(
    block_hash: &H256,
    index: u64,
) -> JsonRpcRequest {
    JsonRpcRequest::new(
        "eth_getTransactionByBlockHashAndIndex",
        vec![json!(block_hash), json!(format!("0x{index:x}"))],
    )
}

/// Generates a JSON-RPC request for eth_getTransactionByBlockNumberAndIndex.
pub(crate) fn get_transaction_by_block_number_and_index(
    block_number: u64,
    index: u64,
) -> JsonRpcRequest {
    JsonRpcRequest::new(
        "eth_getTransactionByBlockNumberAndIndex",
        vec![
            json!(format!("0x{block_number:x}")),
            json!(format!("0x{index:x}")),
        ],
    )
}

/// Generates a JSON-RPC request for eth_getTransactionReceipt for
/// the given transaction.
pub(crate) fn get_transaction_receipt(hash: &H256) -> JsonRpcRequest {
    JsonRpcRequest::new("eth_getTransactionReceipt", vec![json!(hash)])
}

/// Generates a JSON-RPC request for eth_getBlockByHash or eth_getBlockByNumber
/// depending on how the block is identified (e.g., "0xabc", "latest", "finalized").
///
/// With `full_transactions`, the block holds transaction objects instead of hashes.
pub(crate) fn get_block(block: &BlockId, full_transactions: bool) -> JsonRpcRequest {
    let method = match block {
        BlockId::Hash(_) => "eth_getBlockByHash",
        BlockId::Number(_) | BlockId::Tag(_) => "eth_getBlockByNumber",
    };
    JsonRpcRequest::new(
        method,
        vec![json!(block.to_rpc_param()), Value::Bool(full_transactions)],
    )
}

/// Generates a JSON-RPC request for eth_getBalance for
/// the given account at the specified block.
///
/// A block hash is passed as an EIP-1898 object.
pub(crate) fn get_balance(address: &Address, block: &BlockId) -> JsonRpcRequest {
    let block = match block {
        BlockId::Hash(hash) => json!({ "blockHash": hash }),
        BlockId::Number(_) | BlockId::Tag(_) => json!(block.to_rpc_param()),
    };
    JsonRpcRequest::new("eth_getBalance", vec![json!(address), block])
}
