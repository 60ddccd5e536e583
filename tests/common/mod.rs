//! Node responses shared by the command tests.
#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const TX_HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
pub const BLOCK_HASH: &str = "0x1d59ff54b1eb26b013ce3cb5fc9dab3705b415a67127a003c3e61eb445bb8df2";
pub const ACCOUNT: &str = "0xa7d9ddbe1f17865597fbd27ec712455208b6b76d";

const EMPTY_BLOOM: &str = "0x00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";

/// Legacy transfer mined in block 6139707 at index 65.
pub fn legacy_tx() -> Value {
    json!({
        "blockHash": BLOCK_HASH,
        "blockNumber": "0x5daf3b",
        "from": ACCOUNT,
        "gas": "0xc350",
        "gasPrice": "0x4a817c800",
        "hash": TX_HASH,
        "input": "0x68656c6c6f21",
        "nonce": "0x15",
        "to": "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb",
        "transactionIndex": "0x41",
        "value": "0xf3dbb76162000",
        "v": "0x25",
        "r": "0x1b5e176d927f8e9ab405058b2d2457392da3e20f328b16ddabcebc33eaac5fea",
        "s": "0x4ba69724e8f69de52f0125ad8b3c5c2cef33019bac3249e2c0a2192766d1721c"
    })
}

/// The legacy transaction before it was included in a block.
pub fn pending_tx() -> Value {
    as_pending(legacy_tx())
}

/// EIP-1559 (type 2) variant of the legacy transfer.
pub fn dynamic_fee_tx() -> Value {
    let mut tx = legacy_tx();
    tx["type"] = json!("0x2");
    tx["chainId"] = json!("0x1");
    tx["maxFeePerGas"] = json!("0x77359400");
    tx["maxPriorityFeePerGas"] = json!("0x3b9aca00");
    tx["accessList"] = json!([]);
    tx["v"] = json!("0x1");
    tx
}

/// EIP-4844 (type 3) variant of the legacy transfer.
pub fn blob_tx() -> Value {
    let mut tx = dynamic_fee_tx();
    tx["type"] = json!("0x3");
    tx["maxFeePerBlobGas"] = json!("0x1");
    tx["blobVersionedHashes"] =
        json!(["0x01a915e4d060149eb4365960e6a7a45f334393093061116b197e3240065ff2d8"]);
    tx
}

/// Removes the block fields, as for a transaction still in the mempool.
pub fn as_pending(mut tx: Value) -> Value {
    tx["blockHash"] = Value::Null;
    tx["blockNumber"] = Value::Null;
    tx["transactionIndex"] = Value::Null;
    tx
}

pub fn receipt(status: &str, index: &str) -> Value {
    json!({
        "blockHash": BLOCK_HASH,
        "blockNumber": "0x5daf3b",
        "contractAddress": null,
        "cumulativeGasUsed": "0x33bc",
        "effectiveGasPrice": "0x4a817c800",
        "from": ACCOUNT,
        "gasUsed": "0x4dc",
        "logs": [],
        "logsBloom": EMPTY_BLOOM,
        "status": status,
        "to": "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb",
        "transactionHash": TX_HASH,
        "transactionIndex": index,
        "type": "0x0"
    })
}

pub fn block(transactions: Vec<Value>) -> Value {
    json!({
        "baseFeePerGas": "0x7",
        "difficulty": "0x0",
        "extraData": "0x",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0x5208",
        "hash": BLOCK_HASH,
        "logsBloom": EMPTY_BLOOM,
        "miner": "0xf02c1c8e6114b1dbe8937a39260b5b0a374432bb",
        "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "nonce": "0x0000000000000000",
        "number": "0x5daf3b",
        "parentHash": "0x2c0c6e1a9ca6d3d0d2d3b1b8f4f1e7a4b8c1a7d0e9f6c3b2a1d0e9f8c7b6a5d4",
        "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "size": "0x27f",
        "stateRoot": "0xd7f8974fb5ac78d9ac099b9ad5018bedc2ce0a72dad1827a1709da30580f0544",
        "timestamp": "0x64b5e8c3",
        "totalDifficulty": "0x0",
        "transactions": transactions,
        "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "uncles": []
    })
}

/// Wraps a result in a JSON-RPC response body.
pub fn rpc_result(result: Value) -> String {
    json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string()
}

/// Responds to any request whose body contains `partial` (e.g., a method and params).
pub async fn mock_call(server: &mut ServerGuard, partial: Value, result: Value) -> Mock {
    mock_call_times(server, partial, result, 1).await
}

/// As for [`mock_call`], expecting `hits` requests when asserted.
pub async fn mock_call_times(
    server: &mut ServerGuard,
    partial: Value,
    result: Value,
    hits: usize,
) -> Mock {
    server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(partial))
        .expect(hits)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(rpc_result(result))
        .create_async()
        .await
}

/// Fails the test (on assert) if any request reaches the node.
pub async fn mock_no_calls(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await
}
