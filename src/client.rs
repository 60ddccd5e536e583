//! For calling a node over HTTP JSON-RPC.
use ethers::types::{Address, Block, Transaction, TransactionReceipt, H256, U256, U64};
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::{
    query::{BlockId, TxQuery},
    rpc::{
        block_number, get_balance, get_block, get_transaction_by_block_hash_and_index,
        get_transaction_by_block_number_and_index, get_transaction_by_hash,
        get_transaction_receipt, JsonRpcRequest, JsonRpcResponse,
    },
};

/// Signature fields a node must return for a mined or pooled transaction.
const SIGNATURE_FIELDS: [&str; 3] = ["v", "r", "s"];

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid rpc url: please provide a valid rpc url (e.g. https://nodes.sequence.app/mainnet)")]
    InvalidRpcUrl,
    #[error("transaction not found")]
    TxNotFound,
    #[error("block not found")]
    BlockNotFound,
    #[error("server returned transaction without signature")]
    TxWithoutSignature,
    #[error("server returned no result for {0}")]
    EmptyResult(String),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("Reqwest error {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("serde_json error {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

/// A node endpoint. Holds a validated url, no connection is made until a call.
#[derive(Clone, Debug)]
pub struct NodeClient {
    url: Url,
    client: Client,
}

impl NodeClient {
    /// Validates the url as an absolute http(s) url.
    pub fn new(url: &str) -> Result<Self, ClientError> {
        let url = Url::parse(url).map_err(|_| ClientError::InvalidRpcUrl)?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(ClientError::InvalidRpcUrl);
        }
        Ok(NodeClient {
            url,
            client: Client::new(),
        })
    }

    /// Latest block number via eth_blockNumber.
    pub async fn block_number(&self) -> Result<u64, ClientError> {
        let request = block_number();
        let number: U64 = self
            .call::<U64>(&request)
            .await?
            .ok_or(ClientError::EmptyResult(request.method))?;
        Ok(number.as_u64())
    }

    /// Gets a transaction by hash or by position in a block.
    ///
    /// Errors if the node does not know the transaction, or returns one without
    /// signature values.
    pub async fn transaction(&self, query: &TxQuery) -> Result<Transaction, ClientError> {
        let request = match query {
            TxQuery::Hash(hash) => get_transaction_by_hash(hash),
            TxQuery::BlockHashAndIndex { block_hash, index } => {
                get_transaction_by_block_hash_and_index(block_hash, *index)
            }
            TxQuery::BlockNumberAndIndex {
                block_number,
                index,
            } => get_transaction_by_block_number_and_index(*block_number, *index),
        };
        let raw = self
            .call::<Value>(&request)
            .await?
            .ok_or(ClientError::TxNotFound)?;
        if !has_signature(&raw) {
            return Err(ClientError::TxWithoutSignature);
        }
        Ok(serde_json::from_value(raw)?)
    }

    /// Gets the receipt for a transaction. None if the transaction is not yet
    /// included in a block.
    pub async fn transaction_receipt(
        &self,
        hash: &H256,
    ) -> Result<Option<TransactionReceipt>, ClientError> {
        self.call(&get_transaction_receipt(hash)).await
    }

    /// Gets a block with transaction hashes only.
    pub async fn block(&self, block: &BlockId) -> Result<Block<H256>, ClientError> {
        self.call(&get_block(block, false))
            .await?
            .ok_or(ClientError::BlockNotFound)
    }

    /// Gets a block with full transaction objects.
    pub async fn block_with_transactions(
        &self,
        block: &BlockId,
    ) -> Result<Block<Transaction>, ClientError> {
        self.call(&get_block(block, true))
            .await?
            .ok_or(ClientError::BlockNotFound)
    }

    /// Balance in wei of an account at a block.
    pub async fn balance(&self, address: &Address, block: &BlockId) -> Result<U256, ClientError> {
        let request = get_balance(address, block);
        self.call(&request)
            .await?
            .ok_or(ClientError::EmptyResult(request.method))
    }

    /// Posts a request and unwraps the JSON-RPC envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        request: &JsonRpcRequest,
    ) -> Result<Option<T>, ClientError> {
        debug!("Calling {} at {}", request.method, self.url);
        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<JsonRpcResponse<T>>()
            .await?;
        if let Some(error) = response.error {
            return Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            });
        }
        Ok(response.result)
    }
}

/// Checks that the node returned v, r and s for the transaction.
fn has_signature(raw: &Value) -> bool {
    SIGNATURE_FIELDS
        .iter()
        .all(|field| raw.get(field).map_or(false, |value| !value.is_null()))
}
