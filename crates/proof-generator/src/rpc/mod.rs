use async_trait::async_trait;
use ethereum_types::{H160, H256};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use eth_header_rlp::RpcBlockHeader;

/// JSON-RPC error code for a method the node does not serve.
const METHOD_NOT_FOUND: i64 = -32601;

/// Represents errors surfaced by the JSON-RPC transport layer.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Represents an error from the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Represents an error object returned by the node.
    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc { code: i64, message: String },

    /// Represents a response that does not have the expected shape.
    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// True when the node reported the JSON-RPC "method not found" code.
    pub fn is_method_not_found(&self) -> bool {
        matches!(
            self,
            RpcError::JsonRpc {
                code: METHOD_NOT_FOUND,
                ..
            }
        )
    }
}

/// `eth_getProof` result for one account and one storage key.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RpcProofResponse {
    pub address: String,
    pub balance: String,
    pub code_hash: String,
    pub nonce: String,
    pub storage_hash: String,
    pub account_proof: Vec<String>,
    pub storage_proof: Vec<RpcStorageProof>,
}

#[derive(Deserialize, Debug)]
pub struct RpcStorageProof {
    pub key: String,
    pub value: String,
    pub proof: Vec<String>,
}

/// Ethereum JSON-RPC operations the proof pipeline depends on.
#[async_trait]
pub trait EthereumRpc: Send + Sync {
    /// Fetches the header for `block_number` with transactions omitted.
    async fn get_block_header(&self, block_number: u64) -> Result<RpcBlockHeader, RpcError>;

    /// Fetches the node's own RLP encoding of the header
    /// (`debug_getRawHeader`).
    async fn get_raw_header(&self, block_number: u64) -> Result<Vec<u8>, RpcError>;

    /// Fetches the account and storage Merkle proofs pinned to
    /// `block_number`.
    async fn get_proof(
        &self,
        address: H160,
        slot_key: H256,
        block_number: u64,
    ) -> Result<RpcProofResponse, RpcError>;
}

/// JSON-RPC client bound to a single endpoint.
///
/// Carries no per-call state, so one clone can serve concurrent in-flight
/// requests.
#[derive(Clone)]
pub struct EthRpcClient {
    client: Client,
    endpoint: String,
}

impl EthRpcClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        EthRpcClient {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1,
        });

        let response: Value = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.get("error") {
            let code = error["code"].as_i64().unwrap_or(0);
            let message = error["message"].as_str().unwrap_or("unknown").to_string();
            return Err(RpcError::JsonRpc { code, message });
        }

        match response.get("result") {
            Some(result) if !result.is_null() => Ok(result.clone()),
            _ => Err(RpcError::InvalidResponse(format!(
                "{} returned no result",
                method
            ))),
        }
    }

    fn parse<T: DeserializeOwned>(method: &str, result: Value) -> Result<T, RpcError> {
        serde_json::from_value(result)
            .map_err(|err| RpcError::InvalidResponse(format!("{}: {}", method, err)))
    }
}

#[async_trait]
impl EthereumRpc for EthRpcClient {
    async fn get_block_header(&self, block_number: u64) -> Result<RpcBlockHeader, RpcError> {
        let block = format!("0x{:x}", block_number);
        let result = self
            .call("eth_getBlockByNumber", json!([block, false]))
            .await?;
        Self::parse("eth_getBlockByNumber", result)
    }

    async fn get_raw_header(&self, block_number: u64) -> Result<Vec<u8>, RpcError> {
        let block = format!("0x{:x}", block_number);
        let result = self.call("debug_getRawHeader", json!([block])).await?;
        let raw = result.as_str().ok_or_else(|| {
            RpcError::InvalidResponse("debug_getRawHeader returned a non-string result".to_string())
        })?;
        hex::decode(raw.trim_start_matches("0x"))
            .map_err(|err| RpcError::InvalidResponse(format!("debug_getRawHeader: {}", err)))
    }

    async fn get_proof(
        &self,
        address: H160,
        slot_key: H256,
        block_number: u64,
    ) -> Result<RpcProofResponse, RpcError> {
        let block = format!("0x{:x}", block_number);
        let address_hex = format!("0x{}", hex::encode(address.as_bytes()));
        let slot_hex = format!("0x{}", hex::encode(slot_key.as_bytes()));
        let result = self
            .call("eth_getProof", json!([address_hex, [slot_hex], block]))
            .await?;
        Self::parse("eth_getProof", result)
    }
}
