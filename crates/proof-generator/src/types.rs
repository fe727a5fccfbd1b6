use ethereum_types::{H160, U256};
use serde::{Deserialize, Serialize};

/// A single storage-proof request: which slot of which account at which
/// block, resolved against which endpoint.
#[derive(Debug, Clone)]
pub struct ProofRequest {
    pub rpc_endpoint: String,
    pub account: H160,
    pub slot: U256,
    pub block_number: u64,
}

/// The portable proof bundle.
///
/// Serialized field names and hex formatting are consumed by downstream
/// verifiers and must stay stable. All hash and byte fields are canonical
/// lowercase `0x`-prefixed even-length hex; `slot` is the full 32-byte key
/// and `slot_value` the minimal-width quantity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageProofResult {
    pub block_number: u64,
    pub block_hash: String,
    pub state_root: String,
    pub account: String,
    pub slot: String,
    pub slot_value: String,
    pub rlp_block_header: String,
    pub rlp_account_proof: String,
    pub rlp_storage_proof: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_root: Option<String>,
}
