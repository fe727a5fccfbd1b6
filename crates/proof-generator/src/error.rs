use thiserror::Error;

use eth_header_rlp::HeaderError;

use crate::rpc::RpcError;

/// Represents errors that can occur while generating a storage proof.
///
/// The mismatch variants carry both sides of the failed comparison as full
/// `0x`-prefixed hex strings.
#[derive(Debug, Error)]
pub enum ProofError {
    /// The resolved header RLP does not hash to the block hash reported by
    /// the node.
    #[error("Block hash mismatch: expected {expected}, computed {computed}")]
    BlockHashMismatch { expected: String, computed: String },

    /// The first account-proof node does not hash to the header's state
    /// root.
    #[error("State root mismatch: expected {expected}, computed {computed}")]
    StateRootMismatch { expected: String, computed: String },

    /// The node does not serve the named RPC method.
    #[error("RPC method not available: {method}")]
    RpcMethodUnavailable { method: String },

    /// Represents malformed header field data.
    #[error("Header error: {0}")]
    Header(#[from] HeaderError),

    /// Represents a transport or response-shape failure.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}
