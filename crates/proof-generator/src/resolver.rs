use std::fmt;

use tracing::{debug, warn};

use eth_header_rlp::{BlockHeader, BlockHeaderFields};

use crate::error::ProofError;
use crate::rpc::EthereumRpc;

/// Which path produced the header RLP handed to the hash check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSource {
    /// Bytes returned by `debug_getRawHeader`, untouched.
    Raw,
    /// Bytes produced by the field-by-field encoder.
    Manual,
}

impl fmt::Display for HeaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderSource::Raw => write!(f, "raw"),
            HeaderSource::Manual => write!(f, "manual"),
        }
    }
}

/// Resolves the canonical header RLP for `block_number`.
///
/// Asks the node for its own encoding first; a successful answer is
/// authoritative and returned untouched. Any failure falls back to
/// encoding the already-fetched fields locally. The fallback never fails
/// and the fast-path error is logged, not propagated.
pub async fn resolve_header_rlp<R: EthereumRpc>(
    rpc: &R,
    block_number: u64,
    fields: &BlockHeaderFields,
) -> (Vec<u8>, HeaderSource) {
    match rpc.get_raw_header(block_number).await {
        Ok(raw) => (raw, HeaderSource::Raw),
        Err(err) => {
            if err.is_method_not_found() {
                debug!(
                    "{}",
                    ProofError::RpcMethodUnavailable {
                        method: "debug_getRawHeader".to_string(),
                    }
                );
            } else {
                warn!("debug_getRawHeader failed, encoding header locally: {}", err);
            }
            (fields.rlp_encode(), HeaderSource::Manual)
        }
    }
}
