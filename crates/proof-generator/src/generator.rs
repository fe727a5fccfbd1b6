use ethereum_types::{H160, H256, U256};
use rlp::RlpStream;
use tracing::{error, info};

use eth_header_rlp::hex::{encode_prefixed, to_h256, to_u256};
use eth_header_rlp::{keccak256, BlockHeaderFields};

use crate::error::ProofError;
use crate::resolver::resolve_header_rlp;
use crate::rpc::{EthRpcClient, EthereumRpc, RpcError};
use crate::types::{ProofRequest, StorageProofResult};

/// Builds a client for the request's endpoint and produces the proof
/// bundle in one shot.
pub async fn generate(request: &ProofRequest) -> Result<StorageProofResult, ProofError> {
    ProofGenerator::new(request.rpc_endpoint.clone())
        .generate_for(request.block_number, request.account, request.slot)
        .await
}

/// Proof pipeline bound to one RPC collaborator, reusable across calls.
pub struct ProofGenerator<R> {
    rpc: R,
}

impl ProofGenerator<EthRpcClient> {
    pub fn new(endpoint: impl Into<String>) -> Self {
        ProofGenerator {
            rpc: EthRpcClient::new(endpoint),
        }
    }
}

impl<R: EthereumRpc> ProofGenerator<R> {
    pub fn with_rpc(rpc: R) -> Self {
        ProofGenerator { rpc }
    }

    /// Produces the storage-proof bundle for `slot` of `account` at
    /// `block_number`.
    ///
    /// The header hash and state root are recomputed locally; a bundle is
    /// only returned when both match what the node reported.
    pub async fn generate_for(
        &self,
        block_number: u64,
        account: H160,
        slot: U256,
    ) -> Result<StorageProofResult, ProofError> {
        let rpc_header = self.rpc.get_block_header(block_number).await?;
        let fields = BlockHeaderFields::try_from(&rpc_header)?;
        info!(
            "Fetched header for block {} ({} layout)",
            block_number,
            fields.fork_layout()
        );

        let (header_rlp, source) = resolve_header_rlp(&self.rpc, block_number, &fields).await;
        info!(
            "Resolved header RLP from the {} path ({} bytes)",
            source,
            header_rlp.len()
        );

        let reported_hash = to_h256("hash", &rpc_header.hash)?;
        let computed_hash = keccak256(&header_rlp);
        if computed_hash != reported_hash {
            error!(
                "Block {} hash mismatch. Expected: {}, Computed: {}",
                block_number,
                encode_prefixed(reported_hash.as_bytes()),
                encode_prefixed(computed_hash.as_bytes())
            );
            return Err(ProofError::BlockHashMismatch {
                expected: encode_prefixed(reported_hash.as_bytes()),
                computed: encode_prefixed(computed_hash.as_bytes()),
            });
        }

        let slot_key = slot_to_key(slot);
        let proof = self.rpc.get_proof(account, slot_key, block_number).await?;

        let account_nodes = decode_proof_nodes("accountProof", &proof.account_proof)?;
        let first_node = account_nodes.first().ok_or_else(|| {
            RpcError::InvalidResponse("eth_getProof returned an empty accountProof".to_string())
        })?;
        let computed_root = keccak256(first_node);
        if computed_root != fields.state_root {
            error!(
                "Block {} state root mismatch. Expected: {}, Computed: {}",
                block_number,
                encode_prefixed(fields.state_root.as_bytes()),
                encode_prefixed(computed_root.as_bytes())
            );
            return Err(ProofError::StateRootMismatch {
                expected: encode_prefixed(fields.state_root.as_bytes()),
                computed: encode_prefixed(computed_root.as_bytes()),
            });
        }

        let storage_entry = proof.storage_proof.first().ok_or_else(|| {
            RpcError::InvalidResponse("eth_getProof returned an empty storageProof".to_string())
        })?;
        let storage_nodes = decode_proof_nodes("storageProof", &storage_entry.proof)?;
        if storage_nodes.is_empty() {
            return Err(ProofError::Rpc(RpcError::InvalidResponse(
                "eth_getProof returned an empty storageProof".to_string(),
            )));
        }

        let slot_value = to_u256("storageProof.value", &storage_entry.value)?;

        let send_root = match &rpc_header.send_root {
            Some(value) => Some(encode_prefixed(to_h256("sendRoot", value)?.as_bytes())),
            None => None,
        };

        info!("Storage proof assembled for block {}", block_number);

        Ok(StorageProofResult {
            block_number,
            block_hash: encode_prefixed(computed_hash.as_bytes()),
            state_root: encode_prefixed(fields.state_root.as_bytes()),
            account: encode_prefixed(account.as_bytes()),
            slot: encode_prefixed(slot_key.as_bytes()),
            slot_value: quantity_hex(slot_value),
            rlp_block_header: encode_prefixed(&header_rlp),
            rlp_account_proof: encode_prefixed(&encode_node_list(&account_nodes)),
            rlp_storage_proof: encode_prefixed(&encode_node_list(&storage_nodes)),
            send_root,
        })
    }
}

fn decode_proof_nodes(field: &str, nodes: &[String]) -> Result<Vec<Vec<u8>>, RpcError> {
    nodes
        .iter()
        .map(|node| {
            hex::decode(node.trim_start_matches("0x"))
                .map_err(|err| RpcError::InvalidResponse(format!("{}: {}", field, err)))
        })
        .collect()
}

/// RLP list of byte-string items, the envelope downstream verifiers parse.
fn encode_node_list(nodes: &[Vec<u8>]) -> Vec<u8> {
    let mut stream = RlpStream::new_list(nodes.len());
    for node in nodes {
        stream.append(node);
    }
    stream.out().to_vec()
}

/// Left-pads the slot index to the full 32-byte storage key.
fn slot_to_key(slot: U256) -> H256 {
    let mut bytes = [0u8; 32];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = slot.byte(31 - i);
    }
    H256::from_slice(&bytes)
}

/// Minimal-width quantity hex, zero rendered as `0x00`.
fn quantity_hex(value: U256) -> String {
    let key = slot_to_key(value);
    let first = key.as_bytes().iter().position(|b| *b != 0).unwrap_or(31);
    encode_prefixed(&key.as_bytes()[first..])
}
