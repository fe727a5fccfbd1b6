use ethereum_types::H256;
use sha3::{Digest, Keccak256};

/// Computes the keccak-256 digest of the given bytes.
pub fn keccak256(bytes: &[u8]) -> H256 {
    H256::from_slice(&Keccak256::digest(bytes))
}

/// A trait defining common behavior for block headers.
pub trait BlockHeader {
    /// Encodes the block header using RLP encoding.
    fn rlp_encode(&self) -> Vec<u8>;

    /// Computes the hash of the block header.
    fn compute_hash(&self) -> H256 {
        keccak256(&self.rlp_encode())
    }
}
