pub mod error;
pub mod generator;
pub mod resolver;
pub mod rpc;
pub mod types;

pub use error::ProofError;
pub use generator::{generate, ProofGenerator};
pub use resolver::{resolve_header_rlp, HeaderSource};
pub use rpc::{EthRpcClient, EthereumRpc, RpcError, RpcProofResponse, RpcStorageProof};
pub use types::{ProofRequest, StorageProofResult};
