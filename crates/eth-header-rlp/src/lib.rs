pub mod block_header;
pub mod error;
pub mod fields;
pub mod forks;
pub mod hex;
pub mod rpc_header;

pub use block_header::{keccak256, BlockHeader};
pub use error::HeaderError;
pub use fields::BlockHeaderFields;
pub use forks::ForkLayout;
pub use rpc_header::RpcBlockHeader;
