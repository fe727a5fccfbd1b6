use ethereum_types::{H160, H256, U256};
use rlp::RlpStream;

use crate::block_header::BlockHeader;
use crate::error::HeaderError;
use crate::forks::ForkLayout;
use crate::hex::{to_bytes, to_fixed_array, to_h160, to_h256, to_u256};
use crate::rpc_header::RpcBlockHeader;

/// Fully typed block header covering every layout from legacy through
/// Prague.
///
/// The trailing fields are optional and order-sensitive: a field that is
/// absent on the source header stays `None` and is left out of the
/// encoding entirely. Presence is decided per field, never by block
/// number, so headers from chains with their own upgrade schedules encode
/// exactly the fields they carry.
#[derive(Debug, Clone)]
pub struct BlockHeaderFields {
    pub parent_hash: H256,
    pub ommers_hash: H256,
    pub beneficiary: H160,
    pub state_root: H256,
    pub transactions_root: H256,
    pub receipts_root: H256,
    pub logs_bloom: [u8; 256],
    pub difficulty: U256,
    pub number: U256,
    pub gas_limit: U256,
    pub gas_used: U256,
    pub timestamp: U256,
    pub extra_data: Vec<u8>,
    pub mix_hash: H256,
    pub nonce: [u8; 8],
    pub base_fee_per_gas: Option<U256>,
    pub withdrawals_root: Option<H256>,
    pub blob_gas_used: Option<U256>,
    pub excess_blob_gas: Option<U256>,
    pub parent_beacon_block_root: Option<H256>,
    pub requests_hash: Option<H256>,
}

impl BlockHeaderFields {
    /// Number of items the canonical RLP list carries for this header.
    pub fn field_count(&self) -> usize {
        15 + self.base_fee_per_gas.is_some() as usize
            + self.withdrawals_root.is_some() as usize
            + self.blob_gas_used.is_some() as usize
            + self.excess_blob_gas.is_some() as usize
            + self.parent_beacon_block_root.is_some() as usize
            + self.requests_hash.is_some() as usize
    }

    /// The newest layout implied by the trailing fields that are present.
    pub fn fork_layout(&self) -> ForkLayout {
        if self.requests_hash.is_some() {
            ForkLayout::Prague
        } else if self.parent_beacon_block_root.is_some()
            || self.excess_blob_gas.is_some()
            || self.blob_gas_used.is_some()
        {
            ForkLayout::Cancun
        } else if self.withdrawals_root.is_some() {
            ForkLayout::Shanghai
        } else if self.base_fee_per_gas.is_some() {
            ForkLayout::London
        } else {
            ForkLayout::Legacy
        }
    }
}

impl TryFrom<&RpcBlockHeader> for BlockHeaderFields {
    type Error = HeaderError;

    fn try_from(rpc_header: &RpcBlockHeader) -> Result<Self, Self::Error> {
        Ok(BlockHeaderFields {
            parent_hash: to_h256("parentHash", &rpc_header.parent_hash)?,
            ommers_hash: to_h256("sha3Uncles", &rpc_header.sha3_uncles)?,
            beneficiary: to_h160("miner", &rpc_header.miner)?,
            state_root: to_h256("stateRoot", &rpc_header.state_root)?,
            transactions_root: to_h256("transactionsRoot", &rpc_header.transactions_root)?,
            receipts_root: to_h256("receiptsRoot", &rpc_header.receipts_root)?,
            logs_bloom: to_fixed_array::<256>("logsBloom", &rpc_header.logs_bloom)?,
            difficulty: to_u256("difficulty", &rpc_header.difficulty)?,
            number: to_u256("number", &rpc_header.number)?,
            gas_limit: to_u256("gasLimit", &rpc_header.gas_limit)?,
            gas_used: to_u256("gasUsed", &rpc_header.gas_used)?,
            timestamp: to_u256("timestamp", &rpc_header.timestamp)?,
            extra_data: to_bytes("extraData", &rpc_header.extra_data)?,
            mix_hash: to_h256("mixHash", &rpc_header.mix_hash)?,
            nonce: to_fixed_array::<8>("nonce", &rpc_header.nonce)?,
            base_fee_per_gas: opt_u256("baseFeePerGas", &rpc_header.base_fee_per_gas)?,
            withdrawals_root: opt_h256("withdrawalsRoot", &rpc_header.withdrawals_root)?,
            blob_gas_used: opt_u256("blobGasUsed", &rpc_header.blob_gas_used)?,
            excess_blob_gas: opt_u256("excessBlobGas", &rpc_header.excess_blob_gas)?,
            parent_beacon_block_root: opt_h256(
                "parentBeaconBlockRoot",
                &rpc_header.parent_beacon_block_root,
            )?,
            requests_hash: opt_h256("requestsHash", &rpc_header.requests_hash)?,
        })
    }
}

fn opt_u256(field: &'static str, value: &Option<String>) -> Result<Option<U256>, HeaderError> {
    value.as_deref().map(|v| to_u256(field, v)).transpose()
}

fn opt_h256(field: &'static str, value: &Option<String>) -> Result<Option<H256>, HeaderError> {
    value.as_deref().map(|v| to_h256(field, v)).transpose()
}

impl BlockHeader for BlockHeaderFields {
    fn rlp_encode(&self) -> Vec<u8> {
        let mut stream = RlpStream::new_list(self.field_count());
        stream.append(&self.parent_hash);
        stream.append(&self.ommers_hash);
        stream.append(&self.beneficiary);
        stream.append(&self.state_root);
        stream.append(&self.transactions_root);
        stream.append(&self.receipts_root);
        stream.append(&self.logs_bloom.to_vec());
        stream.append(&self.difficulty);
        stream.append(&self.number);
        stream.append(&self.gas_limit);
        stream.append(&self.gas_used);
        stream.append(&self.timestamp);
        stream.append(&self.extra_data);
        stream.append(&self.mix_hash);
        stream.append(&self.nonce.as_slice());
        if let Some(base_fee_per_gas) = self.base_fee_per_gas {
            stream.append(&base_fee_per_gas);
        }
        if let Some(withdrawals_root) = self.withdrawals_root {
            stream.append(&withdrawals_root);
        }
        if let Some(blob_gas_used) = self.blob_gas_used {
            stream.append(&blob_gas_used);
        }
        if let Some(excess_blob_gas) = self.excess_blob_gas {
            stream.append(&excess_blob_gas);
        }
        if let Some(parent_beacon_block_root) = self.parent_beacon_block_root {
            stream.append(&parent_beacon_block_root);
        }
        if let Some(requests_hash) = self.requests_hash {
            stream.append(&requests_hash);
        }
        stream.out().to_vec()
    }
}
