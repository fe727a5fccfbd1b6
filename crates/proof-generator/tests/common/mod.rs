#![allow(dead_code)]

use ethereum_types::{H160, H256};
use rlp::RlpStream;
use serde_json::{json, Value};

use eth_header_rlp::hex::encode_prefixed;
use eth_header_rlp::{keccak256, BlockHeader, BlockHeaderFields, RpcBlockHeader};

pub const BLOCK_NUMBER: u64 = 17_120_000;

/// Self-consistent chain state for mocked runs: the header's state root is
/// the hash of the first account node, and the reported block hash is the
/// hash of the encoded header.
pub struct ChainFixture {
    pub header_json: Value,
    pub header_rlp: Vec<u8>,
    pub block_hash: H256,
    pub state_root: H256,
    pub account_nodes: Vec<Vec<u8>>,
    pub storage_nodes: Vec<Vec<u8>>,
    pub storage_value: String,
}

pub fn account() -> H160 {
    "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2"
        .parse()
        .unwrap()
}

/// A 17-item branch node with pseudo-random child hashes.
pub fn branch_node(seed: &str) -> Vec<u8> {
    let mut stream = RlpStream::new_list(17);
    for i in 0..16 {
        let child = keccak256(format!("{}-{}", seed, i).as_bytes());
        stream.append(&child);
    }
    stream.append_empty_data();
    stream.out().to_vec()
}

/// A two-item leaf node.
pub fn leaf_node(seed: &str) -> Vec<u8> {
    let path = keccak256(format!("{}-path", seed).as_bytes());
    let value = keccak256(format!("{}-value", seed).as_bytes());
    let mut stream = RlpStream::new_list(2);
    stream.append(&path.as_bytes()[..31].to_vec());
    stream.append(&value.as_bytes().to_vec());
    stream.out().to_vec()
}

pub fn chain_fixture() -> ChainFixture {
    let account_nodes = vec![branch_node("account-branch"), leaf_node("account-leaf")];
    let storage_nodes = vec![branch_node("storage-branch"), leaf_node("storage-leaf")];
    let state_root = keccak256(&account_nodes[0]);

    let mut header_json = json!({
        "hash": format!("0x{}", "00".repeat(32)),
        "parentHash": "0x03418c50c53128c5c4c2f0e59bdaa9e7c7d087154fa8864efc05c2b72d519d0b",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "miner": "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5",
        "stateRoot": encode_prefixed(state_root.as_bytes()),
        "transactionsRoot": "0x455994d6bc48c84f3ebe49b6a629d70c0edb6b1705024b8bd0dbf56d0cf6d0b6",
        "receiptsRoot": "0xd2e882adca79dc34ec74de3ffed26866555a6fc7a781cfd76753d4f8798fb52a",
        "logsBloom": format!("0x{}", "00".repeat(256)),
        "difficulty": "0x0",
        "number": "0x1053b00",
        "gasLimit": "0x1c9c380",
        "gasUsed": "0xdcd64c",
        "timestamp": "0x6449443f",
        "extraData": "0x6265617665726275696c642e6f7267",
        "mixHash": "0xf565638b0a06db0b4a03d7b3df80a19ae121cd2c289c9b327811bcbfbbdd5e1a",
        "nonce": "0x0000000000000000",
        "baseFeePerGas": "0x7cdc340ab",
        "withdrawalsRoot": "0x82c45fbf06163b56fc123b882937fdde57dd35a531fb720da80403e39f88017e",
    });

    let rpc_header: RpcBlockHeader = serde_json::from_value(header_json.clone()).unwrap();
    let fields = BlockHeaderFields::try_from(&rpc_header).unwrap();
    let header_rlp = fields.rlp_encode();
    let block_hash = keccak256(&header_rlp);
    header_json["hash"] = json!(encode_prefixed(block_hash.as_bytes()));

    ChainFixture {
        header_json,
        header_rlp,
        block_hash,
        state_root,
        account_nodes,
        storage_nodes,
        storage_value: "0x1".to_string(),
    }
}

impl ChainFixture {
    pub fn rpc_header(&self) -> RpcBlockHeader {
        serde_json::from_value(self.header_json.clone()).unwrap()
    }

    pub fn header_fields(&self) -> BlockHeaderFields {
        BlockHeaderFields::try_from(&self.rpc_header()).unwrap()
    }

    /// The `eth_getProof` response as the node would serialize it.
    pub fn proof_json(&self) -> Value {
        let account_proof: Vec<String> = self
            .account_nodes
            .iter()
            .map(|node| encode_prefixed(node))
            .collect();
        let storage_proof: Vec<String> = self
            .storage_nodes
            .iter()
            .map(|node| encode_prefixed(node))
            .collect();
        json!({
            "address": encode_prefixed(account().as_bytes()),
            "balance": "0xde0b6b3a7640000",
            "codeHash": "0xd0a06b12ac47863b5c7be4185c2deaad1c61557033f56c7d4ea74429cbb25e23",
            "nonce": "0x1",
            "storageHash": encode_prefixed(keccak256(&self.storage_nodes[0]).as_bytes()),
            "accountProof": account_proof,
            "storageProof": [{
                "key": format!("0x{}", "00".repeat(32)),
                "value": self.storage_value,
                "proof": storage_proof,
            }],
        })
    }
}
