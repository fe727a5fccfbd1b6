use serde::Deserialize;

/// Block header as returned by `eth_getBlockByNumber`.
///
/// Post-London fields are optional: whichever of them the node reports
/// drive the encoded layout, so headers from chains on different upgrade
/// schedules deserialize into the same shape. `send_root` is reported by
/// some rollups next to the standard fields; it is carried through to the
/// result record and never participates in header encoding.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlockHeader {
    pub hash: String,
    pub parent_hash: String,
    pub sha3_uncles: String,
    pub miner: String,
    pub state_root: String,
    pub transactions_root: String,
    pub receipts_root: String,
    pub logs_bloom: String,
    pub difficulty: String,
    pub number: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub timestamp: String,
    pub extra_data: String,
    pub mix_hash: String,
    pub nonce: String,
    #[serde(default)]
    pub base_fee_per_gas: Option<String>,
    #[serde(default)]
    pub withdrawals_root: Option<String>,
    #[serde(default)]
    pub blob_gas_used: Option<String>,
    #[serde(default)]
    pub excess_blob_gas: Option<String>,
    #[serde(default)]
    pub parent_beacon_block_root: Option<String>,
    #[serde(default)]
    pub requests_hash: Option<String>,
    #[serde(default)]
    pub send_root: Option<String>,
}
