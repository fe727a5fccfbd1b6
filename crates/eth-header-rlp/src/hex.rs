use ethereum_types::{H160, H256, U256};

use crate::error::HeaderError;

/// Strips an optional `0x` prefix, lowercases, and left-pads odd-length
/// input with a single zero digit.
pub fn normalize(hex_str: &str) -> String {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    let lower = stripped.to_lowercase();
    if lower.len() % 2 == 1 {
        format!("0{}", lower)
    } else {
        lower
    }
}

/// Formats bytes as `0x`-prefixed lowercase hex.
pub fn encode_prefixed(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decodes a hex string into bytes after normalization.
pub fn to_bytes(field: &'static str, hex_str: &str) -> Result<Vec<u8>, HeaderError> {
    hex::decode(normalize(hex_str)).map_err(|_| HeaderError::InvalidHex { field })
}

/// Decodes a hex string into a fixed-size array.
pub fn to_fixed_array<const N: usize>(
    field: &'static str,
    hex_str: &str,
) -> Result<[u8; N], HeaderError> {
    let bytes = to_bytes(field, hex_str)?;
    if bytes.len() != N {
        return Err(HeaderError::InvalidLength {
            field,
            expected: N,
            got: bytes.len(),
        });
    }
    let mut array = [0u8; N];
    array.copy_from_slice(&bytes);
    Ok(array)
}

/// Decodes a hex string into a 32-byte hash.
pub fn to_h256(field: &'static str, hex_str: &str) -> Result<H256, HeaderError> {
    Ok(H256::from_slice(&to_fixed_array::<32>(field, hex_str)?))
}

/// Decodes a hex string into a 20-byte address.
pub fn to_h160(field: &'static str, hex_str: &str) -> Result<H160, HeaderError> {
    Ok(H160::from_slice(&to_fixed_array::<20>(field, hex_str)?))
}

/// Parses a hex quantity into a `U256`. Accepts minimal forms like `0x0`.
pub fn to_u256(field: &'static str, hex_str: &str) -> Result<U256, HeaderError> {
    let bytes = to_bytes(field, hex_str)?;
    if bytes.len() > 32 {
        return Err(HeaderError::InvalidLength {
            field,
            expected: 32,
            got: bytes.len(),
        });
    }
    Ok(U256::from_big_endian(&bytes))
}
