use thiserror::Error;

/// Represents errors that can occur when parsing RPC header fields into
/// typed values.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// Represents a field whose value is not valid hexadecimal.
    #[error("Invalid hex in header field `{field}`")]
    InvalidHex { field: &'static str },

    /// Represents a field whose decoded value has the wrong byte length.
    #[error("Invalid length for header field `{field}`: expected {expected} bytes, got {got}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        got: usize,
    },
}
