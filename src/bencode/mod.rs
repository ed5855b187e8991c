//! Bencoded tracker responses on top of `bip_bencode`.
//!
//! Announce replies are dictionaries of integers and byte strings, plus either
//! a compact peer blob or a list of peer dictionaries. `bip_bencode` keeps
//! dictionary keys sorted, so output is byte-for-byte deterministic.
//!
//! ```rust
//! use torrust_ratio::bencode::bencode::failure_envelope;
//!
//! let body = failure_envelope("Malformed request").encode();
//! assert_eq!(body, b"d14:failure reason17:Malformed requeste".to_vec());
//! ```

/// Response envelope builders.
#[allow(clippy::module_inception)]
pub mod bencode;

#[cfg(test)]
mod tests;
