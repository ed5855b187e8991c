//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash, the lookup key of every cached torrent.
///
/// Stored as the raw SHA-1 digest. `Display` renders it as 40 lowercase hex
/// characters for logs; the announce query carries it percent-encoded.
///
/// # Example
///
/// ```rust
/// use torrust_ratio::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash([0xab; 20]);
/// assert_eq!(hash.to_string().len(), 40);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
