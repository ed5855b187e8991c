use std::collections::HashMap;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// Peer lists never exceed this many entries.
pub const MAX_NUMWANT: usize = 50;

impl AnnounceRequest {
    /// Builds a request from a decoded query map as produced by `parse_query`.
    ///
    /// Only the first value of a repeated key is used.
    pub fn from_query(query: &HashMap<String, Vec<Vec<u8>>>, ip: String) -> Result<AnnounceRequest, AnnounceError>
    {
        let info_hash = InfoHash::try_from(Self::required(query, "info_hash")?)
            .map_err(|len| AnnounceError::MalformedRequest(format!("info_hash has {len} bytes")))?;
        let peer_id = PeerId::try_from(Self::required(query, "peer_id")?)
            .map_err(|len| AnnounceError::MalformedRequest(format!("peer_id has {len} bytes")))?;
        let port = u16::try_from(Self::required_u64(query, "port")?)
            .map_err(|_| AnnounceError::MalformedRequest(String::from("port out of range")))?;
        let uploaded = Self::required_u64(query, "uploaded")?;
        let downloaded = Self::required_u64(query, "downloaded")?;
        let left = Self::required_u64(query, "left")?;

        let event = Self::optional(query, "event")
            .map(AnnounceEvent::from_query_value)
            .unwrap_or_default();
        let numwant = match Self::optional(query, "numwant") {
            None => MAX_NUMWANT,
            Some(value) => match std::str::from_utf8(value).ok().and_then(|v| v.parse::<i64>().ok()) {
                Some(n) if (0..=MAX_NUMWANT as i64).contains(&n) => n as usize,
                _ => MAX_NUMWANT
            }
        };
        let compact = Self::optional(query, "compact") == Some(b"1".as_slice());

        Ok(AnnounceRequest {
            info_hash,
            peer_id,
            port,
            uploaded,
            downloaded,
            left,
            event,
            numwant,
            compact,
            ip,
        })
    }

    fn optional<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, key: &str) -> Option<&'a [u8]> {
        query.get(key).and_then(|values| values.first()).map(|value| value.as_slice())
    }

    fn required<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, key: &str) -> Result<&'a [u8], AnnounceError> {
        match Self::optional(query, key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(AnnounceError::MalformedRequest(format!("missing {key}")))
        }
    }

    fn required_u64(query: &HashMap<String, Vec<Vec<u8>>>, key: &str) -> Result<u64, AnnounceError> {
        let value = Self::required(query, key)?;
        std::str::from_utf8(value)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .ok_or_else(|| AnnounceError::MalformedRequest(format!("{key} is not an unsigned integer")))
    }
}
