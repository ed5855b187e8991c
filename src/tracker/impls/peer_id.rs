use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl PeerId {
    /// Whether this id begins with the given client prefix.
    ///
    /// A prefix longer than the id itself never matches.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = usize;

    fn try_from(data: &[u8]) -> Result<PeerId, Self::Error> {
        <[u8; 20]>::try_from(data).map(PeerId).map_err(|_| data.len())
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}
