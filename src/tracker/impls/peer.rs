use std::net::Ipv4Addr;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_id::PeerId;

impl Peer {
    /// A peer seen for the first time. Its stored counters start at the reported
    /// values, so the first announce of a session credits nothing.
    pub fn new(id: PeerId, user_id: u64, torrent_id: u64, uploaded: u64, downloaded: u64, now: i64) -> Peer {
        Peer {
            id,
            user_id,
            torrent_id,
            port: 0,
            ip: String::new(),
            addr: [0u8; 6],
            uploaded,
            downloaded,
            left: 0,
            seeding: false,
            start_time: now,
            last_announce: now,
        }
    }

    pub fn compact_address(ip: Ipv4Addr, port: u16) -> [u8; 6] {
        let mut addr = [0u8; 6];
        addr[..4].copy_from_slice(&ip.octets());
        addr[4..].copy_from_slice(&port.to_be_bytes());
        addr
    }

    /// Updates ip, port and compact address. Returns whether anything changed.
    pub fn set_address(&mut self, ip: &str, parsed: Ipv4Addr, port: u16) -> bool {
        if self.ip == ip && self.port == port {
            return false;
        }
        self.ip = ip.to_string();
        self.port = port;
        self.addr = Peer::compact_address(parsed, port);
        true
    }

    /// Raw upload and download since the last announce. A counter that went
    /// backwards (client restart) counts as zero.
    pub fn transfer_deltas(&self, uploaded: u64, downloaded: u64) -> (u64, u64) {
        (uploaded.saturating_sub(self.uploaded), downloaded.saturating_sub(self.downloaded))
    }

    /// Seconds since the last announce, or zero when the gap is longer than two
    /// announce intervals.
    pub fn active_time(&self, now: i64, announce_interval: u64) -> i64 {
        let elapsed = now - self.last_announce;
        if elapsed < 0 || elapsed > 2 * announce_interval as i64 {
            0
        } else {
            elapsed
        }
    }
}
