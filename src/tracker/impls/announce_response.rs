use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess, BencodeMut};
use crate::bencode::bencode::{announce_envelope, insert_key};
use crate::tracker::structs::announce_response::AnnounceResponse;

impl AnnounceResponse {
    pub fn to_bencode(&self) -> BencodeMut<'static> {
        let mut envelope = announce_envelope(self.complete, self.incomplete, self.interval, self.min_interval);
        if let Some(peers) = &self.peers {
            let value = if self.compact {
                let mut blob = Vec::with_capacity(peers.len() * 6);
                for peer in peers {
                    blob.extend_from_slice(&peer.addr);
                }
                ben_bytes!(blob)
            } else {
                let mut peers_list = ben_list!();
                if let Some(peers_list_mut) = peers_list.list_mut() {
                    for peer in peers {
                        peers_list_mut.push(ben_map! {
                            "ip" => ben_bytes!(peer.ip.clone()),
                            "peer id" => ben_bytes!(peer.id.0.to_vec()),
                            "port" => ben_int!(peer.port as i64)
                        });
                    }
                }
                peers_list
            };
            insert_key(&mut envelope, "peers", value);
        }
        envelope
    }

    pub fn encode(&self) -> Vec<u8> {
        self.to_bencode().encode()
    }
}
