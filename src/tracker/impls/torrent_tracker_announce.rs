use std::net::Ipv4Addr;
use std::str::FromStr;
use log::debug;
use rand::RngExt;
use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_request::AnnounceRequest;
use crate::tracker::structs::announce_response::AnnounceResponse;
use crate::tracker::structs::peer::Peer;
use crate::tracker::structs::peer_key::PeerKey;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::tracker::structs::user::User;
use crate::write_back::structs::snatch_record::SnatchRecord;
use crate::write_back::structs::torrent_record::TorrentRecord;
use crate::write_back::structs::transfer_history_record::TransferHistoryRecord;
use crate::write_back::structs::transfer_ip_record::TransferIpRecord;
use crate::write_back::structs::user_record::UserRecord;

impl TorrentTracker {
    #[tracing::instrument(level = "debug", skip(self, user), fields(user_id = user.id))]
    pub async fn handle_announce(&self, user: &User, request: &AnnounceRequest) -> Result<AnnounceResponse, AnnounceError>
    {
        self.handle_announce_at(user, request, current_time()).await
    }

    /// Runs one announce against the cached swarm, with `now` as the clock.
    pub async fn handle_announce_at(&self, user: &User, request: &AnnounceRequest, now: i64) -> Result<AnnounceResponse, AnnounceError>
    {
        let result = self.process_announce(user, request, now).await;
        match &result {
            Ok(_) => { self.stats.update(StatsEvent::Announces, 1); }
            Err(error) => {
                self.stats.update(StatsEvent::AnnounceFailures, 1);
                debug!("[ANNOUNCE] Rejected announce of user {} for {}: {error}", user.id, request.info_hash);
            }
        }
        result
    }

    async fn process_announce(&self, user: &User, request: &AnnounceRequest, now: i64) -> Result<AnnounceResponse, AnnounceError>
    {
        let parsed_ip = Ipv4Addr::from_str(&request.ip).map_err(|_| AnnounceError::MalformedIp)?;

        if self.config.tracker_config.whitelist_enabled && !self.cache.peer_whitelisted(&request.peer_id) {
            return Err(AnnounceError::ClientNotApproved);
        }

        let entry = self.cache.find_torrent(&request.info_hash).ok_or(AnnounceError::TorrentNotFound)?;
        let mut torrent = entry.lock().await;

        let mut unpruned = false;
        if torrent.is_pruned() {
            if request.left > 0 {
                return Err(AnnounceError::TorrentPruned { status: torrent.status, left: request.left });
            }
            debug!("[ANNOUNCE] Unpruning torrent {}", torrent.id);
            torrent.unprune();
            unpruned = true;
            self.stats.update(StatsEvent::Unpruned, 1);
        }

        if request.left > 0 && user.disable_download && !self.cache.has_hit_and_run(user.id, torrent.id) {
            return Err(AnnounceError::DownloadDisabled);
        }

        let torrent_id = torrent.id;
        let key = PeerKey { user_id: user.id, peer_id: request.peer_id };
        let mut peer = torrent.take_peer(&key).unwrap_or_else(|| {
            Peer::new(request.peer_id, user.id, torrent_id, request.uploaded, request.downloaded, now)
        });

        let (raw_delta_upload, raw_delta_download) = peer.transfer_deltas(request.uploaded, request.downloaded);
        let delta_upload = (raw_delta_upload as f64 * user.up_multiplier * torrent.up_multiplier) as u64;
        let delta_download = if self.cache.freeleech() {
            0
        } else {
            (raw_delta_download as f64 * user.down_multiplier * torrent.down_multiplier) as u64
        };
        let delta_time = peer.active_time(now, self.config.tracker_config.announce_interval);
        let completed = request.event == AnnounceEvent::Completed;
        let delta_snatch = u64::from(completed);
        let active = !request.event.leaves_swarm();

        peer.uploaded = request.uploaded;
        peer.downloaded = request.downloaded;
        peer.left = request.left;
        peer.seeding = request.left == 0;
        peer.last_announce = now;
        let address_changed = peer.set_address(&request.ip, parsed_ip, request.port);

        torrent.last_action = now;
        if completed {
            torrent.snatched += 1;
            self.stats.update(StatsEvent::Snatches, 1);
        }

        let history = TransferHistoryRecord {
            user_id: user.id,
            torrent_id: torrent.id,
            raw_delta_upload,
            raw_delta_download,
            delta_time,
            delta_snatch,
            active,
            seeding: peer.seeding,
            left: peer.left,
            start_time: peer.start_time,
            last_announce: now,
        };
        let transfer_ip = address_changed.then(|| TransferIpRecord {
            user_id: user.id,
            torrent_id: torrent.id,
            peer_id: peer.id,
            ip: peer.ip.clone(),
            addr: peer.addr,
            port: peer.port,
            uploaded: peer.uploaded,
            downloaded: peer.downloaded,
            start_time: peer.start_time,
            last_announce: now,
        });
        let snatch = completed.then(|| SnatchRecord {
            user_id: user.id,
            torrent_id: torrent.id,
            ip: peer.ip.clone(),
            timestamp: now,
        });

        if active {
            torrent.insert_peer(key, peer);
        }

        self.write_back.record_torrent(TorrentRecord {
            torrent_id: torrent.id,
            delta_snatch,
            seeders: torrent.seeders.len() as u64,
            leechers: torrent.leechers.len() as u64,
            last_action: now,
            unpruned,
        }).await?;
        self.write_back.record_transfer_history(history).await?;
        self.write_back.record_user(UserRecord {
            user_id: user.id,
            raw_delta_upload,
            raw_delta_download,
            delta_upload,
            delta_download,
        }).await?;
        if let Some(record) = transfer_ip {
            self.write_back.record_transfer_ip(record).await?;
        }
        if let Some(record) = snatch {
            self.write_back.record_snatch(record).await?;
        }

        let peers = (active && request.numwant > 0)
            .then(|| Self::select_peers(&torrent, user.id, request.left == 0, request.numwant));

        Ok(AnnounceResponse {
            complete: torrent.seeders.len() as u64,
            incomplete: torrent.leechers.len() as u64,
            interval: self.config.tracker_config.announce_interval,
            min_interval: self.config.tracker_config.min_announce_interval,
            compact: request.compact,
            peers,
        })
    }

    /// Random sample of other users' peers. Seeders only get leechers, leechers get
    /// seeders first and then leechers.
    pub fn select_peers(torrent: &Torrent, user_id: u64, seeding: bool, numwant: usize) -> Vec<Peer>
    {
        let mut rng = rand::rng();
        let mut selected = Vec::with_capacity(numwant.min(torrent.peers_count()));
        let pools = if seeding {
            vec![&torrent.leechers]
        } else {
            vec![&torrent.seeders, &torrent.leechers]
        };
        for pool in pools {
            if selected.len() >= numwant {
                break;
            }
            let mut candidates: Vec<&Peer> = pool.values().filter(|peer| peer.user_id != user_id).collect();
            let take = (numwant - selected.len()).min(candidates.len());
            for index in 0..take {
                let pick = rng.random_range(index..candidates.len());
                candidates.swap(index, pick);
                selected.push(candidates[index].clone());
            }
        }
        selected
    }
}
