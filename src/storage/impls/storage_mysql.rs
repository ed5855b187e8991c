use std::str::FromStr;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{info, warn};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{ConnectOptions, MySql, QueryBuilder, Row};
use crate::storage::errors::StorageError;
use crate::storage::structs::storage_mysql::StorageMySQL;
use crate::storage::traits::storage_backend::{StorageBackend, Visitor};
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent::Torrent;
use crate::tracker::structs::user::User;
use crate::write_back::structs::snatch_record::SnatchRecord;
use crate::write_back::structs::torrent_record::TorrentRecord;
use crate::write_back::structs::transfer_history_record::TransferHistoryRecord;
use crate::write_back::structs::transfer_ip_record::TransferIpRecord;
use crate::write_back::structs::user_record::UserRecord;

/// MySQL refuses statements with more placeholders than this.
const MAX_BIND_PARAMETERS: usize = 65535;

const LOAD_USERS: &str = "SELECT CAST(ID AS UNSIGNED) AS ID, torrent_pass, DownMultiplier, UpMultiplier, (DisableDownload = '1') AS DisableDownload FROM users_main WHERE Enabled='1'";
const LOAD_HIT_AND_RUNS: &str = "SELECT CAST(h.uid AS UNSIGNED) AS uid, CAST(h.fid AS UNSIGNED) AS fid FROM transfer_history AS h JOIN users_main AS u ON u.ID = h.uid WHERE hnr='1' AND Enabled='1'";
const LOAD_TORRENTS: &str = "SELECT CAST(t.ID AS UNSIGNED) AS ID, t.info_hash, (IFNULL(tg.DownMultiplier, 1) * t.DownMultiplier) AS DownMultiplier, (IFNULL(tg.UpMultiplier, 1) * t.UpMultiplier) AS UpMultiplier, CAST(t.Snatched AS UNSIGNED) AS Snatched, CAST(t.Status AS SIGNED) AS Status FROM torrents AS t LEFT JOIN torrent_group_freeleech AS tg ON tg.GroupID = t.GroupID AND (tg.Type = t.TorrentType OR (tg.Type = 'music' AND t.TorrentType = 'ost'))";
const LOAD_WHITELIST: &str = "SELECT CAST(peer_id AS CHAR) AS peer_id FROM xbt_client_whitelist";
const LOAD_FREELEECH: &str = "SELECT CAST(mod_setting AS CHAR) AS mod_setting FROM mod_core WHERE mod_option='global_freeleech'";
const DEACTIVATE_STALE_PEERS: &str = "UPDATE transfer_history SET active = '0' WHERE last_announce < ? AND active = '1'";

impl StorageMySQL {
    #[tracing::instrument(level = "debug")]
    pub async fn create(dsn: &str, max_connections: u32) -> Result<StorageMySQL, StorageError>
    {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(
                MySqlConnectOptions::from_str(dsn)?
                    .log_statements(log::LevelFilter::Debug)
                    .log_slow_statements(log::LevelFilter::Warn, Duration::from_secs(1))
            ).await?;
        info!("[MySQL] Connected with a pool of {max_connections} connections");
        Ok(StorageMySQL { pool })
    }

    fn bool_flag(value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }

    fn chunk_size(columns: usize) -> usize {
        MAX_BIND_PARAMETERS / columns
    }
}

#[async_trait]
impl StorageBackend for StorageMySQL {
    #[tracing::instrument(level = "debug", skip(self, visit))]
    async fn map_over_users(&self, visit: Visitor<'_, User>) -> Result<(), StorageError> {
        let mut rows = sqlx::query(LOAD_USERS).fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            visit(User {
                id: row.try_get::<u64, _>("ID")?,
                passkey: row.try_get::<String, _>("torrent_pass")?,
                up_multiplier: row.try_get::<f64, _>("UpMultiplier")?,
                down_multiplier: row.try_get::<f64, _>("DownMultiplier")?,
                disable_download: row.try_get::<i64, _>("DisableDownload")? != 0,
                slots: -1,
                used_slots: 0,
                slots_last_checked: 0,
            })?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, visit))]
    async fn map_over_torrents(&self, visit: Visitor<'_, Torrent>) -> Result<(), StorageError> {
        let mut rows = sqlx::query(LOAD_TORRENTS).fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            let id = row.try_get::<u64, _>("ID")?;
            let info_hash_data = row.try_get::<Vec<u8>, _>("info_hash")?;
            let info_hash = match InfoHash::try_from(info_hash_data.as_slice()) {
                Ok(info_hash) => info_hash,
                Err(length) => {
                    warn!("[MySQL] Skipping torrent {id}, info_hash has {length} bytes");
                    continue;
                }
            };
            visit(Torrent::new(
                id,
                info_hash,
                row.try_get::<f64, _>("UpMultiplier")?,
                row.try_get::<f64, _>("DownMultiplier")?,
                row.try_get::<u64, _>("Snatched")?,
                row.try_get::<i64, _>("Status")?,
            ))?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, visit))]
    async fn map_over_whitelist(&self, visit: Visitor<'_, String>) -> Result<(), StorageError> {
        let mut rows = sqlx::query(LOAD_WHITELIST).fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            visit(row.try_get::<String, _>("peer_id")?)?;
        }
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, visit))]
    async fn map_over_hit_and_runs(&self, visit: Visitor<'_, (u64, u64)>) -> Result<(), StorageError> {
        let mut rows = sqlx::query(LOAD_HIT_AND_RUNS).fetch(&self.pool);
        while let Some(row) = rows.try_next().await? {
            visit((row.try_get::<u64, _>("uid")?, row.try_get::<u64, _>("fid")?))?;
        }
        Ok(())
    }

    async fn freeleech_enabled(&self) -> Result<bool, StorageError> {
        let row = sqlx::query(LOAD_FREELEECH).fetch_optional(&self.pool).await?;
        match row {
            None => Ok(false),
            Some(row) => Ok(row.try_get::<String, _>("mod_setting")?.trim() == "1")
        }
    }

    #[tracing::instrument(level = "debug", skip(self, batch))]
    async fn record_torrents(&self, batch: &[TorrentRecord]) -> Result<(), StorageError> {
        let mut transaction = self.pool.begin().await?;
        for chunk in batch.chunks(Self::chunk_size(5)) {
            let mut query_builder: QueryBuilder<MySql> = QueryBuilder::new("INSERT INTO torrents (ID, Snatched, Seeders, Leechers, last_action) ");
            query_builder.push_values(chunk, |mut row, record| {
                row.push_bind(record.torrent_id)
                    .push_bind(record.delta_snatch)
                    .push_bind(record.seeders)
                    .push_bind(record.leechers)
                    .push("FROM_UNIXTIME(")
                    .push_bind_unseparated(record.last_action)
                    .push_unseparated(")");
            });
            query_builder.push(" ON DUPLICATE KEY UPDATE Snatched = Snatched + VALUES(Snatched), Seeders = VALUES(Seeders), Leechers = VALUES(Leechers), last_action = IF(last_action < VALUES(last_action), VALUES(last_action), last_action)");
            query_builder.build().execute(&mut *transaction).await?;
        }

        let unpruned: Vec<u64> = batch.iter().filter(|record| record.unpruned).map(|record| record.torrent_id).collect();
        if !unpruned.is_empty() {
            let mut query_builder: QueryBuilder<MySql> = QueryBuilder::new("UPDATE torrents SET Status = 0 WHERE ID IN (");
            let mut separated = query_builder.separated(", ");
            for torrent_id in unpruned {
                separated.push_bind(torrent_id);
            }
            separated.push_unseparated(")");
            query_builder.build().execute(&mut *transaction).await?;
        }
        transaction.commit().await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, batch))]
    async fn record_users(&self, batch: &[UserRecord]) -> Result<(), StorageError> {
        let mut transaction = self.pool.begin().await?;
        for chunk in batch.chunks(Self::chunk_size(5)) {
            let mut query_builder: QueryBuilder<MySql> = QueryBuilder::new("INSERT INTO users_main (ID, Uploaded, Downloaded, rawdl, rawup) ");
            query_builder.push_values(chunk, |mut row, record| {
                row.push_bind(record.user_id)
                    .push_bind(record.delta_upload)
                    .push_bind(record.delta_download)
                    .push_bind(record.raw_delta_download)
                    .push_bind(record.raw_delta_upload);
            });
            query_builder.push(" ON DUPLICATE KEY UPDATE Uploaded = Uploaded + VALUES(Uploaded), Downloaded = Downloaded + VALUES(Downloaded), rawdl = rawdl + VALUES(rawdl), rawup = rawup + VALUES(rawup)");
            query_builder.build().execute(&mut *transaction).await?;
        }
        transaction.commit().await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, batch))]
    async fn record_transfer_history(&self, batch: &[TransferHistoryRecord]) -> Result<(), StorageError> {
        let mut transaction = self.pool.begin().await?;
        for chunk in batch.chunks(Self::chunk_size(12)) {
            let mut query_builder: QueryBuilder<MySql> = QueryBuilder::new("INSERT INTO transfer_history (uid, fid, uploaded, downloaded, seeding, starttime, last_announce, activetime, seedtime, active, snatched, remaining) ");
            query_builder.push_values(chunk, |mut row, record| {
                let seed_time = if record.seeding { record.delta_time } else { 0 };
                row.push_bind(record.user_id)
                    .push_bind(record.torrent_id)
                    .push_bind(record.raw_delta_upload)
                    .push_bind(record.raw_delta_download)
                    .push_bind(Self::bool_flag(record.seeding))
                    .push_bind(record.start_time)
                    .push_bind(record.last_announce)
                    .push_bind(record.delta_time)
                    .push_bind(seed_time)
                    .push_bind(Self::bool_flag(record.active))
                    .push_bind(record.delta_snatch)
                    .push_bind(record.left);
            });
            query_builder.push(" ON DUPLICATE KEY UPDATE uploaded = uploaded + VALUES(uploaded), downloaded = downloaded + VALUES(downloaded), remaining = VALUES(remaining), seeding = VALUES(seeding), activetime = activetime + VALUES(activetime), seedtime = seedtime + VALUES(seedtime), last_announce = VALUES(last_announce), active = VALUES(active), snatched = snatched + VALUES(snatched)");
            query_builder.build().execute(&mut *transaction).await?;
        }
        transaction.commit().await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, batch))]
    async fn record_transfer_ips(&self, batch: &[TransferIpRecord]) -> Result<(), StorageError> {
        let mut transaction = self.pool.begin().await?;
        for chunk in batch.chunks(Self::chunk_size(9)) {
            let mut query_builder: QueryBuilder<MySql> = QueryBuilder::new("INSERT INTO transfer_ips (uid, fid, client_id, ip, port, uploaded, downloaded, starttime, last_announce) ");
            query_builder.push_values(chunk, |mut row, record| {
                let ip = u32::from_be_bytes([record.addr[0], record.addr[1], record.addr[2], record.addr[3]]);
                row.push_bind(record.user_id)
                    .push_bind(record.torrent_id)
                    .push_bind(record.peer_id.0.to_vec())
                    .push_bind(ip)
                    .push_bind(record.port)
                    .push_bind(record.uploaded)
                    .push_bind(record.downloaded)
                    .push_bind(record.start_time)
                    .push_bind(record.last_announce);
            });
            query_builder.push(" ON DUPLICATE KEY UPDATE port = VALUES(port), uploaded = VALUES(uploaded), downloaded = VALUES(downloaded), last_announce = VALUES(last_announce)");
            query_builder.build().execute(&mut *transaction).await?;
        }
        transaction.commit().await?;
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self, batch))]
    async fn record_snatches(&self, batch: &[SnatchRecord]) -> Result<(), StorageError> {
        let mut transaction = self.pool.begin().await?;
        for chunk in batch.chunks(Self::chunk_size(4)) {
            let mut query_builder: QueryBuilder<MySql> = QueryBuilder::new("INSERT INTO xbt_snatched (uid, fid, tstamp, IP) ");
            query_builder.push_values(chunk, |mut row, record| {
                row.push_bind(record.user_id)
                    .push_bind(record.torrent_id)
                    .push_bind(record.timestamp)
                    .push_bind(record.ip.clone());
            });
            query_builder.build().execute(&mut *transaction).await?;
        }
        transaction.commit().await?;
        Ok(())
    }

    async fn deactivate_stale_peers(&self, before: i64) -> Result<u64, StorageError> {
        let result = sqlx::query(DEACTIVATE_STALE_PEERS).bind(before).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}
