use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use crate::config::structs::write_back_config::WriteBackConfig;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::storage::traits::storage_backend::StorageBackend;
use crate::write_back::errors::PipelineError;
use crate::write_back::structs::queue_lengths::QueueLengths;
use crate::write_back::structs::snatch_record::SnatchRecord;
use crate::write_back::structs::torrent_record::TorrentRecord;
use crate::write_back::structs::transfer_history_record::TransferHistoryRecord;
use crate::write_back::structs::transfer_ip_record::TransferIpRecord;
use crate::write_back::structs::user_record::UserRecord;
use crate::write_back::structs::write_back::WriteBack;
use crate::write_back::traits::write_back_record::WriteBackRecord;

impl WriteBack {
    /// Creates the five queues and spawns one consumer per queue on the current runtime.
    #[tracing::instrument(level = "debug", skip(storage, stats))]
    pub fn start(storage: Arc<dyn StorageBackend>, config: WriteBackConfig, stats: Arc<StatsAtomics>) -> WriteBack
    {
        let mut consumers = Vec::with_capacity(5);
        let torrents = Self::spawn_queue::<TorrentRecord>(&storage, &config, &stats, &mut consumers);
        let users = Self::spawn_queue::<UserRecord>(&storage, &config, &stats, &mut consumers);
        let transfer_history = Self::spawn_queue::<TransferHistoryRecord>(&storage, &config, &stats, &mut consumers);
        let transfer_ips = Self::spawn_queue::<TransferIpRecord>(&storage, &config, &stats, &mut consumers);
        let snatches = Self::spawn_queue::<SnatchRecord>(&storage, &config, &stats, &mut consumers);
        info!("[WRITE BACK] Started {} consumers", consumers.len());

        WriteBack {
            torrents: RwLock::new(Some(torrents)),
            users: RwLock::new(Some(users)),
            transfer_history: RwLock::new(Some(transfer_history)),
            transfer_ips: RwLock::new(Some(transfer_ips)),
            snatches: RwLock::new(Some(snatches)),
            consumers: Mutex::new(consumers),
        }
    }

    fn spawn_queue<R: WriteBackRecord>(
        storage: &Arc<dyn StorageBackend>,
        config: &WriteBackConfig,
        stats: &Arc<StatsAtomics>,
        consumers: &mut Vec<JoinHandle<()>>
    ) -> Sender<R>
    {
        let (sender, receiver) = mpsc::channel::<R>(R::capacity(config).max(1));
        consumers.push(tokio::spawn(Self::consume(receiver, storage.clone(), config.clone(), stats.clone())));
        sender
    }

    async fn consume<R: WriteBackRecord>(mut receiver: Receiver<R>, storage: Arc<dyn StorageBackend>, config: WriteBackConfig, stats: Arc<StatsAtomics>)
    {
        let batch_size = R::capacity(&config).max(1);
        let flush_interval = Duration::from_millis(config.flush_interval_ms);
        let mut batch: Vec<R> = Vec::with_capacity(batch_size);

        while let Some(first) = receiver.recv().await {
            batch.push(first);
            let deadline = Instant::now() + flush_interval;
            while batch.len() < batch_size {
                tokio::select! {
                    received = receiver.recv() => match received {
                        Some(record) => batch.push(record),
                        None => break
                    },
                    _ = tokio::time::sleep_until(deadline) => break
                }
            }
            Self::flush(&batch, storage.as_ref(), &config, &stats).await;
            batch.clear();
        }
        info!("[WRITE BACK] The {} queue is closed and drained", R::CATEGORY);
    }

    /// Persists one batch, retrying lock conflicts with a linearly growing wait.
    pub(crate) async fn flush<R: WriteBackRecord>(batch: &[R], storage: &dyn StorageBackend, config: &WriteBackConfig, stats: &StatsAtomics)
    {
        let count = batch.len() as i64;
        let mut attempt: u32 = 0;
        loop {
            match R::persist(storage, batch).await {
                Ok(()) => {
                    stats.update(StatsEvent::RecordsFlushed, count);
                    if config.log_flushes {
                        info!("[WRITE BACK] Flushed {count} {} records", R::CATEGORY);
                    }
                    return;
                }
                Err(storage_error) if storage_error.is_conflict() && attempt + 1 < config.max_deadlock_retries => {
                    attempt += 1;
                    let wait = config.deadlock_wait_ms * attempt as u64;
                    stats.update(StatsEvent::DeadlockRetries, 1);
                    warn!("[DEADLOCK] {} flush conflicted, retrying in {wait}ms ({attempt}/{})", R::CATEGORY, config.max_deadlock_retries);
                    tokio::time::sleep(Duration::from_millis(wait)).await;
                }
                Err(storage_error) => {
                    let reason = if storage_error.is_conflict() {
                        format!("deadlocked {} times, giving up", attempt + 1)
                    } else {
                        storage_error.to_string()
                    };
                    error!("[CRITICAL] Dropping {count} {} records: {reason}", R::CATEGORY);
                    sentry::capture_message(&format!("write-back dropped {count} {} records: {reason}", R::CATEGORY), sentry::Level::Error);
                    stats.update(StatsEvent::RecordsDropped, count);
                    return;
                }
            }
        }
    }

    async fn enqueue<R: WriteBackRecord>(slot: &RwLock<Option<Sender<R>>>, record: R) -> Result<(), PipelineError>
    {
        let sender = slot.read().clone().ok_or(PipelineError::Closed)?;
        sender.send(record).await.map_err(|_| PipelineError::Closed)
    }

    pub async fn record_torrent(&self, record: TorrentRecord) -> Result<(), PipelineError>
    {
        Self::enqueue(&self.torrents, record).await
    }

    pub async fn record_user(&self, record: UserRecord) -> Result<(), PipelineError>
    {
        Self::enqueue(&self.users, record).await
    }

    pub async fn record_transfer_history(&self, record: TransferHistoryRecord) -> Result<(), PipelineError>
    {
        Self::enqueue(&self.transfer_history, record).await
    }

    pub async fn record_transfer_ip(&self, record: TransferIpRecord) -> Result<(), PipelineError>
    {
        Self::enqueue(&self.transfer_ips, record).await
    }

    pub async fn record_snatch(&self, record: SnatchRecord) -> Result<(), PipelineError>
    {
        Self::enqueue(&self.snatches, record).await
    }

    fn queue_length<R>(slot: &RwLock<Option<Sender<R>>>) -> usize
    {
        slot.read().as_ref().map(|sender| sender.max_capacity() - sender.capacity()).unwrap_or(0)
    }

    pub fn queue_lengths(&self) -> QueueLengths
    {
        QueueLengths {
            torrents: Self::queue_length(&self.torrents),
            users: Self::queue_length(&self.users),
            transfer_history: Self::queue_length(&self.transfer_history),
            transfer_ips: Self::queue_length(&self.transfer_ips),
            snatches: Self::queue_length(&self.snatches),
        }
    }

    pub fn is_closed(&self) -> bool
    {
        self.torrents.read().is_none()
    }

    /// Closes every queue, then waits until each consumer has flushed its backlog.
    pub async fn shutdown(&self)
    {
        info!("[WRITE BACK] Closing queues, flushing remaining records...");
        self.torrents.write().take();
        self.users.write().take();
        self.transfer_history.write().take();
        self.transfer_ips.write().take();
        self.snatches.write().take();

        let consumers = std::mem::take(&mut *self.consumers.lock());
        for consumer in consumers {
            if let Err(join_error) = consumer.await {
                error!("[WRITE BACK] Consumer task failed: {join_error}");
            }
        }
        info!("[WRITE BACK] All queues flushed");
    }
}
