#[cfg(test)]
mod write_back_tests {
    use std::sync::Arc;
    use crate::config::structs::write_back_config::WriteBackConfig;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::storage::errors::StorageError;
    use crate::storage::structs::storage_memory::StorageMemory;
    use crate::write_back::errors::PipelineError;
    use crate::write_back::structs::snatch_record::SnatchRecord;
    use crate::write_back::structs::user_record::UserRecord;
    use crate::write_back::structs::write_back::WriteBack;

    fn test_config() -> WriteBackConfig {
        WriteBackConfig {
            torrent_buffer: 4,
            user_buffer: 4,
            transfer_history_buffer: 4,
            transfer_ip_buffer: 4,
            snatch_buffer: 4,
            flush_interval_ms: 10,
            max_deadlock_retries: 3,
            deadlock_wait_ms: 1,
            log_flushes: false,
        }
    }

    fn user_record(user_id: u64) -> UserRecord {
        UserRecord {
            user_id,
            raw_delta_upload: user_id * 10,
            raw_delta_download: 0,
            delta_upload: user_id * 10,
            delta_download: 0,
        }
    }

    fn start(storage: &Arc<StorageMemory>) -> (WriteBack, Arc<StatsAtomics>) {
        let stats = Arc::new(StatsAtomics::new());
        let write_back = WriteBack::start(storage.clone(), test_config(), stats.clone());
        (write_back, stats)
    }

    #[tokio::test]
    async fn test_shutdown_flushes_every_record_in_order() {
        let storage = Arc::new(StorageMemory::with_journal());
        let (write_back, stats) = start(&storage);

        for user_id in 1..=10 {
            write_back.record_user(user_record(user_id)).await.unwrap();
        }
        write_back.shutdown().await;

        let journal = storage.journal();
        let ids: Vec<u64> = journal.users.iter().map(|record| record.user_id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
        assert!(journal.batches >= 3, "10 records with batches of 4 need at least 3 calls");
        assert_eq!(stats.snapshot().records_flushed, 10);
        assert_eq!(stats.snapshot().records_dropped, 0);
    }

    #[tokio::test]
    async fn test_flush_interval_flushes_partial_batch() {
        let storage = Arc::new(StorageMemory::with_journal());
        let (write_back, _stats) = start(&storage);

        write_back.record_snatch(SnatchRecord {
            user_id: 1,
            torrent_id: 2,
            ip: String::from("10.0.0.1"),
            timestamp: 1000,
        }).await.unwrap();

        let mut flushed = false;
        for _ in 0..100 {
            if storage.journal().snatches.len() == 1 {
                flushed = true;
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert!(flushed, "a lone record should be flushed after the flush interval");
        write_back.shutdown().await;
    }

    #[tokio::test]
    async fn test_conflict_is_retried_then_persisted() {
        let storage = Arc::new(StorageMemory::with_journal());
        storage.inject_failure(StorageError::Conflict(String::from("Deadlock found")));
        storage.inject_failure(StorageError::Conflict(String::from("Deadlock found")));
        let (write_back, stats) = start(&storage);

        write_back.record_user(user_record(7)).await.unwrap();
        write_back.shutdown().await;

        assert_eq!(storage.journal().users, vec![user_record(7)]);
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.deadlock_retries, 2);
        assert_eq!(snapshot.records_flushed, 1);
        assert_eq!(snapshot.records_dropped, 0);
    }

    #[tokio::test]
    async fn test_batch_dropped_after_retries_exhausted() {
        let storage = Arc::new(StorageMemory::with_journal());
        for _ in 0..3 {
            storage.inject_failure(StorageError::Conflict(String::from("Lock wait timeout")));
        }
        let (write_back, stats) = start(&storage);

        write_back.record_user(user_record(1)).await.unwrap();
        write_back.shutdown().await;

        assert!(storage.journal().users.is_empty());
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.deadlock_retries, 2);
        assert_eq!(snapshot.records_dropped, 1);
    }

    #[tokio::test]
    async fn test_other_failures_are_not_retried() {
        let storage = Arc::new(StorageMemory::with_journal());
        storage.inject_failure(StorageError::Failure(String::from("table is gone")));
        let (write_back, stats) = start(&storage);

        write_back.record_user(user_record(1)).await.unwrap();
        write_back.shutdown().await;

        assert!(storage.journal().users.is_empty());
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.deadlock_retries, 0);
        assert_eq!(snapshot.records_dropped, 1);
    }

    #[tokio::test]
    async fn test_enqueue_after_shutdown_fails() {
        let storage = Arc::new(StorageMemory::with_journal());
        let (write_back, _stats) = start(&storage);

        write_back.shutdown().await;

        assert!(write_back.is_closed());
        assert_eq!(write_back.record_user(user_record(1)).await, Err(PipelineError::Closed));
        assert_eq!(write_back.queue_lengths().users, 0);
        write_back.shutdown().await;
    }
}
