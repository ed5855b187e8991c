pub mod storage_journal;
pub mod storage_memory;
pub mod storage_mysql;
