pub mod storage_engine;
pub mod storage_memory;
pub mod storage_mysql;
