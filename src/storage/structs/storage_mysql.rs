use sqlx::{
    MySql,
    Pool
};

#[derive(Debug, Clone)]
pub struct StorageMySQL {
    pub(crate) pool: Pool<MySql>,
}
