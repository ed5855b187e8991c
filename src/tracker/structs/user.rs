/// A tracker account, immutable once loaded. Reloads replace the whole record.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub passkey: String,
    pub up_multiplier: f64,
    pub down_multiplier: f64,
    pub disable_download: bool,
    /// -1 means unlimited.
    pub slots: i64,
    pub used_slots: i64,
    pub slots_last_checked: i64,
}
