/// Accounting credit for one announce. `delta_*` carry the multipliers, `raw_*` don't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: u64,
    pub raw_delta_upload: u64,
    pub raw_delta_download: u64,
    pub delta_upload: u64,
    pub delta_download: u64,
}
