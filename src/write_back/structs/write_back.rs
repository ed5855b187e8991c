use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use crate::write_back::structs::snatch_record::SnatchRecord;
use crate::write_back::structs::torrent_record::TorrentRecord;
use crate::write_back::structs::transfer_history_record::TransferHistoryRecord;
use crate::write_back::structs::transfer_ip_record::TransferIpRecord;
use crate::write_back::structs::user_record::UserRecord;

/// Producer side of the pipeline. A `None` sender means the queue is closed.
pub struct WriteBack {
    pub(crate) torrents: RwLock<Option<Sender<TorrentRecord>>>,
    pub(crate) users: RwLock<Option<Sender<UserRecord>>>,
    pub(crate) transfer_history: RwLock<Option<Sender<TransferHistoryRecord>>>,
    pub(crate) transfer_ips: RwLock<Option<Sender<TransferIpRecord>>>,
    pub(crate) snatches: RwLock<Option<Sender<SnatchRecord>>>,
    pub(crate) consumers: Mutex<Vec<JoinHandle<()>>>,
}
