use thiserror::Error;
use crate::write_back::errors::PipelineError;

/// Announce failures. `Display` is the `failure reason` sent to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnounceError {
    #[error("Malformed request")]
    MalformedRequest(String),

    #[error("Malformed IP address")]
    MalformedIp,

    #[error("Your client is not approved")]
    ClientNotApproved,

    #[error("This torrent does not exist")]
    TorrentNotFound,

    #[error("This torrent does not exist (status: {status}, left: {left})")]
    TorrentPruned { status: i64, left: u64 },

    #[error("Your download privileges are disabled.")]
    DownloadDisabled,

    #[error("Passkey not found")]
    PassKeyNotFound,

    #[error("Tracker is shutting down, please try again later")]
    QueueClosed,

    #[error("Request timed out, please try again later")]
    Timeout,
}

impl From<PipelineError> for AnnounceError {
    fn from(_: PipelineError) -> Self {
        AnnounceError::QueueClosed
    }
}
