use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Maps the `event` query value. Empty or unknown values count as a regular update.
    pub fn from_query_value(value: &[u8]) -> AnnounceEvent {
        match value {
            b"started" => AnnounceEvent::Started,
            b"stopped" => AnnounceEvent::Stopped,
            b"paused" => AnnounceEvent::Paused,
            b"completed" => AnnounceEvent::Completed,
            _ => AnnounceEvent::None
        }
    }

    /// `stopped` and `paused` take the peer out of the swarm.
    pub fn leaves_swarm(&self) -> bool {
        matches!(self, AnnounceEvent::Stopped | AnnounceEvent::Paused)
    }
}
