/// 20-byte peer id chosen by the client.
///
/// The leading bytes identify the client software (`-TR2940-` and friends),
/// which is what the client whitelist matches against.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
