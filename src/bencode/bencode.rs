use std::borrow::Cow;
use bip_bencode::{ben_bytes, ben_int, ben_map, BMutAccess, BencodeMut};

/// `{failure reason: <message>}`
pub fn failure_envelope(reason: &str) -> BencodeMut<'static>
{
    ben_map! {
        "failure reason" => ben_bytes!(reason.to_string())
    }
}

/// The success envelope without the `peers` key.
pub fn announce_envelope(complete: u64, incomplete: u64, interval: u64, min_interval: u64) -> BencodeMut<'static>
{
    ben_map! {
        "complete" => ben_int!(complete as i64),
        "incomplete" => ben_int!(incomplete as i64),
        "interval" => ben_int!(interval as i64),
        "min interval" => ben_int!(min_interval as i64)
    }
}

/// Adds `key` to a dictionary envelope. Anything that is not a dictionary is left alone.
pub fn insert_key(envelope: &mut BencodeMut<'static>, key: &'static str, value: BencodeMut<'static>)
{
    if let Some(dict) = envelope.dict_mut() {
        dict.insert(Cow::Borrowed(key.as_bytes()), value);
    }
}
