#[cfg(test)]
mod bencode_tests {
    use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
    use crate::bencode::bencode::{announce_envelope, failure_envelope, insert_key};

    #[test]
    fn test_failure_envelope() {
        assert_eq!(
            failure_envelope("Your client is not approved").encode(),
            b"d14:failure reason27:Your client is not approvede".to_vec()
        );
    }

    #[test]
    fn test_announce_envelope_keys_are_sorted() {
        assert_eq!(
            announce_envelope(0, 1, 1800, 900).encode(),
            b"d8:completei0e10:incompletei1e8:intervali1800e12:min intervali900ee".to_vec()
        );
    }

    #[test]
    fn test_insert_compact_peers() {
        let mut envelope = announce_envelope(0, 1, 1800, 900);
        insert_key(&mut envelope, "peers", ben_bytes!(Vec::<u8>::new()));
        assert_eq!(
            envelope.encode(),
            b"d8:completei0e10:incompletei1e8:intervali1800e12:min intervali900e5:peers0:e".to_vec()
        );
    }

    #[test]
    fn test_insert_binary_blob() {
        let mut envelope = ben_map!();
        insert_key(&mut envelope, "peers", ben_bytes!(vec![10u8, 0, 0, 1, 0x1a, 0xe1]));
        let mut expected = b"d5:peers6:".to_vec();
        expected.extend_from_slice(&[10, 0, 0, 1, 0x1a, 0xe1]);
        expected.push(b'e');
        assert_eq!(envelope.encode(), expected);
    }

    #[test]
    fn test_insert_peer_list() {
        let mut peers = ben_list!();
        if let Some(list) = peers.list_mut() {
            list.push(ben_map! {
                "port" => ben_int!(6881),
                "ip" => ben_bytes!(String::from("10.0.0.1"))
            });
        }
        let mut envelope = ben_map!();
        insert_key(&mut envelope, "peers", peers);
        assert_eq!(envelope.encode(), b"d5:peersld2:ip8:10.0.0.14:porti6881eeee".to_vec());
    }

    #[test]
    fn test_insert_ignores_non_dict() {
        let mut value = ben_int!(5);
        insert_key(&mut value, "key", ben_int!(1));
        assert_eq!(value.encode(), b"i5e".to_vec());
    }
}
