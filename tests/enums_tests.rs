// tests/enums_tests.rs
use cipher_registry::{lookup, CipherKind, LookupError};

#[test]
fn test_default_kind_is_aes_128_cbc() {
    assert_eq!(CipherKind::default(), CipherKind::Aes128Cbc);
}

#[test]
fn test_canonical_names_round_trip_through_display_and_from_str() {
    for kind in CipherKind::ALL {
        let name = kind.to_string();
        assert_eq!(name, kind.canonical_name());
        assert_eq!(name.parse::<CipherKind>().unwrap(), kind);
    }
}

#[test]
fn test_parsing_unknown_name_carries_the_name() {
    let err = "camellia-128-cbc".parse::<CipherKind>().unwrap_err();
    assert_eq!(
        err,
        LookupError::NotFound {
            name: "camellia-128-cbc".to_string()
        }
    );
}

#[test]
fn test_kind_resolves_to_the_same_descriptor_as_name_lookup() {
    for kind in CipherKind::ALL {
        let from_kind = kind.algorithm();
        let from_name = lookup(kind.canonical_name()).unwrap();

        assert_eq!(from_kind, from_name, "{kind} diverges from name lookup");
        assert_eq!(from_kind.key_size(), from_name.key_size());
        assert_eq!(from_kind.iv_size(), from_name.iv_size());
        assert_eq!(from_kind.block_size(), from_name.block_size());
    }
}

#[test]
fn test_kind_serde_round_trip() {
    let json = serde_json::to_string(&CipherKind::Aes256Cfb).unwrap();
    assert_eq!(json, "\"Aes256Cfb\"");

    let back: CipherKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, CipherKind::Aes256Cfb);
}
