use super::*;
use crate::index::{AliasEntity, AliasIndex, AliasMaster};

fn sample_master() -> AliasMaster {
    AliasMaster::new(vec![
        AliasEntity::new("plot-1", ["North Field", "Field A"]),
        AliasEntity::new("plot-2", ["Orchard", "Old Orchard"]),
        AliasEntity::new("plot-3", ["Ridge \"East\"", "Süd-Hang"]),
    ])
}

fn sample_index() -> AliasIndex {
    AliasIndex::from_master(&sample_master()).unwrap()
}

#[test]
fn test_native_roundtrip_preserves_mapping() {
    let index = sample_index();

    let bytes = encode_native(&index).expect("encode");
    let decoded = decode_native(&bytes).expect("decode");

    assert_eq!(decoded, index);
}

#[test]
fn test_native_is_gzip() {
    let bytes = encode_native(&sample_index()).unwrap();
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
}

#[test]
fn test_native_rejects_truncated_stream() {
    let bytes = encode_native(&sample_index()).unwrap();
    let truncated = &bytes[..bytes.len() / 2];

    assert!(decode_native(truncated).is_err());
}

#[test]
fn test_native_rejects_bytes_after_gzip_trailer() {
    let mut bytes = encode_native(&sample_index()).unwrap();
    bytes.extend_from_slice(b"junk");

    assert!(matches!(
        decode_native(&bytes),
        Err(CodecError::TrailingBytes { len: 4 })
    ));
}

#[test]
fn test_native_rejects_second_gzip_member() {
    let first = encode_native(&sample_index()).unwrap();
    let mut bytes = first.clone();
    bytes.extend_from_slice(&first);

    assert!(matches!(
        decode_native(&bytes),
        Err(CodecError::TrailingBytes { .. })
    ));
}

#[test]
fn test_native_rejects_plain_json() {
    let json = serde_json::to_vec(&sample_index()).unwrap();
    assert!(decode_native(&json).is_err());
}

#[test]
fn test_native_rejects_empty_input() {
    assert!(decode_native(&[]).is_err());
}

#[test]
fn test_binary_decodes_to_same_mapping_as_master() {
    let index = sample_index();

    let bytes = encode_binary(&index).expect("encode");
    let decoded = decode_binary(&bytes).expect("decode");

    assert_eq!(decoded, index);
    assert_eq!(decoded.fingerprint(), index.fingerprint());
}

#[test]
fn test_binary_decode_from_unaligned_slice() {
    let bytes = encode_binary(&sample_index()).unwrap();

    let mut shifted = vec![0u8; 1];
    shifted.extend_from_slice(&bytes);

    let decoded = decode_binary(&shifted[1..]).expect("unaligned input still decodes");
    assert_eq!(decoded, sample_index());
}

#[test]
fn test_binary_rejects_garbage() {
    let garbage = vec![0xAB_u8; 64];
    assert!(matches!(
        decode_binary(&garbage),
        Err(CodecError::Binary(_))
    ));
}

#[test]
fn test_binary_rejects_empty_input() {
    assert!(decode_binary(&[]).is_err());
}

#[test]
fn test_binary_rejects_unknown_version() {
    let archive = BinaryIndex {
        version: BINARY_FORMAT_VERSION + 1,
        records: vec![],
    };
    let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&archive).unwrap();

    assert!(matches!(
        decode_binary(&bytes),
        Err(CodecError::UnsupportedVersion { .. })
    ));
}

#[test]
fn test_master_json_decode() {
    let json = br#"{"entities":[{"id":"plot-1","aliases":["A","B"]},{"id":"plot-2","aliases":[]}]}"#;

    let index = decode_master(json, MasterFormat::Json).expect("decode");

    assert_eq!(index.len(), 2);
    assert_eq!(index.get("plot-1").unwrap().len(), 2);
}

#[test]
fn test_master_json_with_bom() {
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice(br#"{"entities":[{"id":"plot-1","aliases":["A"]}]}"#);

    let index = decode_master(&bytes, MasterFormat::Json).expect("BOM is ignored");
    assert!(index.contains("plot-1"));
}

#[test]
fn test_master_blank_identifier_is_rejected() {
    let json = br#"{"entities":[{"id":" ","aliases":["A"]}]}"#;

    assert!(matches!(
        decode_master(json, MasterFormat::Json),
        Err(CodecError::Index(_))
    ));
}

#[test]
fn test_master_malformed_json() {
    assert!(matches!(
        decode_master(b"{\"entities\": [", MasterFormat::Json),
        Err(CodecError::Json(_))
    ));
}

#[test]
fn test_master_misspelled_key_is_rejected() {
    let json = br#"{"entites":[{"id":"plot-1","aliases":["A"]}]}"#;

    assert!(matches!(
        decode_master(json, MasterFormat::Json),
        Err(CodecError::Json(_))
    ));
}

#[test]
fn test_master_missing_entities_is_rejected() {
    assert!(matches!(
        decode_master(b"{}", MasterFormat::Json),
        Err(CodecError::Json(_))
    ));
}

#[test]
fn test_master_unknown_entity_field_is_rejected() {
    let json = br#"{"entities":[{"id":"plot-1","alias":["A"]}]}"#;

    assert!(decode_master(json, MasterFormat::Json).is_err());
}

#[test]
fn test_master_json_encode_roundtrip() {
    let master = sample_master();

    let bytes = encode_master(&master, MasterFormat::Json).unwrap();
    let parsed = parse_master(&bytes, MasterFormat::Json).unwrap();

    assert_eq!(parsed, master);
}

#[test]
fn test_master_tauq_yields_same_index_as_json() {
    let master = AliasMaster::new(vec![
        AliasEntity::new("plot-1", ["North Field", "Field A"]),
        AliasEntity::new("plot-2", ["Orchard", "Old Orchard"]),
    ]);

    let tauq = encode_master(&master, MasterFormat::Tauq).unwrap();
    let json = encode_master(&master, MasterFormat::Json).unwrap();

    let from_tauq = decode_master(&tauq, MasterFormat::Tauq).expect("tauq decode");
    let from_json = decode_master(&json, MasterFormat::Json).expect("json decode");

    assert_eq!(from_tauq, from_json);
}

#[test]
fn test_master_format_from_file_name() {
    assert_eq!(MasterFormat::from_file_name("alias_master.json"), MasterFormat::Json);
    assert_eq!(MasterFormat::from_file_name("alias_master.tqn"), MasterFormat::Tauq);
    assert_eq!(MasterFormat::from_file_name("ALIAS.TAUQ"), MasterFormat::Tauq);
    assert_eq!(MasterFormat::from_file_name("alias_master"), MasterFormat::Json);
}

#[test]
fn test_master_format_from_str() {
    assert_eq!("json".parse::<MasterFormat>().unwrap(), MasterFormat::Json);
    assert_eq!("Tauq".parse::<MasterFormat>().unwrap(), MasterFormat::Tauq);
    assert!("xml".parse::<MasterFormat>().is_err());
}

#[test]
fn test_all_encodings_agree() {
    let index = sample_index();

    let via_native = decode_native(&encode_native(&index).unwrap()).unwrap();
    let via_binary = decode_binary(&encode_binary(&index).unwrap()).unwrap();
    let via_master = decode_master(
        &encode_master(&sample_master(), MasterFormat::Json).unwrap(),
        MasterFormat::Json,
    )
    .unwrap();

    assert_eq!(via_native, index);
    assert_eq!(via_binary, index);
    assert_eq!(via_master, index);
}
