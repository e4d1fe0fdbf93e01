mod helpers;

use helpers::{a_query, a_query_raw, build_query, FLAGS_RD};
use mockapetris_domain::{DomainError, OpCode, RecordClass, RecordType};
use mockapetris_infrastructure::dns::decode_query;

fn assert_malformed(buf: &[u8]) {
    match decode_query(buf) {
        Err(DomainError::MalformedPacket(_)) => {}
        other => panic!("expected MalformedPacket, got {:?}", other),
    }
}

#[test]
fn test_decodes_standard_a_query() {
    let query = decode_query(&a_query(0xBEEF, "google.com")).unwrap();

    assert_eq!(query.id, 0xBEEF);
    assert_eq!(query.opcode, OpCode::Query);
    assert!(query.recursion_desired);
    assert_eq!(query.name(), "google.com");
    assert_eq!(query.question.record_type, RecordType::A);
    assert_eq!(query.question.record_class, RecordClass::IN);
}

#[test]
fn test_preserves_name_case() {
    let query = decode_query(&a_query(1, "GoOgle.COM")).unwrap();
    assert_eq!(query.name(), "GoOgle.COM");
}

#[test]
fn test_reads_opcode_and_clear_rd() {
    // OPCODE 2 (STATUS), RD clear
    let buf = build_query(7, 2 << 11, "example.com", 1, 1);
    let query = decode_query(&buf).unwrap();

    assert_eq!(query.opcode, OpCode::Status);
    assert!(!query.recursion_desired);
}

#[test]
fn test_keeps_unsupported_type_and_class() {
    let buf = build_query(9, FLAGS_RD, "example.com", 28, 3);
    let query = decode_query(&buf).unwrap();

    assert_eq!(query.question.record_type, RecordType::Other(28));
    assert_eq!(query.question.record_class, RecordClass::Other(3));
}

#[test]
fn test_decodes_root_name() {
    let query = decode_query(&build_query(3, 0, "", 1, 1)).unwrap();
    assert_eq!(query.name(), "");
}

#[test]
fn test_ignores_trailing_opt_record() {
    let mut buf = a_query(0x1234, "example.com");
    buf[11] = 1; // ARCOUNT = 1
    buf.push(0x00); // root owner
    buf.extend_from_slice(&[0x00, 41]); // TYPE = OPT
    buf.extend_from_slice(&[0x10, 0x00]); // UDP payload size
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // ext rcode, version, flags
    buf.extend_from_slice(&[0x00, 0x00]); // RDLEN

    let query = decode_query(&buf).unwrap();
    assert_eq!(query.name(), "example.com");
}

#[test]
fn test_rejects_short_buffer() {
    assert_malformed(&[0x12, 0x34, 0x01]);
    assert_malformed(&[]);
}

#[test]
fn test_rejects_header_only_buffer() {
    let buf = a_query(1, "example.com");
    assert_malformed(&buf[..12]);
}

#[test]
fn test_rejects_response_packets() {
    let buf = build_query(1, 0x8000 | FLAGS_RD, "example.com", 1, 1);
    assert_malformed(&buf);
}

#[test]
fn test_rejects_zero_questions() {
    let mut buf = a_query(1, "example.com");
    buf[5] = 0;
    assert_malformed(&buf);
}

#[test]
fn test_rejects_multiple_questions() {
    let mut buf = a_query(1, "example.com");
    buf[5] = 2;
    assert_malformed(&buf);
}

#[test]
fn test_rejects_truncated_label() {
    let buf = a_query(1, "example.com");
    // cut inside "example"
    assert_malformed(&buf[..16]);
}

#[test]
fn test_rejects_missing_qtype_qclass() {
    let buf = a_query(1, "example.com");
    assert_malformed(&buf[..buf.len() - 3]);
}

#[test]
fn test_rejects_compression_pointer() {
    let mut buf = a_query(1, "example.com")[..12].to_vec();
    buf.extend_from_slice(&[0xC0, 0x0C]);
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    assert_malformed(&buf);
}

#[test]
fn test_escapes_dot_inside_label() {
    let mut buf = a_query(1, "x")[..12].to_vec();
    buf.push(3);
    buf.extend_from_slice(b"a.b");
    buf.push(4);
    buf.extend_from_slice(b"test");
    buf.push(0);
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

    let query = decode_query(&buf).unwrap();

    assert_eq!(query.name(), "a\\.b.test");
    assert_eq!(query.question.wire_name.as_deref(), Some(&buf[12..buf.len() - 4]));
}

#[test]
fn test_accepts_non_utf8_label() {
    let buf = a_query_raw(0x00E9, &[&b"caf\xE9"[..], &b"test"[..]]);

    let query = decode_query(&buf).unwrap();

    assert_eq!(query.name(), "caf\u{FFFD}.test");
    assert_eq!(query.question.record_type, RecordType::A);
    assert_eq!(
        query.question.wire_name.as_deref(),
        Some(&b"\x04caf\xE9\x04test\x00"[..])
    );
}

#[test]
fn test_keeps_wire_name_for_plain_ascii() {
    let buf = a_query(1, "GoOgle.COM");
    let query = decode_query(&buf).unwrap();

    assert_eq!(
        query.question.wire_name.as_deref(),
        Some(&b"\x06GoOgle\x03COM\x00"[..])
    );
}

#[test]
fn test_rejects_name_over_255_octets() {
    let label = "a".repeat(63);
    let name = [label.as_str(); 4].join(".");
    assert_malformed(&a_query(1, &name));
}

#[test]
fn test_accepts_name_at_limit() {
    // 3 * 64 + 62 + 1 = 255
    let long = "a".repeat(63);
    let name = format!("{long}.{long}.{long}.{}", "b".repeat(61));
    let query = decode_query(&a_query(1, &name)).unwrap();
    assert_eq!(query.name(), name);
}
