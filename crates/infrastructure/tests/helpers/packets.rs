pub const FLAGS_RD: u16 = 0x0100;

/// Standard query with one question and empty remaining sections.
pub fn build_query(id: u16, flags: u16, name: &str, qtype: u16, qclass: u16) -> Vec<u8> {
    let mut buf = Vec::with_capacity(64);
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&flags.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]); // QDCOUNT
    buf.extend_from_slice(&[0x00, 0x00]); // ANCOUNT
    buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
    buf.extend_from_slice(&[0x00, 0x00]); // ARCOUNT
    if !name.is_empty() {
        for label in name.split('.') {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0x00);
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&qclass.to_be_bytes());
    buf
}

pub fn a_query(id: u16, name: &str) -> Vec<u8> {
    build_query(id, FLAGS_RD, name, 1, 1)
}

/// A/IN query whose QNAME labels are given as raw octets.
pub fn a_query_raw(id: u16, labels: &[&[u8]]) -> Vec<u8> {
    let mut buf = build_query(id, FLAGS_RD, "", 1, 1);
    buf.truncate(12);
    for label in labels {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label);
    }
    buf.push(0x00);
    buf.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
    buf
}
