use super::wire::{
    read_u16, FLAG_QR, FLAG_RD, HEADER_LEN, LABEL_TYPE_MASK, MAX_NAME_LEN, OPCODE_MASK,
    OPCODE_SHIFT,
};
use mockapetris_domain::{DnsQuery, DnsQuestion, DomainError, OpCode, RecordClass, RecordType};

/// Decodes a raw datagram into a [`DnsQuery`] in a single pass.
///
/// Fails with [`DomainError::MalformedPacket`] for:
///
/// * Buffer shorter than the 12-byte header
/// * QR bit set (a response, not a query)
/// * QDCOUNT ≠ 1
/// * Question running past the end of the buffer
/// * Compression pointer or extended label type in the QNAME
/// * QNAME longer than 255 octets
///
/// Answer, authority and additional sections (e.g. an EDNS0 OPT record) are
/// not inspected.
pub fn decode_query(buf: &[u8]) -> Result<DnsQuery, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(malformed(format!(
            "{} bytes is shorter than the {}-byte header",
            buf.len(),
            HEADER_LEN
        )));
    }

    let id = read_u16(buf, 0);
    let flags = read_u16(buf, 2);

    if flags & FLAG_QR != 0 {
        return Err(malformed("QR bit set"));
    }

    let qdcount = read_u16(buf, 4);
    if qdcount != 1 {
        return Err(malformed(format!("expected 1 question, got {}", qdcount)));
    }

    let (name, wire_name, pos) = read_name(buf, HEADER_LEN)?;

    if pos + 4 > buf.len() {
        return Err(malformed("question truncated before QTYPE/QCLASS"));
    }
    let qtype = read_u16(buf, pos);
    let qclass = read_u16(buf, pos + 2);

    Ok(DnsQuery {
        id,
        opcode: OpCode::from_u8(((flags >> OPCODE_SHIFT) & OPCODE_MASK) as u8),
        recursion_desired: flags & FLAG_RD != 0,
        question: DnsQuestion::new(
            name,
            RecordType::from_u16(qtype),
            RecordClass::from_u16(qclass),
        )
        .with_wire_name(wire_name),
    })
}

/// Reads an uncompressed name starting at `start`; returns the lookup key,
/// the raw QNAME octets and the offset just past the root label.
///
/// Any octet is legal inside a label, so the key is built lossily: invalid
/// UTF-8 becomes U+FFFD and a `.` inside a label is escaped as `\.`.
fn read_name(buf: &[u8], start: usize) -> Result<(String, &[u8], usize), DomainError> {
    let mut name = String::new();
    let mut pos = start;

    loop {
        let len_octet = *buf
            .get(pos)
            .ok_or_else(|| malformed("name runs past end of packet"))?;
        pos += 1;

        if len_octet == 0 {
            break;
        }
        if len_octet & LABEL_TYPE_MASK != 0 {
            return Err(malformed("compressed or extended label in question"));
        }
        let label_len = len_octet as usize;

        // keep room for the root terminator
        if pos + label_len - start + 1 > MAX_NAME_LEN {
            return Err(malformed("name exceeds 255 octets"));
        }

        let label = buf
            .get(pos..pos + label_len)
            .ok_or_else(|| malformed("label runs past end of packet"))?;

        if !name.is_empty() {
            name.push('.');
        }
        let text = String::from_utf8_lossy(label);
        if text.contains('.') {
            name.push_str(&text.replace('.', "\\."));
        } else {
            name.push_str(&text);
        }
        pos += label_len;
    }

    Ok((name, &buf[start..pos], pos))
}

fn malformed(reason: impl Into<String>) -> DomainError {
    DomainError::MalformedPacket(reason.into())
}
