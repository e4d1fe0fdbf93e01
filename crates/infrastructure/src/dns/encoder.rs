use super::wire::{
    A_RDATA_LEN, FLAG_AA, FLAG_QR, FLAG_RD, MAX_LABEL_LEN, MAX_NAME_LEN, MAX_PACKET_SIZE,
    OPCODE_MASK, OPCODE_SHIFT, RCODE_MASK,
};
use mockapetris_domain::{DnsResponse, DomainError};

/// Serializes a [`DnsResponse`] into wire format.
///
/// Header flags: QR set, OPCODE and RD copied, AA as given, TC/RA clear.
/// QDCOUNT is 1, ANCOUNT 0 or 1, NSCOUNT/ARCOUNT 0. Names are written as plain
/// length-prefixed labels with no compression. A decoded question carries its
/// original QNAME octets, which are echoed as-is so the question section is
/// byte-identical to the request even when the name is not valid UTF-8.
pub fn encode_response(response: &DnsResponse) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(MAX_PACKET_SIZE);

    let mut flags = FLAG_QR | ((response.opcode.to_u8() as u16 & OPCODE_MASK) << OPCODE_SHIFT);
    if response.authoritative {
        flags |= FLAG_AA;
    }
    if response.recursion_desired {
        flags |= FLAG_RD;
    }
    flags |= response.response_code.to_u8() as u16 & RCODE_MASK;

    buf.extend_from_slice(&response.id.to_be_bytes());
    buf.extend_from_slice(&flags.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&response.answer_count().to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());

    let question = &response.question;
    match &question.wire_name {
        Some(wire) => buf.extend_from_slice(wire),
        None => write_name(&mut buf, &question.name)?,
    }
    buf.extend_from_slice(&question.record_type.to_u16().to_be_bytes());
    buf.extend_from_slice(&question.record_class.to_u16().to_be_bytes());

    if let Some(answer) = &response.answer {
        match &question.wire_name {
            Some(wire) if answer.name == question.name => buf.extend_from_slice(wire),
            _ => write_name(&mut buf, &answer.name)?,
        }
        buf.extend_from_slice(&answer.record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&answer.record_class.to_u16().to_be_bytes());
        buf.extend_from_slice(&answer.ttl.to_be_bytes());
        buf.extend_from_slice(&A_RDATA_LEN.to_be_bytes());
        buf.extend_from_slice(&answer.rdata());
    }

    if buf.len() > MAX_PACKET_SIZE {
        return Err(DomainError::EncodeFailure(format!(
            "response is {} bytes, limit is {}",
            buf.len(),
            MAX_PACKET_SIZE
        )));
    }

    Ok(buf)
}

fn write_name(buf: &mut Vec<u8>, name: &str) -> Result<(), DomainError> {
    let start = buf.len();

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DomainError::EncodeFailure(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::EncodeFailure(format!(
                    "label '{}' exceeds {} octets",
                    label, MAX_LABEL_LEN
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0);

    if buf.len() - start > MAX_NAME_LEN {
        return Err(DomainError::EncodeFailure(format!(
            "name '{}' exceeds {} octets",
            name, MAX_NAME_LEN
        )));
    }

    Ok(())
}
