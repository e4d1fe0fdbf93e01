//! RFC 1035 wire-format constants shared by the decoder and encoder.

/// Fixed header size; anything shorter is dropped.
pub const HEADER_LEN: usize = 12;

/// Receive buffer size and upper bound on any reply.
pub const MAX_PACKET_SIZE: usize = 1024;

/// Encoded name limit, length octets and root terminator included.
pub const MAX_NAME_LEN: usize = 255;

pub const MAX_LABEL_LEN: usize = 63;

pub const FLAG_QR: u16 = 0x8000;
pub const FLAG_AA: u16 = 0x0400;
pub const FLAG_RD: u16 = 0x0100;

pub const OPCODE_SHIFT: u16 = 11;
pub const OPCODE_MASK: u16 = 0x0F;
pub const RCODE_MASK: u16 = 0x000F;

/// Top two bits of a length octet: `11` is a compression pointer, `01`/`10`
/// are the reserved extended label types.
pub const LABEL_TYPE_MASK: u8 = 0xC0;

pub const A_RDATA_LEN: u16 = 4;

#[inline]
pub fn read_u16(buf: &[u8], pos: usize) -> u16 {
    u16::from_be_bytes([buf[pos], buf[pos + 1]])
}
