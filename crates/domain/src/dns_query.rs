use super::{RecordClass, RecordType};
use std::fmt;
use std::sync::Arc;

/// Header OPCODE (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    Query,
    Status,
    Notify,
    Update,
    Other(u8),
}

impl OpCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            OpCode::Query => 0,
            OpCode::Status => 2,
            OpCode::Notify => 4,
            OpCode::Update => 5,
            OpCode::Other(code) => *code & 0x0F,
        }
    }

    pub fn from_u8(code: u8) -> Self {
        match code & 0x0F {
            0 => OpCode::Query,
            2 => OpCode::Status,
            4 => OpCode::Notify,
            5 => OpCode::Update,
            other => OpCode::Other(other),
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpCode::Query => write!(f, "QUERY"),
            OpCode::Status => write!(f, "STATUS"),
            OpCode::Notify => write!(f, "NOTIFY"),
            OpCode::Update => write!(f, "UPDATE"),
            OpCode::Other(code) => write!(f, "OPCODE{}", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    /// Dot-joined labels, no trailing dot. The root name is `""`.
    ///
    /// For a decoded question this is the store lookup key: octets that are
    /// not UTF-8 become U+FFFD and a `.` inside a label is written `\.`.
    pub name: Arc<str>,
    /// QNAME exactly as received, root label included. Echoed verbatim when
    /// present; otherwise the encoder rebuilds it from `name`.
    pub wire_name: Option<Arc<[u8]>>,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl DnsQuestion {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, record_class: RecordClass) -> Self {
        Self {
            name: name.into(),
            wire_name: None,
            record_type,
            record_class,
        }
    }

    pub fn with_wire_name(mut self, wire_name: impl Into<Arc<[u8]>>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }
}

/// A decoded lookup request: header fields plus its single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub id: u16,
    pub opcode: OpCode,
    pub recursion_desired: bool,
    pub question: DnsQuestion,
}

impl DnsQuery {
    pub fn new(id: u16, question: DnsQuestion) -> Self {
        Self {
            id,
            opcode: OpCode::Query,
            recursion_desired: false,
            question,
        }
    }

    pub fn name(&self) -> &str {
        &self.question.name
    }
}
