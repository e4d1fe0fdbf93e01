use std::fmt;

/// QTYPE / TYPE values the responder distinguishes.
///
/// Only `A` is ever answered; every other code is carried through decoding
/// untouched as `Other` so the question can be echoed back byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    ANY,
    Other(u16),
}

impl RecordType {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::ANY => 255,
            RecordType::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            255 => RecordType::ANY,
            other => RecordType::Other(other),
        }
    }

    /// True when an A record is an acceptable answer to this question type.
    pub fn accepts_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::ANY)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::ANY => write!(f, "ANY"),
            RecordType::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

/// QCLASS / CLASS values. `IN` is the only class the responder serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    IN,
    Other(u16),
}

impl RecordClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordClass::IN,
            other => RecordClass::Other(other),
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordClass::IN => write!(f, "IN"),
            RecordClass::Other(code) => write!(f, "CLASS{}", code),
        }
    }
}
