use super::{DnsQuery, DnsQuestion, OpCode, ResourceRecord};
use std::fmt;

/// Header RCODE (4 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u8),
}

impl ResponseCode {
    pub fn to_u8(&self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NXDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Other(code) => *code & 0x0F,
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::NoError => write!(f, "NOERROR"),
            ResponseCode::FormErr => write!(f, "FORMERR"),
            ResponseCode::ServFail => write!(f, "SERVFAIL"),
            ResponseCode::NXDomain => write!(f, "NXDOMAIN"),
            ResponseCode::NotImp => write!(f, "NOTIMP"),
            ResponseCode::Refused => write!(f, "REFUSED"),
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
        }
    }
}

/// The reply paired to a [`DnsQuery`].
///
/// Carries the query's id, opcode, RD flag and question unchanged, plus at
/// most one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub id: u16,
    pub opcode: OpCode,
    pub recursion_desired: bool,
    pub authoritative: bool,
    pub response_code: ResponseCode,
    pub question: DnsQuestion,
    pub answer: Option<ResourceRecord>,
}

impl DnsResponse {
    /// Authoritative NOERROR reply to `query`.
    ///
    /// The response code is NOERROR whether or not `answer` is present: a miss
    /// and a store failure produce the same reply as an empty hit.
    pub fn answer_to(query: &DnsQuery, answer: Option<ResourceRecord>) -> Self {
        Self {
            id: query.id,
            opcode: query.opcode,
            recursion_desired: query.recursion_desired,
            authoritative: true,
            response_code: ResponseCode::NoError,
            question: query.question.clone(),
            answer,
        }
    }

    pub fn answer_count(&self) -> u16 {
        u16::from(self.answer.is_some())
    }
}
