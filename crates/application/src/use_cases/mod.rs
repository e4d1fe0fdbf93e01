pub mod dns;
pub mod records;

pub use dns::{DnsResolution, ResolutionOutcome, ResolveQueryUseCase};
pub use records::{DeleteRecordUseCase, GetRecordUseCase, SetRecordUseCase};
