pub mod resolve_query;

pub use resolve_query::{DnsResolution, ResolutionOutcome, ResolveQueryUseCase};
