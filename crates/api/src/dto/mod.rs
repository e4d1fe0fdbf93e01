pub mod record;

pub use record::{AddRecordRequest, RecordResponse, RemoveRecordRequest};
