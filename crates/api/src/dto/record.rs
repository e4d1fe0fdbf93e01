use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddRecordRequest {
    pub url: String,
    pub ip: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRecordRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordResponse {
    pub url: String,
    pub ip: String,
}
