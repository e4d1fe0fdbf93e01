#![allow(dead_code)]

pub mod failing_store;
pub mod packets;

pub use failing_store::FailingRecordStore;
pub use packets::{a_query, a_query_raw, build_query, FLAGS_RD};
