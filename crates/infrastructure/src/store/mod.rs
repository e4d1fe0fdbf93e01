pub mod memory;
pub mod redis;
pub mod sqlite;

pub use memory::InMemoryRecordStore;
pub use self::redis::RedisRecordStore;
pub use sqlite::SqliteRecordStore;
