pub mod health;
pub mod records;

pub use health::health_check;
pub use records::{add_record, get_record, remove_record};
