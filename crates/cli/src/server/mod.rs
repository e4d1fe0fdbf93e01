pub mod dns;
pub mod web;

pub use dns::start_dns_server;
pub use web::{bind_web_server, start_web_server};
