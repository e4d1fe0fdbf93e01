pub mod decoder;
pub mod encoder;
pub mod listener;
pub mod server;
pub mod wire;

pub use decoder::decode_query;
pub use encoder::encode_response;
pub use listener::DnsListener;
pub use server::DnsServerHandler;
