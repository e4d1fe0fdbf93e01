//! Mockapetris Infrastructure Layer
pub mod dns;
pub mod store;
