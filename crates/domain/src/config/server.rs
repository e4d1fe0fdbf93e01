use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address both the DNS listener and the control plane bind to.
    pub bind_address: String,

    pub dns_port: u16,

    pub web_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            dns_port: 8090,
            web_port: 1348,
        }
    }
}

impl ServerConfig {
    pub fn dns_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.dns_port)
    }

    pub fn web_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.web_port)
    }
}
