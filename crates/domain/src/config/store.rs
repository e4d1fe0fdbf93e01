use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Sqlite,
    Redis,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::Sqlite => "sqlite",
            StoreBackend::Redis => "redis",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "sqlite" => Ok(StoreBackend::Sqlite),
            "redis" => Ok(StoreBackend::Redis),
            _ => Err(format!("Unknown store backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Redis `host:port`.
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default)]
    pub password: Option<String>,

    /// Redis logical database index.
    #[serde(default)]
    pub db: i64,

    /// SQLite database file.
    #[serde(default = "default_path")]
    pub path: String,

    /// Records loaded into the in-memory backend at construction.
    #[serde(default = "default_seed")]
    pub seed: BTreeMap<String, String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            address: default_address(),
            password: None,
            db: 0,
            path: default_path(),
            seed: default_seed(),
        }
    }
}

impl StoreConfig {
    /// The password is percent-encoded so `@`, `:` or `/` in it cannot
    /// change where the URL points.
    pub fn redis_url(&self) -> String {
        match self.password.as_deref() {
            Some(password) if !password.is_empty() => format!(
                "redis://:{}@{}/{}",
                urlencoding::encode(password),
                self.address,
                self.db
            ),
            _ => format!("redis://{}/{}", self.address, self.db),
        }
    }

    pub fn sqlite_url(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

fn default_address() -> String {
    "127.0.0.1:6379".to_string()
}

fn default_path() -> String {
    "./mockapetris.db".to_string()
}

fn default_seed() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("google.com".to_string(), "216.58.196.142".to_string()),
        ("amazon.com".to_string(), "176.32.103.205".to_string()),
    ])
}
