use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY` from the environment
    #[serde(default = "default_use_system_proxy")]
    pub use_system_proxy: bool,
}

fn default_use_system_proxy() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("objmesh/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: default_use_system_proxy(),
        }
    }
}
