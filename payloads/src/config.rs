/// Backend used when no address is configured.
pub const DEFAULT_ADDRESS: &str = "http://localhost:5000";

/// Where the catalog service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port, without a trailing slash.
    pub address: String,
}

impl ClientConfig {
    /// Build from an optional environment value, falling back to
    /// [`DEFAULT_ADDRESS`] when it is unset or blank.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let address = value
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .unwrap_or(DEFAULT_ADDRESS)
            .trim_end_matches('/')
            .to_string();
        Self { address }
    }

    /// Read `BACKEND_URL` from the process environment. Native only; the
    /// browser build resolves it at compile time instead.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var("BACKEND_URL").ok().as_deref())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env_value(None)
    }
}
