pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid bind address {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

impl AppError {
    pub fn bind(addr: impl Into<String>, source: std::net::AddrParseError) -> Self {
        Self::Bind {
            addr: addr.into(),
            source,
        }
    }
}
