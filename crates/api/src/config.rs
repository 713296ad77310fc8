use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Listing cache TTL in seconds (default: `86400`, one day).
    pub listing_cache_ttl_secs: u64,
    /// Listing cache entry capacity (default: `64`).
    pub listing_cache_capacity: usize,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `HOST`                    | `0.0.0.0`   |
    /// | `PORT`                    | `3000`      |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`        |
    /// | `LISTING_CACHE_TTL_SECS`  | `86400`     |
    /// | `LISTING_CACHE_CAPACITY`  | `64`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let listing_cache_ttl_secs: u64 = std::env::var("LISTING_CACHE_TTL_SECS")
            .unwrap_or_else(|_| "86400".into())
            .parse()
            .expect("LISTING_CACHE_TTL_SECS must be a valid u64");

        let listing_cache_capacity: usize = std::env::var("LISTING_CACHE_CAPACITY")
            .unwrap_or_else(|_| "64".into())
            .parse()
            .expect("LISTING_CACHE_CAPACITY must be a valid usize");

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            listing_cache_ttl_secs,
            listing_cache_capacity,
            jwt,
        }
    }
}
