/// Server configuration loaded from environment variables.
///
/// Bind and CORS settings have defaults suitable for local development;
/// the Supabase settings are required.
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
    /// Supabase project URL, e.g. `https://xyz.supabase.co`.
    pub supabase_url: String,
    /// Supabase service-role API key (server-side only).
    pub service_role_key: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SUPABASE_URL`         | (required)                 |
    /// | `SERVICE_ROLE_KEY`     | (required)                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let supabase_url = std::env::var("SUPABASE_URL").expect("SUPABASE_URL must be set");
        let service_role_key =
            std::env::var("SERVICE_ROLE_KEY").expect("SERVICE_ROLE_KEY must be set");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            supabase_url,
            service_role_key,
        }
    }
}
