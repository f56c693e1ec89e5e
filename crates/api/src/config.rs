use crate::auth::basic::ApiCredentials;

/// Server configuration loaded from environment variables.
///
/// All fields except the credentials have defaults suitable for local
/// development. In production, override via environment variables.
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
    /// Time allowed to open a database connection (default: `5`).
    pub db_connect_timeout_secs: u64,
    /// Time allowed for one statement on an open connection (default: `10`).
    pub db_statement_timeout_secs: u64,
    /// The single Basic-Auth credential pair the API accepts.
    pub credentials: ApiCredentials,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                    |
    /// |-----------------------------|----------------------------|
    /// | `HOST`                      | `0.0.0.0`                  |
    /// | `PORT`                      | `3000`                     |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                       |
    /// | `DB_CONNECT_TIMEOUT_SECS`   | `5`                        |
    /// | `DB_STATEMENT_TIMEOUT_SECS` | `10`                       |
    ///
    /// Credentials come from [`ApiCredentials::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_cors_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs: secs_from_env("REQUEST_TIMEOUT_SECS", 30),
            db_connect_timeout_secs: secs_from_env("DB_CONNECT_TIMEOUT_SECS", 5),
            db_statement_timeout_secs: secs_from_env("DB_STATEMENT_TIMEOUT_SECS", 10),
            credentials: ApiCredentials::from_env(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn secs_from_env(var: &str, default: u64) -> u64 {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{var} must be a valid u64")),
        Err(_) => default,
    }
}
