use clap::Parser;

/// Deployment mode that hides fault detail from clients.
pub const PRODUCTION: &str = "production";

/// AIMCS Backend API gateway.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Listen port
    #[arg(long, default_value_t = 3000, env = "PORT")]
    pub port: u16,

    /// Deployment mode ("development", "production", ...)
    #[arg(long = "env", default_value = "development", env = "NODE_ENV")]
    pub environment: String,

    /// Log format: "text" or "json"
    #[arg(long, default_value = "text", env = "LOG_FORMAT")]
    pub log_format: String,

    /// Model id used when a chat request does not name one
    #[arg(long, default_value = "gpt-4o-mini", env = "DEFAULT_MODEL")]
    pub default_model: String,

    /// Maximum accepted request body size in bytes
    #[arg(long, default_value_t = 100 * 1024, env = "BODY_LIMIT")]
    pub body_limit: usize,
}

impl Config {
    /// Socket address to bind, e.g. "0.0.0.0:3000".
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether fault detail may be returned to clients.
    pub fn verbose_errors(&self) -> bool {
        !self.environment.eq_ignore_ascii_case(PRODUCTION)
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            environment: "development".into(),
            log_format: "text".into(),
            default_model: "gpt-4o-mini".into(),
            body_limit: 100 * 1024,
        }
    }
}
