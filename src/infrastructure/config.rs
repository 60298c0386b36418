use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub secret_key: Option<String>,
    /// File receiving INFO and above when not in debug mode
    pub error_log: Option<String>,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://fyyur.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            debug: env_flag("DEBUG"),
            secret_key: env::var("SECRET_KEY").ok().filter(|s| !s.is_empty()),
            error_log: env::var("ERROR_LOG").ok().filter(|s| !s.is_empty()),
            seed_demo: env_flag("SEED_DEMO"),
        }
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        for key in ["DATABASE_URL", "HOST", "PORT", "DEBUG", "SECRET_KEY", "ERROR_LOG", "SEED_DEMO"] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear();
        let config = Config::from_env();
        assert_eq!(config.database_url, "sqlite://fyyur.db?mode=rwc");
        assert_eq!(config.port, 5000);
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert!(!config.debug);
        assert!(config.error_log.is_none());
        assert!(!config.seed_demo);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear();
        unsafe {
            env::set_var("PORT", "3000");
            env::set_var("HOST", "127.0.0.1");
            env::set_var("DEBUG", "True");
            env::set_var("ERROR_LOG", "error.log");
            env::set_var("SEED_DEMO", "1");
        }
        let config = Config::from_env();
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert!(config.debug);
        assert_eq!(config.error_log.as_deref(), Some("error.log"));
        assert!(config.seed_demo);
        clear();
    }

    #[test]
    #[serial]
    fn test_bad_port_falls_back() {
        clear();
        unsafe { env::set_var("PORT", "not-a-port") };
        assert_eq!(Config::from_env().port, 5000);
        clear();
    }
}
