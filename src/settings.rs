use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub database_url: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// URL prefix under which uploaded project images are served.
    #[serde(default = "default_media_url")]
    pub media_url: String,

    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(default)]
    pub smtp_username: Option<String>,

    #[serde(default)]
    pub smtp_password: Option<String>,

    /// Sender address for outbound notification mail.
    #[serde(default = "default_from_email")]
    pub default_from_email: String,

    /// Addresses notified about new contact submissions.
    #[serde(default)]
    pub contact_recipients: Vec<String>,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio-API".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}
fn default_media_url() -> String {
    "/media/".to_string()
}
fn default_smtp_host() -> String {
    "localhost".to_string()
}
fn default_smtp_port() -> u16 {
    587
}
fn default_from_email() -> String {
    "portfolio@localhost".to_string()
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        // Env keys map flat onto field names (APP_SMTP_HOST -> smtp_host);
        // the two list-valued settings accept comma-separated values.
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name.to_string().to_lowercase())).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("cors_allowed_origins")
                    .with_list_parse_key("contact_recipients"),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Inject critical env values if missing
        config.database_url = fill_or_env(config.database_url, "APP_DATABASE_URL")?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_url.trim().is_empty() {
            errors.push("DATABASE_URL cannot be empty");
        }
        if !self.default_from_email.contains('@') {
            errors.push("DEFAULT_FROM_EMAIL must be a valid email address");
        }
        if self.recipients().is_empty() {
            errors.push("CONTACT_RECIPIENTS must contain at least one address");
        }
        if self.is_production() && self.cors_origins().iter().any(|o| o == "*") {
            errors.push("Wildcard CORS (*) is not allowed in production");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    pub fn cors_origins(&self) -> Vec<String> {
        split_list(&self.cors_allowed_origins)
    }

    pub fn recipients(&self) -> Vec<String> {
        split_list(&self.contact_recipients)
    }
}

/// Entries may themselves be comma-separated (e.g. a single env value).
fn split_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn fill_or_env(current: String, env_key: &str) -> Result<String, ConfigError> {
    if current.trim().is_empty() {
        env::var(env_key).map_err(|_| ConfigError::Message(format!("{env_key} must be set")))
    } else {
        Ok(current)
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("database_url", &self.database_url.redact())
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("media_url", &self.media_url)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username.as_deref().unwrap_or("").redact())
            .field("smtp_password", &self.smtp_password.as_deref().unwrap_or("").redact())
            .field("default_from_email", &self.default_from_email)
            .field("contact_recipients", &self.contact_recipients)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipients_split_on_commas() {
        let mut config = test_config();
        config.contact_recipients = vec!["a@example.com, b@example.com".into(), "c@example.com".into()];
        assert_eq!(config.recipients(), vec!["a@example.com", "b@example.com", "c@example.com"]);
    }

    #[test]
    fn env_overrides_use_flat_keys() {
        unsafe {
            env::set_var("APP_DATABASE_URL", "postgres://localhost/portfolio_test");
            env::set_var("APP_SMTP_HOST", "mail.example.com");
            env::set_var("APP_SMTP_PORT", "2525");
            env::set_var("APP_DEFAULT_FROM_EMAIL", "noreply@example.com");
            env::set_var("APP_CONTACT_RECIPIENTS", "a@example.com,b@example.com");
        }

        let config = AppConfig::new().expect("configuration should load from env");

        assert_eq!(config.smtp_host, "mail.example.com");
        assert_eq!(config.smtp_port, 2525);
        assert_eq!(config.default_from_email, "noreply@example.com");
        assert_eq!(config.recipients(), vec!["a@example.com", "b@example.com"]);

        unsafe {
            env::remove_var("APP_DATABASE_URL");
            env::remove_var("APP_SMTP_HOST");
            env::remove_var("APP_SMTP_PORT");
            env::remove_var("APP_DEFAULT_FROM_EMAIL");
            env::remove_var("APP_CONTACT_RECIPIENTS");
        }
    }

    #[test]
    fn production_rejects_wildcard_cors() {
        let mut config = test_config();
        config.env = AppEnvironment::Production;
        config.cors_allowed_origins = vec!["*".into()];
        assert!(config.validate().is_err());
    }

    fn test_config() -> AppConfig {
        AppConfig {
            env: AppEnvironment::Testing,
            name: "Portfolio API Test".into(),
            port: 0,
            host: "127.0.0.1".into(),
            worker_count: 1,
            database_url: "postgres://localhost/portfolio_test".into(),
            cors_allowed_origins: vec!["*".into()],
            media_url: "/media/".into(),
            smtp_host: "localhost".into(),
            smtp_port: 1025,
            smtp_username: None,
            smtp_password: None,
            default_from_email: "portfolio@example.com".into(),
            contact_recipients: vec!["admin@example.com".into()],
        }
    }
}
