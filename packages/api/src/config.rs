//! Server settings: built-in defaults, then an optional `config.toml`, then
//! `SHAREDNOTES_`-prefixed environment variables (`SHAREDNOTES_DATABASE_HOST`, ...).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
    /// Directory served under `/statics/`.
    pub statics: String,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            statics: "./statics".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub database: String,
    pub connections: u32,
    /// Full connection string; wins over the individual fields when set.
    #[serde(default)]
    pub url: Option<String>,
}

impl Database {
    pub fn url(&self) -> String {
        match &self.url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.database
            ),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            user: "postgres".into(),
            password: "pp".into(),
            host: "localhost".into(),
            port: "5432".into(),
            database: "notedb".into(),
            connections: 5,
            url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    /// Only send the session cookie over HTTPS.
    pub secure: bool,
    /// Days of inactivity before a session expires.
    pub days: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            secure: false,
            days: 7,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    pub server: Server,
    pub database: Database,
    pub session: Session,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("config.toml")
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let server = Server::default();
        let database = Database::default();
        let session = Session::default();

        let config = Config::builder()
            .set_default("server.host", server.host)?
            .set_default("server.port", i64::from(server.port))?
            .set_default("server.statics", server.statics)?
            .set_default("database.user", database.user)?
            .set_default("database.password", database.password)?
            .set_default("database.host", database.host)?
            .set_default("database.port", database.port)?
            .set_default("database.database", database.database)?
            .set_default("database.connections", i64::from(database.connections))?
            .set_default("session.secure", session.secure)?
            .set_default("session.days", session.days)?
            .add_source(
                File::with_name(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("SHAREDNOTES")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_settings() {
        set_var("SHAREDNOTES_DATABASE_USER", "test_user_2");
        set_var("SHAREDNOTES_SERVER_PORT", "9090");
        let settings = Settings::from_file("does-not-exist.toml").unwrap_or_default();
        assert_eq!(
            settings.database.url(),
            "postgres://test_user_2:pp@localhost:5432/notedb"
        );
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.address(), "0.0.0.0:9090");
        assert_eq!(settings.session.days, 7);
    }

    #[test]
    fn test_explicit_url_wins() {
        let database = Database {
            url: Some("postgres://elsewhere/db".into()),
            ..Database::default()
        };
        assert_eq!(database.url(), "postgres://elsewhere/db");
    }
}
