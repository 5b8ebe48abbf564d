use clap::{Parser, ValueEnum};
use microurl_shortener::settings::{DEFAULT_MAX_ATTEMPTS, DEFAULT_MICRO_LENGTH};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "MICROURL_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "MICROURL_STORAGE_BACKEND";
pub const DATABASE_URL_ENV: &str = "MICROURL_DATABASE_URL";
pub const MICRO_LENGTH_ENV: &str = "MICROURL_MICRO_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "MICROURL_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "MICROURL_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://url-db.sqlite";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "sqlite")]
    Sqlite,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "microurl", about = "Shortens URLs into micros and redirects them back")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Sqlite
    )]
    pub storage: StorageBackendArg,

    /// SQLite database, created if missing. Ignored for in-memory storage.
    #[arg(long, env = DATABASE_URL_ENV, default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    #[arg(long, env = MICRO_LENGTH_ENV, default_value_t = DEFAULT_MICRO_LENGTH)]
    pub micro_length: usize,

    /// Candidate micros tried per registration before giving up.
    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}
