// src/config.rs

use crate::errors::ConfigError;
use log::LevelFilter;
use std::fmt;
use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const ADDR_KEY: &str = "RENTALS_ADDR";
pub const LISTINGS_KEY: &str = "RENTALS_LISTINGS";
pub const WORKERS_KEY: &str = "RENTALS_WORKERS";
pub const FETCH_TIMEOUT_KEY: &str = "RENTALS_FETCH_TIMEOUT";
pub const LOG_LEVEL_KEY: &str = "RENTALS_LOG_LEVEL";
pub const LOG_DIR_KEY: &str = "RENTALS_LOG_DIR";

const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);
const DEFAULT_LISTINGS: &str = "./listings.json";
const DEFAULT_WORKERS: usize = 8;
const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the listings JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingSource {
    File(PathBuf),
    Url(Url),
}

impl ListingSource {
    /// `http(s)://` locations are fetched remotely, everything else is a path.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => ListingSource::Url(url),
            _ => ListingSource::File(PathBuf::from(raw)),
        }
    }
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSource::File(path) => write!(f, "{}", path.display()),
            ListingSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Load `.env` from the current directory or its parents.
///
/// Runs before the logger exists, so the caller reports the outcome.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    dotenv_outcome(dotenvy::dotenv())
}

/// A missing `.env` is normal; unreadable or malformed ones are errors.
pub fn dotenv_outcome(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub listings: ListingSource,
    pub max_workers: usize,
    pub fetch_timeout: Duration,
    pub log_level: LevelFilter,
    /// Also write `rentals.log` here when set.
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Read the process environment. Call [`load_dotenv`] first to pick up
    /// a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let addr: SocketAddr = match get(ADDR_KEY) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidAddr {
                    key: ADDR_KEY,
                    value,
                })?,
            None => DEFAULT_ADDR,
        };

        let listings = ListingSource::parse(
            get(LISTINGS_KEY)
                .as_deref()
                .map(str::trim)
                .unwrap_or(DEFAULT_LISTINGS),
        );

        let max_workers = match get(WORKERS_KEY) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: WORKERS_KEY,
                        value,
                    })
                }
            },
            None => DEFAULT_WORKERS,
        };

        let fetch_timeout = match get(FETCH_TIMEOUT_KEY) {
            Some(value) => humantime::parse_duration(value.trim()).map_err(|source| {
                ConfigError::InvalidDuration {
                    key: FETCH_TIMEOUT_KEY,
                    value,
                    source,
                }
            })?,
            None => DEFAULT_FETCH_TIMEOUT,
        };

        let log_level = match get(LOG_LEVEL_KEY) {
            Some(value) => {
                LevelFilter::from_str(value.trim()).map_err(|_| ConfigError::InvalidLogLevel {
                    key: LOG_LEVEL_KEY,
                    value,
                })?
            }
            None => LevelFilter::Info,
        };

        let log_dir = get(LOG_DIR_KEY).map(PathBuf::from);

        Ok(Self {
            addr,
            listings,
            max_workers,
            fetch_timeout,
            log_level,
            log_dir,
        })
    }
}
