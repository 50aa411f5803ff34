//! Configuration loading and representation.
//!
//! Every setting has a default, so with nothing set the binaries read
//! `./UITeam-SyntheticData.csv`, write `./syntheticData.db`, and serve on
//! port 5000.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const PORT_ENV: &str = "CATALOG_PORT";
pub const DB_PATH_ENV: &str = "CATALOG_DB_PATH";
pub const CSV_PATH_ENV: &str = "CATALOG_CSV_PATH";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_PATH: &str = "./syntheticData.db";
pub const DEFAULT_CSV_PATH: &str = "./UITeam-SyntheticData.csv";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub port: u16,
    pub db_path: PathBuf,
    pub csv_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

impl CatalogConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: load(&lookup, PORT_ENV, DEFAULT_PORT)?,
            db_path: load(&lookup, DB_PATH_ENV, PathBuf::from(DEFAULT_DB_PATH))?,
            csv_path: load(&lookup, CSV_PATH_ENV, PathBuf::from(DEFAULT_CSV_PATH))?,
        })
    }
}

fn load<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        tracing::info!("{key} not set, using default: {default:?}");
        return Ok(default);
    };

    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.clone(),
        reason: e.to_string(),
    })
}
