// Runtime configuration
//
// Read from the environment; anything unset falls back to a default.

use crate::catalog::Catalog;
use crate::error::{Result, SearchError};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

pub const DB_PATH_VAR: &str = "TRAVEL_SEARCH_DB";
pub const CATALOG_PATH_VAR: &str = "TRAVEL_SEARCH_CATALOG";

const DATA_DIR: &str = ".travel-search";
const DB_FILE: &str = "store.db";

/// Values given on the command line; these beat the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub db_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// `None` means the built-in sample catalog
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), overrides)
    }

    /// Build from any variable source (the environment, or a map in tests)
    ///
    /// Precedence: override, then variable, then default. The default
    /// location is only resolved when nothing else names a store.
    pub fn from_lookup<F>(lookup: F, overrides: Overrides) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match overrides
            .db_path
            .or_else(|| var(&lookup, DB_PATH_VAR).map(PathBuf::from))
        {
            Some(path) => path,
            None => {
                let path = default_db_path()?;
                info!("{DB_PATH_VAR} not set, using default: {}", path.display());
                path
            }
        };

        let catalog_path = overrides
            .catalog_path
            .or_else(|| var(&lookup, CATALOG_PATH_VAR).map(PathBuf::from));
        if catalog_path.is_none() {
            debug!("{CATALOG_PATH_VAR} not set, using the built-in catalog");
        }

        Ok(Self {
            db_path,
            catalog_path,
        })
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::sample()),
        }
    }
}

// Blank values count as unset.
fn var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn default_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        SearchError::Config("Could not determine home directory".to_string())
    })?;

    Ok(home.join(DATA_DIR).join(DB_FILE))
}
