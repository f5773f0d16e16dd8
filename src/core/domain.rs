use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub data_dir: String,
    pub accounts_document: String,
    pub catalog_document: String,
    pub default_balance: i64,
    pub bind_address: String,
    pub seed_catalog: bool,
    pub log_level: String,
}

impl Configuration {
    pub fn new(data_dir: &str) -> Self {
        Configuration {
            data_dir: data_dir.to_string(),
            accounts_document: "users".to_string(),
            catalog_document: "lib".to_string(),
            default_balance: 100,
            bind_address: "0.0.0.0:5001".to_string(),
            seed_catalog: true,
            log_level: "info".to_string(),
        }
    }

    // load reads an optional .env file and overrides defaults with LIBRARY_* variables,
    // e.g. LIBRARY_DATA_DIR=/var/lib/library or LIBRARY_BIND_ADDRESS=127.0.0.1:8080
    pub fn load() -> LibraryResult<Self> {
        let _ = dotenvy::dotenv();
        let defaults = Configuration::new(".");
        let settings = Config::builder()
            .set_default("data_dir", defaults.data_dir)?
            .set_default("accounts_document", defaults.accounts_document)?
            .set_default("catalog_document", defaults.catalog_document)?
            .set_default("default_balance", defaults.default_balance)?
            .set_default("bind_address", defaults.bind_address)?
            .set_default("seed_catalog", defaults.seed_catalog)?
            .set_default("log_level", defaults.log_level)?
            .add_source(Environment::with_prefix("LIBRARY").try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
