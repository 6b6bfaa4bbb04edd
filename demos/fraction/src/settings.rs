//! `fraction.toml` — run settings.
//!
//! ```toml
//! log_level  = "debug"
//! output_dir = "out"
//! population = "persons.csv"   # omit to use the embedded population
//! min_age    = 18
//!
//! [init]
//! seed          = 7
//! fraction_size = 2
//! modes         = ["car_driver", "pedestrian", "public_transport"]
//!
//! [init.simulation_days]
//! count         = 7
//! first_weekday = "monday"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pd_core::InitConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level:  Option<String>,
    pub output_dir: PathBuf,
    pub population: Option<PathBuf>,
    /// Persons younger than this order nothing and get no agent.
    pub min_age:    u8,
    pub init:       InitConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level:  None,
            output_dir: PathBuf::from("output"),
            population: None,
            min_age:    18,
            init:       InitConfig::default(),
        }
    }
}

impl Settings {
    /// Read settings from `path`, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing settings in {}", path.display()))
    }
}
