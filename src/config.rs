/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ConfigError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub building: BuildingConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BuildingConfig {
    pub title: String,
    pub n_floors: u32,
    pub n_cars: usize,
    pub mode: Mode,
}

impl Default for BuildingConfig {
    fn default() -> BuildingConfig {
        BuildingConfig {
            title: "Elevator".to_string(),
            n_floors: 5,
            n_cars: 2,
            mode: Mode::Single,
        }
    }
}

/**
 * Which floor controls the building shows.
 *
 * - `Single`: one numbered button per floor, the car just goes there.
 * - `Hall`:   Up/Down buttons per floor. The car comes to the floor and then
 *             continues to the top (Up) or bottom (Down) floor.
 */
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Single,
    Hall,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Mode, String> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Mode::Single),
            "hall" => Ok(Mode::Hall),
            other => Err(format!("unknown control mode `{}` (expected single or hall)", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single => write!(f, "single"),
            Mode::Hall => write!(f, "hall"),
        }
    }
}

/// Values given on the command line. `None` keeps what the file says.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub title: Option<String>,
    pub n_floors: Option<u32>,
    pub n_cars: Option<usize>,
    pub mode: Option<Mode>,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

impl Config {
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(title) = overrides.title {
            self.building.title = title;
        }
        if let Some(n_floors) = overrides.n_floors {
            self.building.n_floors = n_floors;
        }
        if let Some(n_cars) = overrides.n_cars {
            self.building.n_cars = n_cars;
        }
        if let Some(mode) = overrides.mode {
            self.building.mode = mode;
        }
    }
}
