use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("there are no elevator cars to dispatch")]
    NoCars,

    #[error("floor {requested} does not exist, the building has {floor_count} floors")]
    UnknownFloor { requested: u32, floor_count: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{0}` expects a number")]
    MissingArgument(String),

    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),

    #[error("floors are numbered from 1")]
    FloorZero,

    #[error("`{command}` is not available with {mode} controls")]
    WrongMode { command: String, mode: String },
}
