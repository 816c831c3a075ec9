use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read configuration file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed configuration: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("unknown dispatch strategy '{0}'")]
    UnknownDispatchStrategy(String),
    #[error("unknown priority strategy '{0}'")]
    UnknownPriorityStrategy(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("could not spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
