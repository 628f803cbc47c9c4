use std::{io, path::PathBuf};

/// Combined error type for startup failures in the webserver.
/// Request handling itself has no error paths of its own.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("server certificate not found: {}", .0.display())]
    MissingCertificate(PathBuf),

    #[error("server key not found: {}", .0.display())]
    MissingKey(PathBuf),
}
