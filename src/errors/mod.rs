use std::{fmt, io, path::PathBuf};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Libsql(libsql::Error),
    DatabaseNotFound(PathBuf),
    Config(String),
    Io(io::Error),
}

// To allow conversion (for await? on libsql calls)
impl From<libsql::Error> for Error {
    fn from(error: libsql::Error) -> Self {
        Error::Libsql(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);
        // Callers only ever see a generic server error.
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = status.canonical_reason().unwrap_or("Internal Server Error");
        (status, body).into_response()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Libsql(e) => {
                write!(f, "Libsql : {}", e)
            }
            Error::DatabaseNotFound(path) => {
                write!(f, "Database file not found : {}", path.display())
            }
            Error::Config(msg) => {
                write!(f, "Configuration : {}", msg)
            }
            Error::Io(e) => {
                write!(f, "IO : {}", e)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_is_a_plain_500() {
        let response = Error::DatabaseNotFound(PathBuf::from("missing.db")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = Error::Config("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn display_names_the_source() {
        let e = Error::DatabaseNotFound(PathBuf::from("/nowhere/users.db"));
        assert_eq!(e.to_string(), "Database file not found : /nowhere/users.db");
    }
}
