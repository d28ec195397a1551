//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{error, warn};

/// Map errors into HTTP status errors, logging the cause.
pub(crate) trait ResultExt<T> {
    /// Server fault: log as an error, answer `500`.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Client fault: log as a warning, answer `400` with `brief`.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }
}
