//! Result codes returned across the C boundary.

use bluefox_notation::{Error, ErrorKind};
use tracing::debug;

/// Outcome of a boundary call.
///
/// Every accessor reports failure through one of these codes; none of them is fatal.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BluefoxStatus {
    /// The call succeeded and its out-parameters were written.
    Ok = 0,
    /// The value's kind differs from the one requested.
    TypeMismatch = 1,
    /// Array index negative or not below the length.
    OutOfRange = 2,
    /// No entry under the requested key.
    NotFound = 3,
    /// A required handle or out-parameter was null.
    NullArgument = 4,
    /// Text input was not valid UTF-8.
    InvalidText = 5,
    /// A path expression had no usable segments.
    InvalidPath = 6,
    /// The value handed over already owns the container it was meant to join.
    InvalidOwnership = 7,
}

impl From<&Error> for BluefoxStatus {
    fn from(err: &Error) -> Self {
        match err.kind {
            ErrorKind::TypeMismatch { .. } => Self::TypeMismatch,
            ErrorKind::IndexOutOfBounds { .. } => Self::OutOfRange,
            ErrorKind::KeyNotFound(_) | ErrorKind::MissingField(_) => Self::NotFound,
            ErrorKind::InvalidPath(_) => Self::InvalidPath,
        }
    }
}

impl From<Error> for BluefoxStatus {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

/// A failed boundary call: the code handed back to C and, when the value model
/// reported the failure, the error behind it.
#[derive(Debug)]
pub(crate) struct Rejection {
    status: BluefoxStatus,
    cause: Option<Error>,
}

impl From<BluefoxStatus> for Rejection {
    fn from(status: BluefoxStatus) -> Self {
        Self {
            status,
            cause: None,
        }
    }
}

impl From<Error> for Rejection {
    fn from(err: Error) -> Self {
        Self {
            status: BluefoxStatus::from(&err),
            cause: Some(err),
        }
    }
}

/// Runs a boundary call body and collapses its outcome into the code handed back to C.
///
/// Rejections are logged once here, with the underlying error and the path it was
/// resolved at when there is one.
pub(crate) fn finish(
    symbol: &'static str,
    body: impl FnOnce() -> Result<(), Rejection>,
) -> BluefoxStatus {
    match body() {
        Ok(()) => BluefoxStatus::Ok,
        Err(Rejection { status, cause }) => {
            match cause {
                Some(err) => debug!(
                    symbol,
                    ?status,
                    error = %err,
                    context = err.context.as_ref().map(tracing::field::display),
                    "rejected boundary call"
                ),
                None => debug!(symbol, ?status, "rejected boundary call"),
            }
            status
        }
    }
}
