use std::fmt;

use crate::core::catalog::CatalogError;
use crate::core::selector::SelectError;

/// Top-level error for the binary. Each variant wraps the layer it came from
/// so `?` works across loading, selection and terminal I/O.
#[derive(Debug)]
pub enum WotdError {
    Catalog(CatalogError),
    Select(SelectError),
    Io(std::io::Error),
}

impl fmt::Display for WotdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WotdError::Catalog(e) => write!(f, "{e}"),
            WotdError::Select(e) => write!(f, "{e}"),
            WotdError::Io(e) => write!(f, "terminal I/O error: {e}"),
        }
    }
}

impl std::error::Error for WotdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WotdError::Catalog(e) => Some(e),
            WotdError::Select(e) => Some(e),
            WotdError::Io(e) => Some(e),
        }
    }
}

impl From<CatalogError> for WotdError {
    fn from(e: CatalogError) -> Self {
        WotdError::Catalog(e)
    }
}

impl From<SelectError> for WotdError {
    fn from(e: SelectError) -> Self {
        WotdError::Select(e)
    }
}

impl From<std::io::Error> for WotdError {
    fn from(e: std::io::Error) -> Self {
        WotdError::Io(e)
    }
}
