//! Common error types.
//!
//! A visitor that does not cover every item kind is rejected by the compiler, so there is
//! no runtime error for a visitor/item mismatch.

use std::error::Error;
use std::fmt::{self, Display};

/// An error that may be generated when querying or mutating a native menu.
#[derive(Debug)]
#[non_exhaustive]
pub enum MenuError {
    /// The index does not refer to an item of the live menu.
    ///
    /// The menu may have shrunk since the index was obtained.
    OutOfRange {
        /// The requested zero-based index.
        index: usize,
        /// The live item count at the time of the call.
        len: usize,
    },
    /// The native menu behind the handle no longer exists.
    InvalidHandle,
    /// The OS cannot perform the operation.
    Os(OsError),
}

impl MenuError {
    /// Whether the error means the index was past the end of the menu.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Whether the error means the native menu is gone.
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Self::InvalidHandle)
    }
}

impl From<OsError> for MenuError {
    fn from(value: OsError) -> Self {
        Self::Os(value)
    }
}

impl Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "menu item index {index} out of range for menu of {len} items")
            },
            Self::InvalidHandle => write!(f, "the native menu no longer exists"),
            Self::Os(err) => err.fmt(f),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Os(err) => err.source(),
            _ => None,
        }
    }
}

/// The error type for when the OS cannot perform the requested operation.
#[derive(Debug)]
pub struct OsError {
    line: u32,
    file: &'static str,
    error: Box<dyn Error + Send + Sync + 'static>,
}

impl OsError {
    pub fn new(
        line: u32,
        file: &'static str,
        error: impl Into<Box<dyn Error + Send + Sync + 'static>>,
    ) -> Self {
        Self { line, file, error: error.into() }
    }
}

impl Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        f.pad(&format!("os error at {}:{}: {}", self.file, self.line, self.error))
    }
}

impl Error for OsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// Build an [`OsError`] tagged with the current source location.
#[macro_export]
macro_rules! os_error {
    ($error:expr) => {{
        $crate::error::OsError::new(line!(), file!(), $error)
    }};
}
