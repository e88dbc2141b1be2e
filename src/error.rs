//! Error types for the `embedded-hal` bus adapters.
//!
//! The sensor client itself reports failure as `None`. These errors are only
//! visible through the adapters' `try_read`/`try_write`, for callers that want
//! to know which transfer failed and why.

use core::fmt::{Debug, Formatter};
use embedded_hal::i2c::ErrorType;

/// Error for a single TC74 register transaction.
///
/// Generic over the I2C type so it serves both the blocking and async adapters.
pub enum Error<I>
where
    I: ErrorType,
{
    /// Error occurred during an I2C write operation
    WriteError(I::Error),
    /// Error occurred during an I2C write-read operation
    WriteReadError(I::Error),
}

impl<I> Error<I>
where
    I: ErrorType,
{
    /// Classify the underlying bus error.
    pub fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        use embedded_hal::i2c::Error as _;
        match self {
            Self::WriteError(e) | Self::WriteReadError(e) => e.kind(),
        }
    }
}

impl<I> Debug for Error<I>
where
    I: ErrorType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
        }
    }
}

#[cfg(feature = "defmt-03")]
impl<I> defmt::Format for Error<I>
where
    I: ErrorType,
{
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::WriteReadError(_) => defmt::write!(f, "WriteReadError({})", self.kind()),
            Self::WriteError(_) => defmt::write!(f, "WriteError({})", self.kind()),
        }
    }
}
