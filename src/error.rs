//! Error handling primitives for the gyroscope driver.

use embedded_hal::{i2c, spi};

/// Crate-wide result type alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Failure reported by a [`CommunicationBus`](crate::interface::CommunicationBus) read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The I2C transport refused or aborted the transfer.
    I2c(i2c::ErrorKind),
    /// The SPI transport refused or aborted the transaction.
    Spi(spi::ErrorKind),
    /// A transport outside of `embedded-hal` failed.
    Other,
}

impl BusError {
    /// Maps any `embedded-hal` I2C error into a [`BusError`].
    pub fn from_i2c<E: i2c::Error>(err: E) -> Self {
        Self::I2c(err.kind())
    }

    /// Maps any `embedded-hal` SPI error into a [`BusError`].
    pub fn from_spi<E: spi::Error>(err: E) -> Self {
        Self::Spi(err.kind())
    }
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(kind) => write!(f, "i2c bus error: {kind}"),
            Self::Spi(kind) => write!(f, "spi bus error: {kind}"),
            Self::Other => f.write_str("bus error"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::I2c(kind) => defmt::write!(f, "I2c({})", defmt::Debug2Format(kind)),
            Self::Spi(kind) => defmt::write!(f, "Spi({})", defmt::Debug2Format(kind)),
            Self::Other => defmt::write!(f, "Other"),
        }
    }
}

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Any error reported by the underlying bus interface.
    Interface(BusError),
}

impl From<BusError> for Error {
    fn from(err: BusError) -> Self {
        Self::Interface(err)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(err) => err.fmt(f),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::{BusError, Error};
    use embedded_hal::{i2c, spi};

    #[test]
    fn bus_errors_keep_their_kind() {
        let err = BusError::from_i2c(i2c::ErrorKind::ArbitrationLoss);
        assert_eq!(err, BusError::I2c(i2c::ErrorKind::ArbitrationLoss));

        let err = BusError::from_spi(spi::ErrorKind::ModeFault);
        assert_eq!(err, BusError::Spi(spi::ErrorKind::ModeFault));
    }

    #[test]
    fn interface_error_wraps_bus_error_unchanged() {
        let err: Error = BusError::Other.into();
        assert_eq!(err, Error::Interface(BusError::Other));
    }
}
