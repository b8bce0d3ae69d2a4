//! Strongly typed parameters for the gyroscope driver.
//!
//! # Examples
//!
//! ```rust
//! use brittle_gyroscope::params::Backend;
//!
//! assert_eq!(Backend::default(), Backend::I2c);
//! assert_eq!(Backend::Spi.register(), 0xAA);
//! ```

use crate::registers::{REG_I2C_ORIENTATION, REG_SPI_ANGULAR_DISPLACEMENT};

/// Multiplier applied to the calibration temperature by the SPI backend.
pub const SPI_TEMPERATURE_SCALE: i32 = 10;
/// Divisor applied to the calibration temperature by the I2C backend.
pub const I2C_TEMPERATURE_DIVISOR: i32 = 2;

/// Calibration and register layout backing a [`Gyroscope`](crate::gyroscope::Gyroscope).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Backend {
    /// Reads `0xFF` and adds half the temperature.
    #[default]
    I2c,
    /// Reads `0xAA` and adds ten times the temperature.
    Spi,
}

impl Backend {
    /// Register read once per orientation request.
    pub const fn register(self) -> u8 {
        match self {
            Self::I2c => REG_I2C_ORIENTATION,
            Self::Spi => REG_SPI_ANGULAR_DISPLACEMENT,
        }
    }

    /// Temperature offset added to the raw register value.
    ///
    /// The I2C division truncates toward zero.
    pub const fn temperature_offset(self, temperature: i32) -> i64 {
        match self {
            Self::I2c => (temperature / I2C_TEMPERATURE_DIVISOR) as i64,
            Self::Spi => temperature as i64 * SPI_TEMPERATURE_SCALE as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Backend;

    #[test]
    fn i2c_offset_truncates_toward_zero() {
        assert_eq!(Backend::I2c.temperature_offset(5), 2);
        assert_eq!(Backend::I2c.temperature_offset(-5), -2);
        assert_eq!(Backend::I2c.temperature_offset(4), 2);
    }

    #[test]
    fn spi_offset_does_not_overflow() {
        assert_eq!(Backend::Spi.temperature_offset(1), 10);
        assert_eq!(
            Backend::Spi.temperature_offset(i32::MAX),
            i64::from(i32::MAX) * 10
        );
    }
}
