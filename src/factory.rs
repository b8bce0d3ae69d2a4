//! Factory producing gyroscopes behind the [`BrittleGyroscope`] interface.

use crate::config::Config;
use crate::gyroscope::{BrittleGyroscope, Gyroscope};
use crate::interface::i2c::I2cInterface;
use crate::interface::CommunicationBus;
use embedded_hal::i2c::I2c;

/// Builds gyroscopes from a fixed [`Config`].
///
/// The default factory selects the I2C backend at zero calibration
/// temperature. Construction never fails; errors only appear on reads.
#[derive(Debug, Clone, Copy, Default)]
pub struct GyroscopeFactory {
    config: Config,
}

impl GyroscopeFactory {
    /// Creates a factory using [`Config::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory producing gyroscopes with `config`.
    pub const fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Configuration applied to every gyroscope this factory creates.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates a gyroscope reading through `bus`.
    pub fn create<BUS>(&self, bus: BUS) -> impl BrittleGyroscope + use<BUS>
    where
        BUS: CommunicationBus,
    {
        Gyroscope::new(bus, self.config)
    }

    /// Creates a gyroscope on an `embedded-hal` I2C bus at `address`.
    pub fn create_i2c<I2C>(&self, i2c: I2C, address: u8) -> impl BrittleGyroscope + use<I2C>
    where
        I2C: I2c,
    {
        self.create(I2cInterface::new(i2c, address))
    }
}
