//! Orientation computation for gyroscopes wired over I2C.

use crate::error::Result;
use crate::interface::i2c::I2cInterface;
use crate::interface::CommunicationBus;
use crate::orientation::adjust;
use crate::params::Backend;
use crate::registers::REG_I2C_ORIENTATION;
use embedded_hal::i2c::I2c;

/// I2C-calibrated gyroscope reading `0xFF` once per request.
pub struct I2cGyroscope<BUS> {
    bus: BUS,
    temperature: i32,
}

impl<BUS> I2cGyroscope<BUS> {
    /// Creates a gyroscope reading through `bus`, calibrated at `temperature`.
    pub const fn new(bus: BUS, temperature: i32) -> Self {
        Self { bus, temperature }
    }

    /// Calibration temperature fixed at construction.
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Provides mutable access to the underlying bus.
    pub fn bus_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    /// Consumes the gyroscope and returns the owned bus.
    pub fn release(self) -> BUS {
        self.bus
    }
}

impl<I2C> I2cGyroscope<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Convenience constructor for `embedded-hal` I2C buses.
    pub fn new_i2c(i2c: I2C, address: u8, temperature: i32) -> Self {
        Self::new(I2cInterface::new(i2c, address), temperature)
    }
}

impl<BUS> I2cGyroscope<BUS>
where
    BUS: CommunicationBus,
{
    /// Reads the orientation register and returns degrees in `[0, 360)`.
    ///
    /// The raw value is offset by half the calibration temperature, truncated
    /// toward zero.
    pub fn orientation(&mut self) -> Result<u16> {
        let raw = self
            .bus
            .read(REG_I2C_ORIENTATION)
            .inspect_err(|err| warn!("i2c gyroscope read failed: {}", err))?;

        let degrees = adjust(raw, Backend::I2c.temperature_offset(self.temperature));
        trace!("i2c gyroscope raw={} degrees={}", raw, degrees);
        Ok(degrees)
    }
}
