//! Opaque gyroscope facade hiding which backend computes the orientation.

use crate::config::Config;
use crate::error::Result;
use crate::i2c_gyroscope::I2cGyroscope;
use crate::interface::i2c::I2cInterface;
use crate::interface::spi::SpiInterface;
use crate::interface::CommunicationBus;
use crate::params::Backend;
use crate::spi_gyroscope::SpiGyroscope;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

/// Narrow view of a gyroscope: it can only report its orientation.
pub trait BrittleGyroscope {
    /// Returns the current orientation in degrees, in `[0, 360)`.
    fn orientation(&mut self) -> Result<u16>;
}

impl<T> BrittleGyroscope for &mut T
where
    T: BrittleGyroscope + ?Sized,
{
    fn orientation(&mut self) -> Result<u16> {
        (**self).orientation()
    }
}

impl<BUS: CommunicationBus> BrittleGyroscope for I2cGyroscope<BUS> {
    fn orientation(&mut self) -> Result<u16> {
        I2cGyroscope::orientation(self)
    }
}

impl<BUS: CommunicationBus> BrittleGyroscope for SpiGyroscope<BUS> {
    fn orientation(&mut self) -> Result<u16> {
        self.angular_displacement()
    }
}

enum GyroscopeImpl<BUS> {
    I2c(I2cGyroscope<BUS>),
    Spi(SpiGyroscope<BUS>),
}

/// A gyroscope whose backend is chosen at construction and hidden afterwards.
///
/// `Gyroscope<BUS>` is the same type for every [`Backend`]; only the register
/// read and the calibration differ. The backend never changes once built.
pub struct Gyroscope<BUS> {
    imp: GyroscopeImpl<BUS>,
}

impl<BUS> Gyroscope<BUS> {
    /// Creates a gyroscope reading through `bus` with the given configuration.
    pub fn new(bus: BUS, config: Config) -> Self {
        let imp = match config.backend {
            Backend::I2c => GyroscopeImpl::I2c(I2cGyroscope::new(bus, config.temperature)),
            Backend::Spi => GyroscopeImpl::Spi(SpiGyroscope::new(bus, config.temperature)),
        };
        debug!("gyroscope created: {}", config);
        Self { imp }
    }

    /// Backend selected at construction.
    pub fn backend(&self) -> Backend {
        match self.imp {
            GyroscopeImpl::I2c(_) => Backend::I2c,
            GyroscopeImpl::Spi(_) => Backend::Spi,
        }
    }

    /// Calibration temperature fixed at construction.
    pub fn temperature(&self) -> i32 {
        match &self.imp {
            GyroscopeImpl::I2c(gyroscope) => gyroscope.temperature(),
            GyroscopeImpl::Spi(gyroscope) => gyroscope.temperature(),
        }
    }

    /// Consumes the gyroscope and returns the owned bus.
    pub fn release(self) -> BUS {
        match self.imp {
            GyroscopeImpl::I2c(gyroscope) => gyroscope.release(),
            GyroscopeImpl::Spi(gyroscope) => gyroscope.release(),
        }
    }
}

impl<I2C> Gyroscope<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Convenience constructor for the I2C backend over an `embedded-hal` bus.
    pub fn new_i2c(i2c: I2C, address: u8, temperature: i32) -> Self {
        let config = Config::new().temperature(temperature).backend(Backend::I2c).build();
        Self::new(I2cInterface::new(i2c, address), config)
    }
}

impl<SPI> Gyroscope<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Convenience constructor for the SPI backend over an `embedded-hal` device.
    pub fn new_spi(spi: SPI, temperature: i32) -> Self {
        let config = Config::new().temperature(temperature).backend(Backend::Spi).build();
        Self::new(SpiInterface::new(spi), config)
    }
}

impl<BUS> Gyroscope<BUS>
where
    BUS: CommunicationBus,
{
    /// Reads the backend's register once and returns degrees in `[0, 360)`.
    pub fn orientation(&mut self) -> Result<u16> {
        match &mut self.imp {
            GyroscopeImpl::I2c(gyroscope) => gyroscope.orientation(),
            GyroscopeImpl::Spi(gyroscope) => gyroscope.angular_displacement(),
        }
    }
}

impl<BUS: CommunicationBus> BrittleGyroscope for Gyroscope<BUS> {
    fn orientation(&mut self) -> Result<u16> {
        Gyroscope::orientation(self)
    }
}
