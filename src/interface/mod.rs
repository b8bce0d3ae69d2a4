//! Bus interface abstraction for the gyroscope driver.
//!
//! A gyroscope either owns its bus or borrows one through `&mut`; the borrow
//! checker guarantees a borrowed bus outlives the gyroscope using it.

pub mod i2c;
pub mod spi;

pub use self::i2c::I2cInterface;
pub use self::spi::SpiInterface;

use crate::error::BusError;

/// Capability of reading a value from a register address.
///
/// Addresses are not validated at this layer; refused or out-of-range
/// addresses surface as a [`BusError`] from the transport.
pub trait CommunicationBus {
    /// Reads the value stored at `register`.
    fn read(&mut self, register: u8) -> core::result::Result<i32, BusError>;
}

impl<T> CommunicationBus for &mut T
where
    T: CommunicationBus + ?Sized,
{
    fn read(&mut self, register: u8) -> core::result::Result<i32, BusError> {
        (**self).read(register)
    }
}
