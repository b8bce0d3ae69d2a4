//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::CommunicationBus;
use crate::error::BusError;
use crate::registers::{decode_word, REGISTER_WORD_BYTES};

/// 7-bit address the gyroscope answers on when its address pin is low.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x68;

/// I2C-based bus for the gyroscope driver.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to the device at `address`.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit device address.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped I2C bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned I2C bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> CommunicationBus for I2cInterface<I2C>
where
    I2C: I2c,
{
    fn read(&mut self, register: u8) -> core::result::Result<i32, BusError> {
        let mut word = [0u8; REGISTER_WORD_BYTES];
        self.i2c
            .write_read(self.address, &[register], &mut word)
            .map_err(BusError::from_i2c)?;

        Ok(decode_word(word))
    }
}

#[cfg(test)]
mod tests {
    use super::{I2cInterface, DEFAULT_I2C_ADDRESS};
    use crate::error::BusError;
    use crate::interface::CommunicationBus;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    #[test]
    fn read_addresses_device_and_decodes_word() {
        let expectations = [I2cTransaction::write_read(
            DEFAULT_I2C_ADDRESS,
            vec![0xFF],
            vec![0x01, 0x66],
        )];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), DEFAULT_I2C_ADDRESS);

        assert_eq!(interface.read(0xFF), Ok(358));

        i2c.done();
    }

    #[test]
    fn read_uses_configured_address() {
        let expectations = [I2cTransaction::write_read(0x69, vec![0x20], vec![0x00, 0x01])];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), 0x69);

        assert_eq!(interface.address(), 0x69);
        assert_eq!(interface.read(0x20), Ok(1));

        i2c.done();
    }

    #[test]
    fn read_maps_transport_error() {
        let expectations = [I2cTransaction::write_read(
            DEFAULT_I2C_ADDRESS,
            vec![0xFF],
            vec![0x00, 0x00],
        )
        .with_error(ErrorKind::Bus)];
        let mut i2c = I2cMock::new(&expectations);
        let mut interface = I2cInterface::new(i2c.clone(), DEFAULT_I2C_ADDRESS);

        assert_eq!(interface.read(0xFF), Err(BusError::I2c(ErrorKind::Bus)));

        i2c.done();
    }
}
