//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.

use embedded_hal::spi::{Operation, SpiDevice};

use super::CommunicationBus;
use crate::error::BusError;
use crate::registers::{decode_word, REGISTER_WORD_BYTES};

/// SPI-based bus for the gyroscope driver.
///
/// Each read is one chip-select framed transaction: the register address as
/// command byte, then the register word.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> CommunicationBus for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    fn read(&mut self, register: u8) -> core::result::Result<i32, BusError> {
        let command = [register];
        let mut word = [0u8; REGISTER_WORD_BYTES];
        let mut operations = [Operation::Write(&command), Operation::Read(&mut word)];
        self.spi
            .transaction(&mut operations)
            .map_err(BusError::from_spi)?;

        Ok(decode_word(word))
    }
}
