//! Angular displacement computation for gyroscopes wired over SPI.

use crate::error::Result;
use crate::interface::spi::SpiInterface;
use crate::interface::CommunicationBus;
use crate::orientation::adjust;
use crate::params::Backend;
use crate::registers::REG_SPI_ANGULAR_DISPLACEMENT;
use embedded_hal::spi::SpiDevice;

/// SPI-calibrated gyroscope reading `0xAA` once per request.
///
/// The gyroscope owns `BUS`. Pass `&mut bus` to keep ownership with the
/// caller; the bus then has to outlive the gyroscope.
pub struct SpiGyroscope<BUS> {
    bus: BUS,
    temperature: i32,
}

impl<BUS> SpiGyroscope<BUS> {
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

impl<SPI> SpiGyroscope<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Convenience constructor for `embedded-hal` SPI devices.
    pub fn new_spi(spi: SPI, temperature: i32) -> Self {
        Self::new(SpiInterface::new(spi), temperature)
    }
}

impl<BUS> SpiGyroscope<BUS>
where
    BUS: CommunicationBus,
{
    /// Reads the displacement register and returns degrees in `[0, 360)`.
    ///
    /// The raw value is offset by ten times the calibration temperature.
    /// Bus failures are returned unchanged as [`Error::Interface`](crate::Error::Interface).
    pub fn angular_displacement(&mut self) -> Result<u16> {
        let raw = self
            .bus
            .read(REG_SPI_ANGULAR_DISPLACEMENT)
            .inspect_err(|err| warn!("spi gyroscope read failed: {}", err))?;

        let degrees = adjust(raw, Backend::Spi.temperature_offset(self.temperature));
        trace!("spi gyroscope raw={} degrees={}", raw, degrees);
        Ok(degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::SpiGyroscope;
    use crate::error::{BusError, Error};
    use crate::interface::mock::ScriptedBus;
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    const DUMMY_TEMPERATURE: i32 = 1;

    #[test]
    fn angular_displacement_reads_from_correct_address_once() {
        let mut bus = ScriptedBus::returning(0);
        let mut gyroscope = SpiGyroscope::new(&mut bus, DUMMY_TEMPERATURE);

        gyroscope.angular_displacement().unwrap();

        assert_eq!(bus.reads, [0xAA]);
    }

    #[test]
    fn angular_displacement_adds_scaled_temperature() {
        let mut gyroscope = SpiGyroscope::new(ScriptedBus::returning(10), DUMMY_TEMPERATURE);

        assert_eq!(gyroscope.angular_displacement(), Ok(20));
    }

    #[test]
    fn angular_displacement_wraps_past_full_turn() {
        let mut gyroscope = SpiGyroscope::new(ScriptedBus::returning(350), 10);

        assert_eq!(gyroscope.angular_displacement(), Ok(90));
    }

    #[test]
    fn angular_displacement_normalizes_negative_readings() {
        // -50 + (-1 * 10) = -60
        let mut gyroscope = SpiGyroscope::new(ScriptedBus::returning(-50), -1);

        assert_eq!(gyroscope.angular_displacement(), Ok(300));
    }

    #[test]
    fn angular_displacement_handles_extreme_values() {
        let mut gyroscope = SpiGyroscope::new(ScriptedBus::returning(i32::MAX), i32::MAX);
        let expected = ((i64::from(i32::MAX) * 11) % 360) as u16;

        assert_eq!(gyroscope.angular_displacement(), Ok(expected));
    }

    #[test]
    fn angular_displacement_propagates_bus_error() {
        let mut gyroscope = SpiGyroscope::new(ScriptedBus::failing(BusError::Other), 3);

        assert_eq!(
            gyroscope.angular_displacement(),
            Err(Error::Interface(BusError::Other))
        );
        assert_eq!(gyroscope.release().reads, [0xAA]);
    }

    #[test]
    fn reads_over_embedded_hal_spi_device() {
        let expectations = [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0xAA]),
            SpiTransaction::read_vec(vec![0x00, 0x0A]),
            SpiTransaction::transaction_end(),
        ];
        let mut spi = SpiMock::new(&expectations);
        let mut gyroscope = SpiGyroscope::new_spi(spi.clone(), DUMMY_TEMPERATURE);

        assert_eq!(gyroscope.temperature(), DUMMY_TEMPERATURE);
        assert_eq!(gyroscope.angular_displacement(), Ok(20));

        spi.done();
    }
}
