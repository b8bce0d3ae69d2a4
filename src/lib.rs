#![cfg_attr(not(test), no_std)]
//! Gyroscope orientation driver with swappable I2C and SPI backends.
//!
//! ```rust
//! use brittle_gyroscope::{BrittleGyroscope, CommunicationBus, GyroscopeFactory};
//! use brittle_gyroscope::error::BusError;
//!
//! struct FixedBus(i32);
//!
//! impl CommunicationBus for FixedBus {
//!     fn read(&mut self, _register: u8) -> Result<i32, BusError> {
//!         Ok(self.0)
//!     }
//! }
//!
//! let factory = GyroscopeFactory::new();
//! let mut gyroscope = factory.create(FixedBus(90));
//! assert_eq!(gyroscope.orientation().unwrap(), 90);
//! ```

#[macro_use]
mod log;

pub mod config;
pub mod error;
pub mod factory;
pub mod gyroscope;
pub mod i2c_gyroscope;
pub mod interface;
pub mod orientation;
pub mod params;
pub mod registers;
pub mod spi_gyroscope;

pub use crate::config::Config;
pub use crate::error::{BusError, Error, Result};
pub use crate::factory::GyroscopeFactory;
pub use crate::gyroscope::{BrittleGyroscope, Gyroscope};
pub use crate::interface::CommunicationBus;
pub use crate::params::Backend;
pub use crate::spi_gyroscope::SpiGyroscope;
