//! Configuration primitives for the gyroscope driver.

use crate::params::Backend;

/// Construction-time settings of a [`Gyroscope`](crate::gyroscope::Gyroscope).
///
/// Both fields are fixed once a gyroscope has been built from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Calibration temperature used to adjust raw readings.
    pub temperature: i32,
    /// Backend computation selected for the gyroscope.
    pub backend: Backend,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the calibration temperature.
    pub fn temperature(mut self, temperature: i32) -> Self {
        self.config.temperature = temperature;
        self
    }

    /// Overrides the backend computation.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.config.backend = backend;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::params::Backend;

    #[test]
    fn default_selects_i2c_at_zero_degrees() {
        let config = Config::default();
        assert_eq!(config.temperature, 0);
        assert_eq!(config.backend, Backend::I2c);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = Config::new().temperature(-7).backend(Backend::Spi).build();
        assert_eq!(
            config,
            Config {
                temperature: -7,
                backend: Backend::Spi,
            }
        );
    }
}
