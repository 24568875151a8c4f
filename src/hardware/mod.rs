//! Defines the handles wrapping physical hardware: the GPIO chip and the PWM LED drivers.

use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use crate::io::GpioBackend;

mod led;

pub use led::{PwmLed, DEFAULT_FREQUENCY};

/// Represents the GPIO chip your [`crate::devices::Device`]s output pins belong to.
/// The chip gives access to the pins through a pluggable [`GpioBackend`].
#[derive(Clone, Debug)]
pub struct Gpio {
    /// The inner backend used by this chip.
    backend: Box<dyn GpioBackend>,
}

impl Gpio {
    /// Creates a chip handle using the given backend.
    ///
    /// # Example
    /// ```ignore
    /// use gpio_pwm_switch::hardware::Gpio;
    /// use gpio_pwm_switch::io::RppalBackend;
    ///
    /// let gpio = Gpio::new(RppalBackend::new()?);
    /// ```
    pub fn new<B: GpioBackend + 'static>(backend: B) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Returns the backend used.
    ///
    /// NOTE: this is private to the crate since the chip already gives access to backend methods
    /// via Deref. This method is only used internally in driver constructors to clone the backend
    /// into the driver.
    pub(crate) fn get_backend(&self) -> Box<dyn GpioBackend> {
        self.backend.clone()
    }
}

impl Display for Gpio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gpio ({})", self.backend)
    }
}

impl Deref for Gpio {
    type Target = Box<dyn GpioBackend>;

    fn deref(&self) -> &Self::Target {
        &self.backend
    }
}

impl DerefMut for Gpio {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.backend
    }
}
