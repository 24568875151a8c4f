use std::fmt::{Display, Formatter};
use std::num::NonZeroU32;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::SwitchConfig;
use crate::errors::Error;
use crate::hardware::Gpio;
use crate::io::{GpioBackend, PinMode};

/// PWM frequency (in Hz) applied when the configuration does not set one.
pub const DEFAULT_FREQUENCY: u32 = 100;

/// Represents a PWM-driven LED attached to a given chip: the driver handle behind one switch
/// entity.
///
/// The handle claims its pin in PWM mode at construction time and exposes plain [`Self::on()`] /
/// [`Self::off()`] actuation, full duty and zero duty respectively. Brightness control is out of
/// scope: switch entities only ever drive the output fully on or fully off.
#[derive(Clone, Debug)]
pub struct PwmLed {
    // ########################################
    // # Basics
    /// The pin (id) of the chip used to control the output value.
    pin: u8,
    /// The PWM frequency (in Hz) used on the pin.
    frequency: u32,
    /// The current duty cycle (0.0 - 1.0).
    duty_cycle: Arc<RwLock<f64>>,

    // ########################################
    // # Volatile utility data.
    /// The backend used to reach the pin.
    backend: Box<dyn GpioBackend>,
}

impl PwmLed {
    /// Creates an instance of a [`PwmLed`] attached to a given chip, from one configuration entry.
    ///
    /// The pin is claimed in PWM mode and the configured frequency (or [`DEFAULT_FREQUENCY`]) is
    /// applied. No actuation happens here: the output stays at zero duty until [`Self::on()`].
    ///
    /// # Errors
    /// * `UnknownPin`: this function will bail an error if the pin does not exist on this chip.
    /// * `IncompatibleMode`: this function will bail an error if the pin does not support PWM mode.
    pub fn new(gpio: &Gpio, config: &SwitchConfig) -> Result<Self, Error> {
        let mut led = Self {
            pin: config.pin,
            frequency: config
                .frequency
                .map(NonZeroU32::get)
                .unwrap_or(DEFAULT_FREQUENCY),
            duty_cycle: Arc::new(RwLock::new(0.0)),
            backend: gpio.get_backend(),
        };

        // Claim the pin in PWM mode.
        led.backend.set_pin_mode(led.pin, PinMode::Pwm)?;
        led.backend.set_pwm_frequency(led.pin, led.frequency)?;

        Ok(led)
    }

    /// Turns the LED fully on.
    pub fn on(&mut self) -> Result<&Self, Error> {
        self.write(1.0)?;
        Ok(self)
    }

    /// Turns the LED off.
    pub fn off(&mut self) -> Result<&Self, Error> {
        self.write(0.0)?;
        Ok(self)
    }

    fn write(&mut self, duty_cycle: f64) -> Result<(), Error> {
        self.backend.pwm_write(self.pin, duty_cycle)?;
        *self.duty_cycle.write() = duty_cycle;
        Ok(())
    }

    // ########################################
    // Setters and Getters.

    /// Returns the pin (id) used by the driver.
    pub fn get_pin(&self) -> u8 {
        self.pin
    }

    /// Returns the PWM frequency (in Hz) used on the pin.
    pub fn get_frequency(&self) -> u32 {
        self.frequency
    }

    /// Returns the current duty cycle (0.0 - 1.0).
    pub fn get_duty_cycle(&self) -> f64 {
        *self.duty_cycle.read()
    }
}

impl Display for PwmLed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PwmLed (pin={}) [duty={}, frequency={}Hz]",
            self.pin,
            self.duty_cycle.read(),
            self.frequency,
        )
    }
}
