//! Defines the hardware access seam used to drive PWM LED outputs.
//!
//! The crate never talks to a GPIO chip directly: every driver handle owns a clone of a
//! [`GpioBackend`] trait object and goes through it for pin claiming and duty-cycle writes. Hosts
//! provide the backend; the `rpi` feature ships a Raspberry Pi one.

use std::any::type_name;
use std::fmt::{Debug, Display, Formatter};

use dyn_clone::DynClone;

use crate::errors::Error;

#[cfg(feature = "rpi")]
mod rpi;
#[cfg(feature = "rpi")]
pub use rpi::RppalBackend;

// Makes a Box<dyn GpioBackend> clone (used for driver handle cloning).
dyn_clone::clone_trait_object!(GpioBackend);

/// Lists the modes a pin can be claimed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PinMode {
    /// Plain digital output (on/off).
    Output,
    /// Pulse-width modulated output (duty-cycle controlled).
    Pwm,
}

impl Display for PinMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PinMode::Output => write!(f, "OUTPUT"),
            PinMode::Pwm => write!(f, "PWM"),
        }
    }
}

/// Defines the trait all GPIO backends must implement.
pub trait GpioBackend: DynClone + Send + Sync + Debug + Display {
    /// Returns the backend name (used for Display only).
    fn get_backend_name(&self) -> &'static str {
        type_name::<Self>().split("::").last().unwrap()
    }

    /// Claims the `pin` in the given `mode`.
    ///
    /// # Errors
    /// * `UnknownPin`: the pin does not exist on this chip.
    /// * `IncompatibleMode`: the pin cannot be claimed in the requested mode.
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Error>;

    /// Sets the PWM `frequency` (in Hz) used on the given `pin`.
    fn set_pwm_frequency(&mut self, pin: u8, frequency: u32) -> Result<(), Error>;

    /// Writes the `duty_cycle` (0.0 - 1.0) on the given `pin`.
    fn pwm_write(&mut self, pin: u8, duty_cycle: f64) -> Result<(), Error>;
}
