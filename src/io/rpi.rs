//! Raspberry Pi backend over the `rppal` crate, using software PWM.

use std::collections::HashMap;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use parking_lot::Mutex;
use rppal::gpio;
use rppal::gpio::OutputPin;

use crate::errors::Error;
use crate::errors::HardwareError::{IoException, UnknownPin};
use crate::hardware::DEFAULT_FREQUENCY;
use crate::io::{GpioBackend, PinMode};

/// GPIO backend for Raspberry Pi hosts.
///
/// Pins are claimed lazily on [`GpioBackend::set_pin_mode`] and driven through `rppal`'s
/// software PWM, so any BCM pin can be used (no hardware PWM channel required). Clones share
/// the claimed pins, mirroring how driver handles clone their backend.
#[derive(Clone)]
pub struct RppalBackend {
    data: Arc<Mutex<RppalData>>,
}

struct RppalData {
    chip: gpio::Gpio,
    pins: HashMap<u8, ClaimedPin>,
}

struct ClaimedPin {
    output: OutputPin,
    frequency: f64,
    duty_cycle: f64,
}

impl RppalBackend {
    /// Opens the GPIO chip.
    ///
    /// # Errors
    /// * `IoException`: the GPIO character device is unavailable or access is denied.
    pub fn new() -> Result<Self, Error> {
        let chip = gpio::Gpio::new().map_err(|err| IoException {
            info: err.to_string(),
        })?;
        Ok(Self {
            data: Arc::new(Mutex::new(RppalData {
                chip,
                pins: HashMap::new(),
            })),
        })
    }
}

impl Display for RppalBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [pins={}]",
            self.get_backend_name(),
            self.data.lock().pins.len()
        )
    }
}

impl Debug for RppalBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut pins: Vec<u8> = self.data.lock().pins.keys().copied().collect();
        pins.sort_unstable();
        f.debug_struct("RppalBackend").field("pins", &pins).finish()
    }
}

impl GpioBackend for RppalBackend {
    fn set_pin_mode(&mut self, pin: u8, _mode: PinMode) -> Result<(), Error> {
        let mut lock = self.data.lock();
        if lock.pins.contains_key(&pin) {
            return Ok(());
        }
        let output = lock
            .chip
            .get(pin)
            .map_err(|err| match err {
                gpio::Error::PinNotAvailable(_) => Error::from(UnknownPin { pin }),
                _ => Error::from(IoException {
                    info: err.to_string(),
                }),
            })?
            .into_output_low();
        lock.pins.insert(
            pin,
            ClaimedPin {
                output,
                frequency: f64::from(DEFAULT_FREQUENCY),
                duty_cycle: 0.0,
            },
        );
        Ok(())
    }

    fn set_pwm_frequency(&mut self, pin: u8, frequency: u32) -> Result<(), Error> {
        let mut lock = self.data.lock();
        let claimed = lock.pins.get_mut(&pin).ok_or(UnknownPin { pin })?;
        claimed.frequency = f64::from(frequency);
        // Reapply on the spot when the pin is currently pulsing.
        if claimed.duty_cycle > 0.0 {
            claimed
                .output
                .set_pwm_frequency(claimed.frequency, claimed.duty_cycle)
                .map_err(|err| IoException {
                    info: err.to_string(),
                })?;
        }
        Ok(())
    }

    fn pwm_write(&mut self, pin: u8, duty_cycle: f64) -> Result<(), Error> {
        let mut lock = self.data.lock();
        let claimed = lock.pins.get_mut(&pin).ok_or(UnknownPin { pin })?;
        claimed
            .output
            .set_pwm_frequency(claimed.frequency, duty_cycle)
            .map_err(|err| IoException {
                info: err.to_string(),
            })?;
        claimed.duty_cycle = duty_cycle;
        Ok(())
    }
}
