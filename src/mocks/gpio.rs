use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::errors::Error;
use crate::errors::HardwareError::{IncompatibleMode, UnknownPin};
use crate::io::{GpioBackend, PinMode};

/// Mock implementation of [`GpioBackend`].
///
/// Models a 28-pin chip (ids 0-27) where pins 0 and 1 are reserved and refuse PWM. Every
/// duty-cycle write is recorded per pin, so tests can count driver invocations. Clones share the
/// pin table, mirroring how driver handles clone their backend.
#[derive(Clone, Debug)]
pub struct MockGpioBackend {
    pub data: Arc<RwLock<HashMap<u8, MockPin>>>,
}

/// State of one pin of the mock chip.
#[derive(Clone, Debug)]
pub struct MockPin {
    pub id: u8,
    /// The mode the pin is currently claimed in, if any.
    pub mode: Option<PinMode>,
    /// Indicates if the pin can be claimed in PWM mode.
    pub supports_pwm: bool,
    /// The last configured PWM frequency (in Hz).
    pub frequency: u32,
    /// The last written duty cycle.
    pub duty_cycle: f64,
    /// Every duty cycle written on the pin, in order.
    pub writes: Vec<f64>,
}

impl Default for MockGpioBackend {
    fn default() -> Self {
        let pins = (0..28)
            .map(|id| {
                (
                    id,
                    MockPin {
                        id,
                        mode: None,
                        supports_pwm: id > 1,
                        frequency: 0,
                        duty_cycle: 0.0,
                        writes: vec![],
                    },
                )
            })
            .collect();
        Self {
            data: Arc::new(RwLock::new(pins)),
        }
    }
}

impl MockGpioBackend {
    /// Returns a snapshot of the given pin, if it exists.
    pub fn get_pin(&self, pin: u8) -> Option<MockPin> {
        self.data.read().get(&pin).cloned()
    }
}

impl Display for MockGpioBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [pins={}]",
            self.get_backend_name(),
            self.data.read().len()
        )
    }
}

impl GpioBackend for MockGpioBackend {
    fn set_pin_mode(&mut self, pin: u8, mode: PinMode) -> Result<(), Error> {
        let mut lock = self.data.write();
        let pin_instance = lock.get_mut(&pin).ok_or(UnknownPin { pin })?;
        if mode == PinMode::Pwm && !pin_instance.supports_pwm {
            return Err(Error::from(IncompatibleMode {
                pin,
                mode,
                context: "try to set pin mode",
            }));
        }
        pin_instance.mode = Some(mode);
        Ok(())
    }

    fn set_pwm_frequency(&mut self, pin: u8, frequency: u32) -> Result<(), Error> {
        let mut lock = self.data.write();
        let pin_instance = lock.get_mut(&pin).ok_or(UnknownPin { pin })?;
        pin_instance.frequency = frequency;
        Ok(())
    }

    fn pwm_write(&mut self, pin: u8, duty_cycle: f64) -> Result<(), Error> {
        let mut lock = self.data.write();
        let pin_instance = lock.get_mut(&pin).ok_or(UnknownPin { pin })?;
        match pin_instance.mode {
            Some(PinMode::Pwm) => {
                pin_instance.duty_cycle = duty_cycle;
                pin_instance.writes.push(duty_cycle);
                Ok(())
            }
            _ => Err(Error::from(IncompatibleMode {
                pin,
                mode: PinMode::Pwm,
                context: "write pwm value on unclaimed pin",
            })),
        }
    }
}
