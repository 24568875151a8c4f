use log::{debug, trace};

use crate::config::PlatformConfig;
use crate::devices::PwmSwitch;
use crate::errors::Error;
use crate::hardware::{Gpio, PwmLed};
use crate::platform::SwitchEntity;

/// Defines the host's entity registry, accepting a batch of constructed entities.
pub trait EntityRegistry: Send {
    /// Registers the given entities with the host.
    fn add_entities(&mut self, entities: Vec<Box<dyn SwitchEntity>>);
}

/// Sets up the PWM LED switch platform.
///
/// For every configuration entry, builds the [`PwmLed`] driver handle then wraps it in a
/// [`PwmSwitch`] entity, and registers the whole batch with the host. Exactly one entity per
/// entry is registered.
///
/// # Errors
/// * `UnknownPin` / `IncompatibleMode`: a driver handle could not be built for one entry. The
///   error aborts the whole setup call; no partial registration happens.
pub fn setup_platform(
    gpio: &Gpio,
    config: &PlatformConfig,
    registry: &mut dyn EntityRegistry,
) -> Result<(), Error> {
    let mut entities: Vec<Box<dyn SwitchEntity>> = Vec::with_capacity(config.switchs.len());

    for switch_config in &config.switchs {
        let led = PwmLed::new(gpio, switch_config)?;
        trace!("Driver ready for '{}': {}", switch_config.name, led);
        entities.push(Box::new(PwmSwitch::new(led, switch_config)));
    }

    debug!("Registering {} PWM switch entities", entities.len());
    registry.add_entities(entities);
    Ok(())
}
