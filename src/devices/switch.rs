use std::fmt::{Display, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;

use crate::config::SwitchConfig;
use crate::devices::Device;
use crate::errors::Error;
use crate::hardware::PwmLed;
use crate::platform::{StateStore, SwitchEntity, UpdateNotifier, STATE_ON};

/// Represents a simple one-color PWM LED exposed as an on/off switch entity.
///
/// The entity keeps a believed on/off state next to its [`PwmLed`] driver handle. Commands mutate
/// the state, actuate the driver and push an update to the host; the host never polls. At
/// added-to-host time the believed state is resynchronized from the host's last-state store
/// without pulsing the output.
#[derive(Clone, Debug)]
pub struct PwmSwitch {
    // ########################################
    // # Basics
    /// The driver handle actuating the pin.
    led: PwmLed,
    /// The display name of the entity.
    name: String,
    /// The optional stable identifier of the entity.
    unique_id: Option<String>,
    /// The believed current state.
    is_on: Arc<RwLock<bool>>,

    // ########################################
    // # Volatile utility data.
    /// The host update notifier, attached at registration time.
    notifier: Option<Arc<dyn UpdateNotifier>>,
}

impl PwmSwitch {
    /// Creates an instance of a [`PwmSwitch`] from one configuration entry and its driver handle.
    ///
    /// The entity starts with `is_on = false` and performs no hardware actuation.
    pub fn new(led: PwmLed, config: &SwitchConfig) -> Self {
        Self {
            led,
            name: config.name.clone(),
            unique_id: config.unique_id.clone(),
            is_on: Arc::new(RwLock::new(false)),
            notifier: None,
        }
    }

    /// Returns the identifier this entity uses against the host: the unique id when configured,
    /// the display name otherwise.
    fn entity_id(&self) -> &str {
        self.unique_id.as_deref().unwrap_or(&self.name)
    }

    /// Asks the host to re-read this entity's observable state (fire-and-forget).
    fn schedule_update(&self) {
        if let Some(notifier) = &self.notifier {
            notifier.schedule_update(self.entity_id());
        }
    }
}

impl Display for PwmSwitch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PwmSwitch ({}) [is_on={}, {}]",
            self.name,
            self.is_on.read(),
            self.led,
        )
    }
}

impl Device for PwmSwitch {}

#[async_trait]
impl SwitchEntity for PwmSwitch {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn get_unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    fn is_on(&self) -> bool {
        *self.is_on.read()
    }

    /// No polling needed: every mutation pushes an update.
    fn should_poll(&self) -> bool {
        false
    }

    /// Turns the switch on.
    ///
    /// The driver is actuated unconditionally: turning on an already-on switch re-invokes the
    /// driver (idempotent at the hardware level).
    fn turn_on(&mut self) -> Result<(), Error> {
        self.led.on()?;
        *self.is_on.write() = true;
        debug!("Switch '{}' turned on", self.name);
        self.schedule_update();
        Ok(())
    }

    /// Turns the switch off.
    ///
    /// The driver is actuated only when the switch is believed on; the believed state drops to
    /// off in all cases.
    fn turn_off(&mut self) -> Result<(), Error> {
        if self.is_on() {
            self.led.off()?;
        }
        *self.is_on.write() = false;
        debug!("Switch '{}' turned off", self.name);
        self.schedule_update();
        Ok(())
    }

    /// Handles the entity having been added to the host.
    ///
    /// Resynchronizes the believed state with the host's last known state, without calling into
    /// the driver: recovery must not physically pulse the output.
    async fn on_added(&mut self, store: &dyn StateStore) {
        if let Some(last_state) = store.get_last_state(self.entity_id()).await {
            *self.is_on.write() = last_state.state == STATE_ON;
        }
    }

    fn set_notifier(&mut self, notifier: Arc<dyn UpdateNotifier>) {
        self.notifier = Some(notifier);
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;
    use std::sync::Arc;

    use crate::config::SwitchConfig;
    use crate::hardware::{Gpio, PwmLed};
    use crate::mocks::{MockGpioBackend, MockNotifier, MockStateStore};
    use crate::platform::{SwitchEntity, STATE_OFF, STATE_ON};

    fn _config() -> SwitchConfig {
        SwitchConfig {
            name: String::from("Porch"),
            pin: 17,
            frequency: NonZeroU32::new(1000),
            unique_id: None,
        }
    }

    fn _setup(config: &SwitchConfig) -> (MockGpioBackend, super::PwmSwitch) {
        let backend = MockGpioBackend::default();
        let gpio = Gpio::new(backend.clone());
        let led = PwmLed::new(&gpio, config).unwrap();
        (backend, super::PwmSwitch::new(led, config))
    }

    #[test]
    fn test_creation() {
        let (backend, switch) = _setup(&_config());
        assert_eq!(switch.get_name(), "Porch");
        assert_eq!(switch.get_unique_id(), None);
        assert!(!switch.is_on(), "A fresh entity starts off");
        assert!(!switch.should_poll(), "Entities are push-updated");
        assert!(backend.get_pin(17).unwrap().writes.is_empty());
    }

    #[test]
    fn test_unique_id() {
        let config = SwitchConfig {
            unique_id: Some(String::from("porch_light")),
            .._config()
        };
        let (_, switch) = _setup(&config);
        assert_eq!(switch.get_unique_id(), Some("porch_light"));
        assert_eq!(switch.entity_id(), "porch_light");
    }

    #[test]
    fn test_turn_on_always_actuates() {
        let (backend, mut switch) = _setup(&_config());

        assert!(switch.turn_on().is_ok());
        assert!(switch.is_on());
        assert_eq!(backend.get_pin(17).unwrap().writes, vec![1.0]);

        // No no-op guard: turning on while on drives the hardware again.
        assert!(switch.turn_on().is_ok());
        assert!(switch.is_on());
        assert_eq!(backend.get_pin(17).unwrap().writes, vec![1.0, 1.0]);
    }

    #[test]
    fn test_turn_off_actuates_only_when_on() {
        let (backend, mut switch) = _setup(&_config());

        // Turning off an off switch does not reach the hardware.
        assert!(switch.turn_off().is_ok());
        assert!(!switch.is_on());
        assert!(backend.get_pin(17).unwrap().writes.is_empty());

        switch.turn_on().unwrap();
        assert!(switch.turn_off().is_ok());
        assert!(!switch.is_on());
        assert_eq!(backend.get_pin(17).unwrap().writes, vec![1.0, 0.0]);

        // Second turn_off: state stays off, zero additional writes.
        assert!(switch.turn_off().is_ok());
        assert!(!switch.is_on());
        assert_eq!(backend.get_pin(17).unwrap().writes, vec![1.0, 0.0]);
    }

    #[tokio::test]
    async fn test_restore_on() {
        let (backend, mut switch) = _setup(&_config());
        let store = MockStateStore::default().with_state("Porch", STATE_ON);

        switch.on_added(&store).await;
        assert!(switch.is_on(), "Restored 'on' state is believed");
        assert!(
            backend.get_pin(17).unwrap().writes.is_empty(),
            "Recovery must not pulse the output"
        );

        // A later turn_off now reaches the hardware exactly once.
        switch.turn_off().unwrap();
        assert_eq!(backend.get_pin(17).unwrap().writes, vec![0.0]);
    }

    #[tokio::test]
    async fn test_restore_off() {
        let (backend, mut switch) = _setup(&_config());
        let store = MockStateStore::default().with_state("Porch", STATE_OFF);

        switch.on_added(&store).await;
        assert!(!switch.is_on());
        assert!(backend.get_pin(17).unwrap().writes.is_empty());
    }

    #[tokio::test]
    async fn test_restore_nothing() {
        let (backend, mut switch) = _setup(&_config());
        let store = MockStateStore::default();

        switch.on_added(&store).await;
        assert!(!switch.is_on(), "No history leaves the default state");
        assert!(backend.get_pin(17).unwrap().writes.is_empty());
    }

    #[tokio::test]
    async fn test_restore_uses_unique_id() {
        let config = SwitchConfig {
            unique_id: Some(String::from("porch_light")),
            .._config()
        };
        let (_, mut switch) = _setup(&config);
        // History recorded under the display name must not match.
        let store = MockStateStore::default()
            .with_state("Porch", STATE_ON)
            .with_state("porch_light", STATE_OFF);

        switch.on_added(&store).await;
        assert!(!switch.is_on());
    }

    #[tokio::test]
    async fn test_update_notifications() {
        let (_, mut switch) = _setup(&_config());
        let notifier = MockNotifier::default();
        switch.set_notifier(Arc::new(notifier.clone()));

        // The restore hook does not notify: the host re-reads state itself afterwards.
        let store = MockStateStore::default().with_state("Porch", STATE_ON);
        switch.on_added(&store).await;
        assert!(notifier.get_updates().is_empty());

        // Every command notifies exactly once, even no-op ones.
        switch.turn_off().unwrap();
        switch.turn_on().unwrap();
        switch.turn_off().unwrap();
        assert_eq!(notifier.get_updates(), vec!["Porch", "Porch", "Porch"]);
    }

    #[test]
    fn test_display_impl() {
        let (_, mut switch) = _setup(&_config());
        switch.turn_on().unwrap();
        assert_eq!(
            format!("{}", switch),
            "PwmSwitch (Porch) [is_on=true, PwmLed (pin=17) [duty=1, frequency=1000Hz]]"
        );
    }
}
