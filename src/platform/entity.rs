use std::sync::Arc;

use async_trait::async_trait;

use crate::devices::Device;
use crate::errors::Error;
use crate::platform::{StateStore, UpdateNotifier};

// Makes a Box<dyn SwitchEntity> clone (used for registry snapshots).
dyn_clone::clone_trait_object!(SwitchEntity);

/// The capability interface the host drives switch entities through.
///
/// This trait extends [`Device`] and covers the whole entity lifecycle: identity accessors, the
/// on/off commands, the polling contract and the one-shot added-to-host hook. The host serializes
/// lifecycle and command dispatch per entity, so implementations need no internal locking beyond
/// their own state cell.
#[async_trait]
pub trait SwitchEntity: Device {
    /// Returns the display name of the entity.
    fn get_name(&self) -> &str;

    /// Returns the stable identifier of the entity, if any.
    fn get_unique_id(&self) -> Option<&str>;

    /// Indicates the believed current state.
    fn is_on(&self) -> bool;

    /// Indicates if the host should poll this entity for state. Hosts poll by default; entities
    /// pushing their own updates override this to `false`.
    fn should_poll(&self) -> bool {
        true
    }

    /// Turns the entity on.
    fn turn_on(&mut self) -> Result<(), Error>;

    /// Turns the entity off.
    fn turn_off(&mut self) -> Result<(), Error>;

    /// Handles the entity having been added to the host. Invoked once per entity, after
    /// registration, before any command is dispatched.
    async fn on_added(&mut self, store: &dyn StateStore);

    /// Attaches the host update notifier. Invoked by the host at registration time.
    fn set_notifier(&mut self, notifier: Arc<dyn UpdateNotifier>);
}
