//! Defines the host-platform surface: the capability interface entities implement and the
//! collaborator traits the host provides (last-state store, update notifier, entity registry).

mod entity;
mod notify;
mod restore;
mod setup;

pub use entity::SwitchEntity;
pub use notify::UpdateNotifier;
pub use restore::{LastState, StateStore};
pub use setup::{setup_platform, EntityRegistry};

/// State value the host reports for an entity that is on.
pub const STATE_ON: &str = "on";
/// State value the host reports for an entity that is off.
pub const STATE_OFF: &str = "off";
