//! Defines mocked collaborators of all kinds (useful for tests mostly).

pub mod gpio;
pub mod platform;

pub use gpio::{MockGpioBackend, MockPin};
pub use platform::{MockNotifier, MockRegistry, MockStateStore};
