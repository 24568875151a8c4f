//! Defines the devices this platform exposes as entities to the host.

use std::fmt::Debug;

use dyn_clone::DynClone;

mod switch;

pub use switch::PwmSwitch;

/// A trait for devices requiring debugging, cloning, and concurrency support.
pub trait Device: Debug + DynClone + Send + Sync {}
dyn_clone::clone_trait_object!(Device);
