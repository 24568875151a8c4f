use std::fmt::Debug;

/// Defines the host's update notifier.
///
/// Entities do not get polled; after each mutation they fire this to request the host re-read
/// their observable properties. The call is fire-and-forget.
pub trait UpdateNotifier: Debug + Send + Sync {
    /// Requests the host to re-read the given entity's state.
    fn schedule_update(&self, entity_id: &str);
}
