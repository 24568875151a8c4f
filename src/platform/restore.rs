use async_trait::async_trait;

/// Last known state of an entity, as persisted by the host across restarts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LastState {
    /// The persisted state value ([`STATE_ON`](crate::platform::STATE_ON) or
    /// [`STATE_OFF`](crate::platform::STATE_OFF) for switch entities).
    pub state: String,
}

/// Defines the host's last-state store, queried once per entity at added-to-host time.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Returns the last state persisted for the given entity, if any.
    async fn get_last_state(&self, entity_id: &str) -> Option<LastState>;
}
