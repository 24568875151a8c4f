use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::platform::{EntityRegistry, LastState, StateStore, SwitchEntity, UpdateNotifier};

/// Mock implementation of [`StateStore`] holding a fixed set of persisted states.
#[derive(Clone, Debug, Default)]
pub struct MockStateStore {
    states: HashMap<String, String>,
}

impl MockStateStore {
    /// Records a persisted `state` for the given `entity_id`.
    pub fn with_state(mut self, entity_id: &str, state: &str) -> Self {
        self.states.insert(entity_id.into(), state.into());
        self
    }
}

#[async_trait]
impl StateStore for MockStateStore {
    async fn get_last_state(&self, entity_id: &str) -> Option<LastState> {
        self.states.get(entity_id).map(|state| LastState {
            state: state.clone(),
        })
    }
}

/// Mock implementation of [`UpdateNotifier`] recording every requested update.
/// Clones share the record, so a clone can be attached to an entity while the test keeps one.
#[derive(Clone, Debug, Default)]
pub struct MockNotifier {
    updates: Arc<RwLock<Vec<String>>>,
}

impl MockNotifier {
    /// Returns the entity ids updates were requested for, in order.
    pub fn get_updates(&self) -> Vec<String> {
        self.updates.read().clone()
    }
}

impl UpdateNotifier for MockNotifier {
    fn schedule_update(&self, entity_id: &str) {
        self.updates.write().push(entity_id.into());
    }
}

/// Mock implementation of [`EntityRegistry`] collecting the registered entities.
#[derive(Debug, Default)]
pub struct MockRegistry {
    pub entities: Vec<Box<dyn SwitchEntity>>,
}

impl EntityRegistry for MockRegistry {
    fn add_entities(&mut self, mut entities: Vec<Box<dyn SwitchEntity>>) {
        self.entities.append(&mut entities);
    }
}
