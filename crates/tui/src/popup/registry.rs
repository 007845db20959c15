//! Registry of popup definitions, keyed by id.
//!
//! Built once at startup and passed explicitly to whatever needs lookup
//! (the engine's `show`/`confirm`, input dispatch). There is no global
//! instance, so tests can construct independent registries.

use std::collections::HashMap;

use crate::popup::definition::PopupDefinition;
use crate::popup::error::PopupError;

#[derive(Debug, Default)]
pub struct PopupRegistry {
    definitions: HashMap<String, PopupDefinition>,
}

impl PopupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition. Ids must be unique.
    pub fn register(&mut self, definition: PopupDefinition) -> Result<(), PopupError> {
        if self.definitions.contains_key(&definition.id) {
            return Err(PopupError::DuplicateId(definition.id));
        }
        tracing::debug!(popup_id = %definition.id, "Registered popup");
        self.definitions.insert(definition.id.clone(), definition);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&PopupDefinition> {
        self.definitions.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut PopupDefinition> {
        self.definitions.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
