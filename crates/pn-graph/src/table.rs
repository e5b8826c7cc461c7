//! Identifier-keyed entity tables.
//!
//! Entities live in a slot arena; a separate lookup maps each user-supplied
//! identifier to its slot. Slots are stable for the lifetime of the table, so
//! later sections can address an entity without holding a borrow.

use std::collections::HashMap;

use crate::entity::{LinkEntity, NodeEntity};

/// Entities stored in a [`Table`] are keyed by their identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for NodeEntity {
    fn key(&self) -> &str {
        &self.identifier
    }
}

impl Keyed for LinkEntity {
    fn key(&self) -> &str {
        &self.identifier
    }
}

/// Outcome of [`Table::insert`].
#[derive(Debug, Clone, PartialEq)]
pub enum Inserted<T> {
    /// A new slot was allocated.
    New { slot: usize },
    /// An entity with the same identifier was overwritten in its slot.
    Replaced { slot: usize, previous: T },
}

impl<T> Inserted<T> {
    pub fn slot(&self) -> usize {
        match self {
            Inserted::New { slot } | Inserted::Replaced { slot, .. } => *slot,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Table<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity, overwriting any entity with the same identifier.
    ///
    /// An overwrite keeps the original slot, so iteration order is the order
    /// in which identifiers were first seen.
    pub fn insert(&mut self, entity: T) -> Inserted<T> {
        if let Some(&slot) = self.index.get(entity.key()) {
            let previous = std::mem::replace(&mut self.entries[slot], entity);
            return Inserted::Replaced { slot, previous };
        }
        let slot = self.entries.len();
        self.index.insert(entity.key().to_string(), slot);
        self.entries.push(entity);
        Inserted::New { slot }
    }

    pub fn slot_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.slot_of(key).map(|slot| &self.entries[slot])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let slot = self.slot_of(key)?;
        self.entries.get_mut(slot)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entities in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table, yielding entities in slot order.
    pub fn into_values(self) -> Vec<T> {
        self.entries
    }
}

pub type NodeTable = Table<NodeEntity>;
pub type LinkTable = Table<LinkEntity>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(&'static str, u32);

    impl Keyed for Named {
        fn key(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut table = Table::new();
        assert_eq!(table.insert(Named("a", 1)), Inserted::New { slot: 0 });
        assert_eq!(table.insert(Named("b", 2)), Inserted::New { slot: 1 });
        assert_eq!(table.get("b"), Some(&Named("b", 2)));
        assert!(table.get("c").is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn overwrite_keeps_slot_and_returns_previous() {
        let mut table = Table::new();
        table.insert(Named("a", 1));
        table.insert(Named("b", 2));
        let outcome = table.insert(Named("a", 3));
        assert_eq!(
            outcome,
            Inserted::Replaced {
                slot: 0,
                previous: Named("a", 1)
            }
        );
        let order: Vec<u32> = table.iter().map(|n| n.1).collect();
        assert_eq!(order, vec![3, 2]);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut table = Table::new();
        table.insert(Named("a", 1));
        if let Some(entry) = table.get_mut("a") {
            entry.1 = 9;
        }
        assert_eq!(table.into_values(), vec![Named("a", 9)]);
    }
}
