// src/store.rs
// In-memory entity store: one insertion-ordered collection per entity kind

use std::collections::HashMap;

use tracing::debug;
use uuid::Uuid;

use crate::error::{EntityKind, Result, TrackerError};
use crate::models::{Project, Task, TaskFilter, User};

/// Something that can live in a [`Collection`]
pub trait Entity: Clone {
    const KIND: EntityKind;

    fn id(&self) -> Uuid;
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Identifier-keyed collection that remembers insertion order.
///
/// Insert-only: entities are never replaced or removed, so `order` and
/// `items` always hold the same set of ids.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    order: Vec<Uuid>,
    items: HashMap<Uuid, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            items: HashMap::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Snapshot of every entity, in insertion order
    pub fn all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    pub fn get(&self, id: &Uuid) -> Result<&T> {
        self.items.get(id).ok_or(TrackerError::NotFound(T::KIND))
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.items.contains_key(id)
    }

    /// Add an entity. Fails without touching the collection when the id is
    /// already taken.
    pub fn insert(&mut self, entity: T) -> Result<()> {
        let id = entity.id();
        if self.items.contains_key(&id) {
            return Err(TrackerError::AlreadyExists(T::KIND));
        }
        self.order.push(id);
        self.items.insert(id, entity);
        let kind = T::KIND;
        debug!(%kind, %id, "Entity inserted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// All tracker data. Owned by the application state; nothing here is global.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    pub users: Collection<User>,
    pub projects: Collection<Project>,
    pub tasks: Collection<Task>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks matching `filter`, in store order
    pub fn filter_tasks(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }
}
