//=========================================================================
// Entity Store
//=========================================================================
//
// Minimal entity/component store backing the frame-visible side of the
// input pipeline: one type-erased column per component type, keyed by
// entity.
//
// Entity identifiers are monotonic and never reused, so a stale handle
// from a despawned event entity can never alias a newer one. Query
// results come back sorted by entity id, which makes iteration order
// deterministic across runs.
//
// Columns are created lazily on first attach. A type mismatch inside a
// column is impossible by construction (the column is keyed by the
// component's `TypeId`), so downcasts use `expect`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::{Any, TypeId};
use std::collections::HashMap;

use log::trace;

//=== Entity ==============================================================

/// Handle to a stored entity. Monotonic, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u64);

//=== Component ===========================================================

/// Marker for types storable as components.
pub trait Component: 'static {}

impl<T: 'static> Component for T {}

//=== Component Columns ===================================================

trait ComponentColumn {
    fn remove_entity(&mut self, entity: Entity);
    fn contains(&self, entity: Entity) -> bool;
    fn entities(&self) -> Vec<Entity>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Component> ComponentColumn for HashMap<Entity, T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(&entity);
    }

    fn contains(&self, entity: Entity) -> bool {
        self.contains_key(&entity)
    }

    fn entities(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self.keys().copied().collect();
        entities.sort_unstable();
        entities
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=== EntityStore =========================================================

/// Entity/component storage with typed attach and query access.
pub struct EntityStore {
    next_id: u64,
    columns: HashMap<TypeId, Box<dyn ComponentColumn>>,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            next_id: 0,
            columns: HashMap::new(),
        }
    }

    //--- Entity Lifecycle -------------------------------------------------

    /// Creates a new entity with no components.
    pub fn spawn(&mut self) -> Entity {
        let entity = Entity(self.next_id);
        self.next_id += 1;
        entity
    }

    /// Removes the entity's components from every column.
    pub fn despawn(&mut self, entity: Entity) {
        for column in self.columns.values_mut() {
            column.remove_entity(entity);
        }
        trace!(target: "store", "despawned {:?}", entity);
    }

    //--- Component Access -------------------------------------------------

    /// Attaches a component, replacing any existing one of the same type.
    pub fn attach<T: Component>(&mut self, entity: Entity, component: T) {
        self.column_mut::<T>().insert(entity, component);
    }

    /// Borrows the entity's component of type `T`, if attached.
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.column::<T>().and_then(|column| column.get(&entity))
    }

    /// Mutably borrows the entity's component of type `T`, if attached.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.columns
            .get_mut(&TypeId::of::<T>())
            .map(Self::downcast_mut::<T>)
            .and_then(|column| column.get_mut(&entity))
    }

    /// Returns `true` if the entity has a component of type `T`.
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.column::<T>()
            .map(|column| column.contains_key(&entity))
            .unwrap_or(false)
    }

    //--- Queries ----------------------------------------------------------

    /// Entities carrying a `T` component, sorted by id.
    pub fn entities_with<T: Component>(&self) -> Vec<Entity> {
        self.columns
            .get(&TypeId::of::<T>())
            .map(|column| column.entities())
            .unwrap_or_default()
    }

    /// Entities carrying `T` but not `U`, sorted by id.
    pub fn entities_with_excluding<T: Component, U: Component>(&self) -> Vec<Entity> {
        self.entities_with::<T>()
            .into_iter()
            .filter(|entity| !self.has::<U>(*entity))
            .collect()
    }

    //--- Internal Helpers -------------------------------------------------

    fn column<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.columns.get(&TypeId::of::<T>()).map(|column| {
            column
                .as_any()
                .downcast_ref::<HashMap<Entity, T>>()
                .expect("Type mismatch in EntityStore column")
        })
    }

    fn column_mut<T: Component>(&mut self) -> &mut HashMap<Entity, T> {
        let column = self
            .columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(HashMap::<Entity, T>::new()));
        Self::downcast_mut::<T>(column)
    }

    fn downcast_mut<T: Component>(column: &mut Box<dyn ComponentColumn>) -> &mut HashMap<Entity, T> {
        column
            .as_any_mut()
            .downcast_mut::<HashMap<Entity, T>>()
            .expect("Type mismatch in EntityStore column")
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Name(&'static str);

    #[derive(Debug, PartialEq)]
    struct Health(u32);

    #[test]
    fn spawn_yields_distinct_ids() {
        let mut store = EntityStore::new();
        let first = store.spawn();
        let second = store.spawn();
        assert_ne!(first, second);
    }

    #[test]
    fn ids_are_never_reused_after_despawn() {
        let mut store = EntityStore::new();
        let first = store.spawn();
        store.despawn(first);
        let second = store.spawn();
        assert_ne!(first, second);
    }

    #[test]
    fn attach_and_get() {
        let mut store = EntityStore::new();
        let entity = store.spawn();
        store.attach(entity, Name("window"));

        assert_eq!(store.get::<Name>(entity), Some(&Name("window")));
        assert!(store.has::<Name>(entity));
        assert!(!store.has::<Health>(entity));
    }

    #[test]
    fn attach_replaces_existing_component() {
        let mut store = EntityStore::new();
        let entity = store.spawn();
        store.attach(entity, Health(100));
        store.attach(entity, Health(50));

        assert_eq!(store.get::<Health>(entity), Some(&Health(50)));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut store = EntityStore::new();
        let entity = store.spawn();
        store.attach(entity, Health(100));

        store.get_mut::<Health>(entity).unwrap().0 = 25;
        assert_eq!(store.get::<Health>(entity), Some(&Health(25)));
    }

    #[test]
    fn despawn_clears_all_columns() {
        let mut store = EntityStore::new();
        let entity = store.spawn();
        store.attach(entity, Name("window"));
        store.attach(entity, Health(100));

        store.despawn(entity);
        assert!(store.get::<Name>(entity).is_none());
        assert!(store.get::<Health>(entity).is_none());
    }

    #[test]
    fn entities_with_returns_sorted_matches() {
        let mut store = EntityStore::new();
        let first = store.spawn();
        let second = store.spawn();
        let third = store.spawn();
        store.attach(third, Name("c"));
        store.attach(first, Name("a"));

        assert_eq!(store.entities_with::<Name>(), vec![first, third]);
        assert!(!store.entities_with::<Name>().contains(&second));
    }

    #[test]
    fn exclusion_query_filters_second_component() {
        let mut store = EntityStore::new();
        let bare = store.spawn();
        let full = store.spawn();
        store.attach(bare, Name("bare"));
        store.attach(full, Name("full"));
        store.attach(full, Health(1));

        assert_eq!(
            store.entities_with_excluding::<Name, Health>(),
            vec![bare]
        );
    }

    #[test]
    fn query_on_unknown_component_is_empty() {
        let store = EntityStore::new();
        assert!(store.entities_with::<Name>().is_empty());
    }
}
