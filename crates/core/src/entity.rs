//! Entity store - generational ids and dense component tables
//!
//! An [`Entity`] is an opaque `(index, generation)` pair handed out by
//! [`Entities`]. Components live in one [`Table`] per type, indexed by the
//! entity slot, so lookups are a bounds check plus a generation compare.
//! Destroying an entity bumps its slot generation; stale handles then miss in
//! every table without the tables having to be told.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub fn index(&self) -> usize {
        self.index as usize
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Allocator for entity ids. Freed slots are reused with a new generation.
#[derive(Debug, Clone, Default)]
pub struct Entities {
    generations: Vec<u32>,
    alive: Vec<bool>,
    free: Vec<u32>,
}

impl Entities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self) -> Entity {
        match self.free.pop() {
            Some(index) => {
                let slot = index as usize;
                self.alive[slot] = true;
                Entity {
                    index,
                    generation: self.generations[slot],
                }
            }
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                self.alive.push(true);
                Entity {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Returns `false` when the handle was already dead.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        let slot = entity.index();
        self.alive[slot] = false;
        self.generations[slot] = self.generations[slot].wrapping_add(1);
        self.free.push(entity.index);
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let slot = entity.index();
        slot < self.generations.len()
            && self.alive[slot]
            && self.generations[slot] == entity.generation
    }

    pub fn len(&self) -> usize {
        self.alive.iter().filter(|a| **a).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(slot, _)| Entity {
                index: slot as u32,
                generation: self.generations[slot],
            })
    }
}

/// Storage for one component type.
#[derive(Debug, Clone)]
pub struct Table<T> {
    slots: Vec<Option<(Entity, T)>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach or replace; returns the previous value for this entity.
    pub fn insert(&mut self, entity: Entity, value: T) -> Option<T> {
        let slot = entity.index();
        if slot >= self.slots.len() {
            self.slots.resize_with(slot + 1, || None);
        }
        self.slots[slot]
            .replace((entity, value))
            .and_then(|(owner, old)| (owner == entity).then_some(old))
    }

    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let cell = self.slots.get_mut(entity.index())?;
        match cell {
            Some((owner, _)) if *owner == entity => cell.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn get(&self, entity: Entity) -> Option<&T> {
        match self.slots.get(entity.index())? {
            Some((owner, value)) if *owner == entity => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        match self.slots.get_mut(entity.index())? {
            Some((owner, value)) if *owner == entity => Some(value),
            _ => None,
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entities holding this component, in slot order.
    pub fn entities(&self) -> Vec<Entity> {
        self.slots.iter().flatten().map(|(e, _)| *e).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.slots.iter().flatten().map(|(e, v)| (*e, v))
    }
}
