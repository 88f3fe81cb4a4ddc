//! Index-addressed storage for embed and field editors.

/// Ordered slots addressed by a stable index.
///
/// Indices grow monotonically and are never handed out twice, even after the slot
/// they named is removed or the arena is cleared.
#[derive(Clone, Debug, PartialEq)]
pub struct Arena<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` in a fresh slot and returns its index.
    pub fn insert(&mut self, value: T) -> usize {
        self.slots.push(Some(value));
        self.slots.len() - 1
    }

    /// Empties the slot at `index`, returning what it held.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Empties every slot without rewinding the index counter.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Number of live slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live slots in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|value| (index, value)))
    }

    pub fn indices(&self) -> Vec<usize> {
        self.iter().map(|(index, _)| index).collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_never_reused() {
        let mut arena = Arena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.remove(a), Some("a"));
        let c = arena.insert("c");

        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), None);

        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.insert("d"), 3);
    }

    #[test]
    fn iterates_live_slots_in_creation_order() {
        let mut arena = Arena::new();
        for value in ["x", "y", "z"] {
            arena.insert(value);
        }
        arena.remove(1);

        assert_eq!(arena.iter().collect::<Vec<_>>(), vec![(0, &"x"), (2, &"z")]);
        assert_eq!(arena.remove(1), None);
        assert_eq!(arena.remove(99), None);
    }
}
