//! Generational handle bookkeeping for buffers owned across the C boundary.
//!
//! A handle packs a slot index (upper 32 bits) and a generation counter
//! (lower 32 bits) into one `u64`. Removing an entry bumps its slot's
//! generation, so handles the caller kept after a destroy go stale and
//! resolve to `None` instead of dangling. Double-destroy is a safe no-op.

fn pack(slot: u32, generation: u32) -> u64 {
    ((slot as u64) << 32) | generation as u64
}

fn unpack(handle: u64) -> (u32, u32) {
    ((handle >> 32) as u32, handle as u32)
}

struct Entry<T> {
    generation: u32,
    value: Option<T>,
}

/// Maps `u64` handles to owned values with stale-handle detection.
///
/// Vacated slots are recycled through a free list. A slot whose generation
/// counter wraps back to zero is retired instead of recycled; a recycled
/// wrap would let first-epoch handles resurrect unrelated values.
pub(crate) struct HandleMap<T> {
    entries: Vec<Entry<T>>,
    vacant: Vec<u32>,
}

impl<T> HandleMap<T> {
    /// An empty map. `const` so it can back a `static Mutex`.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Store a value and mint its handle.
    pub fn insert(&mut self, value: T) -> u64 {
        match self.vacant.pop() {
            Some(slot) => {
                let entry = &mut self.entries[slot as usize];
                entry.value = Some(value);
                pack(slot, entry.generation)
            }
            None => {
                let slot = self.entries.len() as u32;
                self.entries.push(Entry {
                    generation: 0,
                    value: Some(value),
                });
                pack(slot, 0)
            }
        }
    }

    /// Resolve a handle to a shared reference.
    ///
    /// Returns `None` for stale handles (generation mismatch) and handles
    /// that never existed. There is no mutable counterpart: buffers are
    /// immutable once constructed.
    pub fn get(&self, handle: u64) -> Option<&T> {
        let (slot, generation) = unpack(handle);
        let entry = self.entries.get(slot as usize)?;
        if entry.generation != generation {
            return None;
        }
        entry.value.as_ref()
    }

    /// Take the value out, invalidating the handle.
    ///
    /// Returns `None` if the handle is already stale, so destroying twice
    /// is safe.
    pub fn remove(&mut self, handle: u64) -> Option<T> {
        let (slot, generation) = unpack(handle);
        let entry = self.entries.get_mut(slot as usize)?;
        if entry.generation != generation {
            return None;
        }
        let value = entry.value.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        // Retire the slot on wraparound; see the type docs.
        if entry.generation != 0 {
            self.vacant.push(slot);
        }
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn insert_then_get() {
        let mut map = HandleMap::new();
        let h = map.insert("buffer");
        assert_eq!(map.get(h), Some(&"buffer"));
    }

    #[test]
    fn remove_invalidates_the_handle() {
        let mut map = HandleMap::new();
        let h = map.insert(5u8);
        assert_eq!(map.remove(h), Some(5));
        assert_eq!(map.get(h), None);
        assert_eq!(map.remove(h), None);
    }

    #[test]
    fn recycled_slot_gets_a_new_generation() {
        let mut map = HandleMap::new();
        let first = map.insert(1u8);
        map.remove(first);
        let second = map.insert(2u8);

        let (slot_a, gen_a) = unpack(first);
        let (slot_b, gen_b) = unpack(second);
        assert_eq!(slot_a, slot_b);
        assert_ne!(gen_a, gen_b);
        assert_eq!(map.get(first), None);
        assert_eq!(map.get(second), Some(&2));
    }

    #[test]
    fn wrapped_generation_retires_the_slot() {
        let mut map = HandleMap::new();
        let h = map.insert(1u8);
        map.remove(h);

        // Push slot 0 to the last usable generation, then remove to wrap.
        map.entries[0].generation = u32::MAX;
        let last = map.insert(2u8);
        map.remove(last);

        assert_eq!(map.entries[0].generation, 0);
        assert!(!map.vacant.contains(&0), "wrapped slot must not be recycled");
        // A first-epoch handle must not resolve against the retired slot.
        assert_eq!(map.get(pack(0, 0)), None);
        // The next insert allocates a fresh slot.
        let fresh = map.insert(3u8);
        assert_ne!(unpack(fresh).0, 0);
    }

    proptest! {
        #[test]
        fn pack_unpack_round_trips(slot in any::<u32>(), generation in any::<u32>()) {
            prop_assert_eq!(unpack(pack(slot, generation)), (slot, generation));
        }

        #[test]
        fn arbitrary_handles_never_resolve_on_an_empty_map(handle in any::<u64>()) {
            let map: HandleMap<u8> = HandleMap::new();
            prop_assert!(map.get(handle).is_none());
        }
    }
}
