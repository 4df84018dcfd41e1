use crate::types::Nat;

/// Fixed-size membership marker, used as per-walk scratch.
pub struct NatSet<const SIZE: usize, T: Nat> {
    marked: [bool; SIZE],
    _phantom: std::marker::PhantomData<T>,
}

impl<const SIZE: usize, T: Nat> NatSet<SIZE, T> {
    pub fn new() -> Self {
        NatSet {
            marked: [false; SIZE],
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn clear(&mut self) {
        self.marked.fill(false);
    }

    pub fn mark(&mut self, item: T) {
        let index: usize = item.into();
        self.marked[index] = true;
    }

    /// Marks `item`, returning false if it was already marked.
    #[inline]
    pub fn insert(&mut self, item: T) -> bool {
        let index: usize = item.into();
        !std::mem::replace(&mut self.marked[index], true)
    }

    pub fn is_marked(&self, item: T) -> bool {
        let index: usize = item.into();
        self.marked[index]
    }
}

impl<const SIZE: usize, T: Nat> Default for NatSet<SIZE, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{Vertex, VertexSet};

    #[test]
    fn insert_reports_first_sighting_only() {
        let mut set = VertexSet::new();
        let v = Vertex::of_coords(3, 3);
        assert!(set.insert(v));
        assert!(!set.insert(v));
        assert!(set.is_marked(v));
        set.clear();
        assert!(!set.is_marked(v));
    }
}
