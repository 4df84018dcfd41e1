use crate::types::Nat;
use std::ops::{Index, IndexMut};

/// Dense array keyed by a `Nat` type. Cloning copies the whole array, which is
/// what makes `Board` copies independent.
#[derive(Clone)]
pub struct NatMap<const SIZE: usize, N: Nat, T> {
    data: [T; SIZE],
    _phantom: std::marker::PhantomData<N>,
}

impl<const SIZE: usize, N: Nat, T: Clone> NatMap<SIZE, N, T> {
    pub fn new_with(value: T) -> Self {
        Self {
            data: [(); SIZE].map(|_| value.clone()),
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn from_fn(mut f: impl FnMut(N) -> T) -> Self {
        let mut idx = 0;
        Self {
            data: [(); SIZE].map(|_| {
                let value = f(N::from(idx));
                idx += 1;
                value
            }),
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<const SIZE: usize, N: Nat, T> Index<N> for NatMap<SIZE, N, T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: N) -> &Self::Output {
        let index: usize = idx.into();
        &self.data[index]
    }
}

impl<const SIZE: usize, N: Nat, T> IndexMut<N> for NatMap<SIZE, N, T> {
    #[inline]
    fn index_mut(&mut self, idx: N) -> &mut Self::Output {
        let index: usize = idx.into();
        &mut self.data[index]
    }
}

impl<const SIZE: usize, N: Nat, T: Clone + Default> Default for NatMap<SIZE, N, T> {
    fn default() -> Self {
        Self::new_with(T::default())
    }
}
