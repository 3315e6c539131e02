//! Moves that leave a live source behind.
//!
//! A variant keeps its discriminant when moved from: the destination gets the
//! active value and the source still holds the same alternative, now in
//! whatever state that alternative's own move leaves behind. Containers end
//! up empty; numbers, characters and other `Copy` values are unchanged.
//!
//! This differs from sum types that reset a moved-from value to a canonical
//! empty alternative. Nothing here resets the discriminant.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::mem;

pub trait MoveOut: Sized {
    /// Returns the value and leaves `self` in its moved-from state.
    fn move_out(&mut self) -> Self;

    /// Move assignment.
    fn move_from(&mut self, src: &mut Self) {
        *self = src.move_out();
    }
}

/// Implements [`MoveOut`] through `std::mem::take` for types whose moved-from
/// state is their `Default`.
#[macro_export]
macro_rules! move_out_by_take {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::MoveOut for $ty {
            fn move_out(&mut self) -> Self {
                ::std::mem::take(self)
            }
        })*
    };
}

/// Implements [`MoveOut`] as a plain copy.
#[macro_export]
macro_rules! move_out_by_copy {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::MoveOut for $ty {
            fn move_out(&mut self) -> Self {
                *self
            }
        })*
    };
}

move_out_by_copy!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

move_out_by_take!(String);

impl<'a, T: ?Sized> MoveOut for &'a T {
    fn move_out(&mut self) -> Self {
        *self
    }
}

impl<T> MoveOut for Vec<T> {
    fn move_out(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T> MoveOut for VecDeque<T> {
    fn move_out(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T> MoveOut for LinkedList<T> {
    fn move_out(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T: Ord> MoveOut for BinaryHeap<T> {
    fn move_out(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T> MoveOut for Option<T> {
    fn move_out(&mut self) -> Self {
        self.take()
    }
}

impl<K: Ord, V> MoveOut for BTreeMap<K, V> {
    fn move_out(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T: Ord> MoveOut for BTreeSet<T> {
    fn move_out(&mut self) -> Self {
        mem::take(self)
    }
}

impl<K, V, S> MoveOut for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn move_out(&mut self) -> Self {
        mem::take(self)
    }
}

impl<T, S> MoveOut for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn move_out(&mut self) -> Self {
        mem::take(self)
    }
}

/// The box keeps its allocation and the pointee's moved-from state.
impl<T: MoveOut> MoveOut for Box<T> {
    fn move_out(&mut self) -> Self {
        Box::new((**self).move_out())
    }
}

impl<A: MoveOut, B: MoveOut> MoveOut for (A, B) {
    fn move_out(&mut self) -> Self {
        (self.0.move_out(), self.1.move_out())
    }
}
