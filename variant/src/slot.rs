//! How an alternative is laid out inside the storage union.

use crate::recursive::RecursiveWrapper;
use std::marker::PhantomData;

pub trait SlotKind {
    /// Type kept in the union.
    type Stored;
    /// Type seen by access and visitation.
    type Target;

    fn wrap(value: Self::Target) -> Self::Stored;
    fn unwrap(stored: Self::Stored) -> Self::Target;
    fn project(stored: &Self::Stored) -> &Self::Target;
    fn project_mut(stored: &mut Self::Stored) -> &mut Self::Target;
}

/// The alternative is stored inline.
pub struct Direct<T>(PhantomData<T>);

/// The alternative is stored behind a [`RecursiveWrapper`] and projected to
/// its pointee.
pub struct Indirect<T>(PhantomData<T>);

impl<T> SlotKind for Direct<T> {
    type Stored = T;
    type Target = T;

    fn wrap(value: T) -> T {
        value
    }

    fn unwrap(stored: T) -> T {
        stored
    }

    fn project(stored: &T) -> &T {
        stored
    }

    fn project_mut(stored: &mut T) -> &mut T {
        stored
    }
}

impl<T> SlotKind for Indirect<T> {
    type Stored = RecursiveWrapper<T>;
    type Target = T;

    fn wrap(value: T) -> RecursiveWrapper<T> {
        RecursiveWrapper::new(value)
    }

    fn unwrap(stored: RecursiveWrapper<T>) -> T {
        stored.into_inner()
    }

    fn project(stored: &RecursiveWrapper<T>) -> &T {
        stored.get()
    }

    fn project_mut(stored: &mut RecursiveWrapper<T>) -> &mut T {
        stored.get_mut()
    }
}
