//! Typed access to the active alternative.
//!
//! Access matches the requested type exactly against the alternative
//! targets; a `RecursiveWrapper<T>` alternative is accessed as `T`. Asking
//! for a type that is not an alternative does not compile:
//!
//! ```compile_fail
//! use variant::{variant, VariantExt};
//!
//! #[variant]
//! pub struct Number(i32, f64);
//!
//! let n = Number::from(1);
//! n.get::<u8>();
//! ```

use crate::error::BadAccess;
use crate::raw::{Alternative, VariantCore};
use crate::slot::SlotKind;
use std::mem::MaybeUninit;
use std::ptr;

pub type KindOf<V, T> = <V as Alternative<T>>::Kind;
pub type StoredOf<V, T> = <KindOf<V, T> as SlotKind>::Stored;

pub trait VariantExt: VariantCore {
    fn from_alternative<T>(value: T) -> Self
    where
        Self: Alternative<T>,
    {
        let mut storage = MaybeUninit::<Self::Storage>::uninit();
        unsafe {
            ptr::write(
                storage.as_mut_ptr() as *mut StoredOf<Self, T>,
                <KindOf<Self, T> as SlotKind>::wrap(value),
            );
            Self::from_raw_parts(<Self as Alternative<T>>::INDEX, storage)
        }
    }

    fn is<T>(&self) -> bool
    where
        Self: Alternative<T>,
    {
        self.which() == <Self as Alternative<T>>::INDEX
    }

    fn get_if<T>(&self) -> Option<&T>
    where
        Self: Alternative<T>,
    {
        if !self.is::<T>() {
            return None;
        }
        let stored = unsafe { &*(self.storage() as *const StoredOf<Self, T>) };
        Some(<KindOf<Self, T> as SlotKind>::project(stored))
    }

    fn get_if_mut<T>(&mut self) -> Option<&mut T>
    where
        Self: Alternative<T>,
    {
        if !self.is::<T>() {
            return None;
        }
        let stored = unsafe { &mut *(self.storage_mut() as *mut StoredOf<Self, T>) };
        Some(<KindOf<Self, T> as SlotKind>::project_mut(stored))
    }

    fn get<T>(&self) -> Result<&T, BadAccess>
    where
        Self: Alternative<T>,
    {
        let error = bad_access::<Self, T>(self);
        self.get_if::<T>().ok_or(error)
    }

    fn get_mut<T>(&mut self) -> Result<&mut T, BadAccess>
    where
        Self: Alternative<T>,
    {
        let error = bad_access::<Self, T>(self);
        self.get_if_mut::<T>().ok_or(error)
    }

    /// Takes the active value out if it is a `T`, hands `self` back otherwise.
    fn into_alternative<T>(self) -> Result<T, Self>
    where
        Self: Alternative<T>,
    {
        if !self.is::<T>() {
            return Err(self);
        }
        let (_, storage) = self.into_raw_parts();
        let stored = unsafe { ptr::read(storage.as_ptr() as *const StoredOf<Self, T>) };
        Ok(<KindOf<Self, T> as SlotKind>::unwrap(stored))
    }

    /// Assigns `value`. An active `T` is assigned in place, any other
    /// alternative is destroyed first.
    fn set<T>(&mut self, value: T)
    where
        Self: Alternative<T>,
    {
        match self.get_if_mut::<T>() {
            Some(slot) => *slot = value,
            None => *self = Self::from_alternative(value),
        }
    }

    /// Destroys the active value and constructs a `T` in its place.
    fn emplace<T>(&mut self, value: T) -> &mut T
    where
        Self: Alternative<T>,
    {
        *self = Self::from_alternative(value);
        let stored = unsafe { &mut *(self.storage_mut() as *mut StoredOf<Self, T>) };
        <KindOf<Self, T> as SlotKind>::project_mut(stored)
    }
}

impl<V: VariantCore> VariantExt for V {}

fn bad_access<V, T>(variant: &V) -> BadAccess
where
    V: Alternative<T>,
{
    BadAccess {
        requested: V::NAMES[<V as Alternative<T>>::INDEX],
        active: variant.active_name(),
    }
}

pub fn get<T, V>(variant: &V) -> Result<&T, BadAccess>
where
    V: Alternative<T>,
{
    variant.get::<T>()
}

pub fn get_mut<T, V>(variant: &mut V) -> Result<&mut T, BadAccess>
where
    V: Alternative<T>,
{
    variant.get_mut::<T>()
}
