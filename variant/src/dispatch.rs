//! Per-alternative thunks.
//!
//! `#[variant]` instantiates these once per alternative and collects them in
//! `const` tables indexed by the discriminant, so every operation on a
//! variant is one lookup and one indirect call. All pointers point at the
//! start of the storage union.

use crate::move_out::MoveOut;
use crate::slot::SlotKind;
use crate::visit::{Visitor, VisitorMut, VisitorOnce};
use std::ptr;

pub type DropFn = unsafe fn(*mut u8);
pub type CloneFn = unsafe fn(*const u8, *mut u8);
pub type MoveFn = unsafe fn(*mut u8, *mut u8);
pub type VisitFn<V, R> = unsafe fn(*const u8, V) -> R;
pub type VisitMutFn<V, R> = unsafe fn(*mut u8, V) -> R;
pub type VisitOnceFn<V, R> = unsafe fn(*mut u8, V) -> R;

/// # Safety
/// `storage` holds a live `K::Stored`, which is dead afterwards.
pub unsafe fn drop_slot<K: SlotKind>(storage: *mut u8) {
    ptr::drop_in_place(storage as *mut K::Stored)
}

/// # Safety
/// `src` holds a live `K::Stored`; `dst` is writable and uninitialized.
pub unsafe fn clone_slot<K>(src: *const u8, dst: *mut u8)
where
    K: SlotKind,
    K::Stored: Clone,
{
    let value = (*(src as *const K::Stored)).clone();
    ptr::write(dst as *mut K::Stored, value);
}

/// # Safety
/// Same as [`clone_slot`]. `src` keeps a live, moved-from value.
pub unsafe fn move_out_slot<K>(src: *mut u8, dst: *mut u8)
where
    K: SlotKind,
    K::Stored: MoveOut,
{
    let value = (*(src as *mut K::Stored)).move_out();
    ptr::write(dst as *mut K::Stored, value);
}

/// # Safety
/// `storage` holds a live `K::Stored`.
pub unsafe fn visit_slot<K, V, R>(storage: *const u8, visitor: V) -> R
where
    K: SlotKind,
    V: Visitor<K::Target, Output = R>,
{
    visitor.visit(K::project(&*(storage as *const K::Stored)))
}

/// # Safety
/// `storage` holds a live `K::Stored`.
pub unsafe fn visit_slot_mut<K, V, R>(storage: *mut u8, visitor: V) -> R
where
    K: SlotKind,
    V: VisitorMut<K::Target, Output = R>,
{
    visitor.visit_mut(K::project_mut(&mut *(storage as *mut K::Stored)))
}

/// # Safety
/// `storage` holds a live `K::Stored` that nobody else will drop; the value
/// is handed to the visitor.
pub unsafe fn visit_slot_once<K, V, R>(storage: *mut u8, visitor: V) -> R
where
    K: SlotKind,
    V: VisitorOnce<K::Target, Output = R>,
{
    let stored = ptr::read(storage as *const K::Stored);
    visitor.visit_once(K::unwrap(stored))
}
