use crate::slot::SlotKind;
use std::mem::MaybeUninit;
use type_list::TypeList;

/// Tagged storage of a variant type.
///
/// Implemented by the `#[variant]` attribute. The alternatives are numbered
/// by their first position in the declaration; `which()` is always a valid
/// index and the storage always holds one live value of that alternative's
/// stored type.
pub unsafe trait VariantCore: Sized {
    /// Deduplicated stored types, in discriminant order.
    type Alternatives: TypeList;
    /// Union of every alternative's stored type.
    type Storage;
    /// Alternative names as written in the declaration.
    const NAMES: &'static [&'static str];

    fn which(&self) -> usize;

    fn storage(&self) -> *const u8;

    fn storage_mut(&mut self) -> *mut u8;

    /// # Safety
    /// `which` must be below `alternative_count()` and `storage` must hold an
    /// initialized value of that alternative's stored type.
    unsafe fn from_raw_parts(which: usize, storage: MaybeUninit<Self::Storage>) -> Self;

    /// Takes the parts apart without running the destructor. The caller
    /// becomes the owner of the active value.
    fn into_raw_parts(self) -> (usize, MaybeUninit<Self::Storage>);

    fn alternative_count() -> usize {
        <Self::Alternatives as TypeList>::LEN
    }

    fn active_name(&self) -> &'static str {
        Self::NAMES[self.which()]
    }
}

/// `T` is the target of one alternative of `Self`.
///
/// Only implemented for members of the alternative list, so naming any other
/// type is a compile error.
pub unsafe trait Alternative<T>: VariantCore {
    type Kind: SlotKind<Target = T>;
    const INDEX: usize;
}
