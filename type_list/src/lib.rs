//! Compile-time algebra over ordered lists of types.
//!
//! Lists are built from [`TCons`]/[`TNil`] (usually through [`tlist!`]).
//! Positions are resolved by the trait system through inferred witnesses, so
//! asking for a type that is not a member, or that is a member twice, fails to
//! compile rather than at runtime.
//!
//! ```
//! use type_list::{assert_same, index_of, tlist, Here, Nth, There};
//!
//! type L = tlist![char, i32, f64];
//! assert_eq!(index_of::<L, f64, _>(), 2);
//! assert_same::<Nth<L, There<Here>>, i32>();
//! ```
//!
//! ```compile_fail
//! use type_list::{index_of, tlist};
//!
//! // `u8` is not a member
//! index_of::<tlist![char, i32], u8, _>();
//! ```
//!
//! ```compile_fail
//! use type_list::{index_of, tlist};
//!
//! // `i32` occurs twice, its position is ambiguous
//! index_of::<tlist![i32, char, i32], i32, _>();
//! ```

pub mod index;
pub mod list;

pub use index::{Here, Index, There};
pub use list::{At, Find, Nth, Same, TCons, TNil, TypeList};

#[macro_export]
macro_rules! tlist {
    [] => [$crate::TNil];
    [$head:ty $(, $tail:ty)* $(,)?] => [$crate::TCons<$head, $crate::tlist![$($tail),*]>];
}

pub fn len<L: TypeList>() -> usize {
    L::LEN
}

pub fn index_of<L, T, I>() -> usize
where
    L: Find<T, I>,
{
    L::INDEX
}

/// Compiles only when `A` and `B` are the same type.
pub fn assert_same<A: ?Sized + Same<B>, B: ?Sized>() {}
