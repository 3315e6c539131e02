//! Closed tagged unions over a fixed list of alternative types.
//!
//! ```
//! use variant::prelude::*;
//!
//! #[variant(Debug, Clone, PartialEq)]
//! pub struct Value(i32, f64, String, i32);
//!
//! let mut v = Value::from(String::from("hello"));
//! assert_eq!(v.which(), 2);
//! assert_eq!(v.get::<String>().map(|s| s.as_str()), Ok("hello"));
//! assert!(v.get::<i32>().is_err());
//!
//! v.set(5.5);
//! assert_eq!(Value::alternative_count(), 3);
//! assert_eq!(v, Value::from(5.5));
//! ```
//!
//! `#[variant(...)]` takes the capabilities to implement for the variant:
//! `Debug`, `Display`, `Clone`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`,
//! `Hash`, `Default`, `MoveOut` and `BinarySerializable`. Each one requires
//! the same capability from every alternative. Repeated alternatives collapse
//! onto their first occurrence.
//!
//! Alternatives that contain the variant itself go through
//! [`RecursiveWrapper`]; access and visitation see the wrapped type.
//!
//! Declarations are checked when they are expanded. A variant cannot be
//! generic:
//!
//! ```compile_fail
//! #[variant::variant]
//! pub struct Either<A, B>(A, B);
//! ```
//!
//! a type cannot be listed both directly and through the wrapper:
//!
//! ```compile_fail
//! use variant::{variant, RecursiveWrapper};
//!
//! #[variant]
//! pub struct Twice(i32, RecursiveWrapper<i32>);
//! ```
//!
//! and every alternative must support each requested capability:
//!
//! ```compile_fail
//! use variant::variant;
//!
//! pub struct Opaque;
//!
//! #[variant(Clone)]
//! pub struct Holder(i32, Opaque);
//! ```

extern crate self as variant;

pub mod access;
pub mod dispatch;
pub mod error;
pub mod io;
pub mod move_out;
pub mod ops;
pub mod raw;
pub mod recursive;
pub mod slot;
pub mod visit;

pub use binary_archive as archive;
pub use type_list;
pub use variant_derive::variant;

pub use access::{get, get_mut, VariantExt};
pub use error::{BadAccess, CorruptData, VariantError};
pub use move_out::MoveOut;
pub use raw::{Alternative, VariantCore};
pub use recursive::RecursiveWrapper;
pub use visit::{
    apply, apply_mut, apply_once, ApplyVisitor, ApplyVisitorMut, ApplyVisitorOnce, Visitor,
    VisitorMut, VisitorOnce,
};

pub mod prelude {
    pub use crate::{
        apply, apply_mut, apply_once, Alternative, ApplyVisitor, ApplyVisitorMut,
        ApplyVisitorOnce, BadAccess, MoveOut, RecursiveWrapper, VariantCore, VariantExt, Visitor,
        VisitorMut, VisitorOnce,
    };
    pub use variant_derive::variant;
}
