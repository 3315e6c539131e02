//! Visitation of the active alternative.
//!
//! A visitor implements one of the visitor traits for every alternative
//! target with a single common `Output`. The `#[variant]` attribute then
//! provides the matching `Apply*` impl, which dispatches through a table
//! built once per (variant, visitor) pair.
//!
//! ```
//! use variant::{apply, variant, Visitor};
//!
//! #[variant]
//! pub struct Number(i32, f64);
//!
//! struct Kind;
//!
//! impl Visitor<i32> for Kind {
//!     type Output = &'static str;
//!     fn visit(self, _: &i32) -> &'static str {
//!         "int"
//!     }
//! }
//!
//! impl Visitor<f64> for Kind {
//!     type Output = &'static str;
//!     fn visit(self, _: &f64) -> &'static str {
//!         "double"
//!     }
//! }
//!
//! assert_eq!(apply(&Number::from(5.5), Kind), "double");
//! ```

pub trait Visitor<T> {
    type Output;

    fn visit(self, value: &T) -> Self::Output;
}

pub trait VisitorMut<T> {
    type Output;

    fn visit_mut(self, value: &mut T) -> Self::Output;
}

/// Consumes the active value of a transient variant.
pub trait VisitorOnce<T> {
    type Output;

    fn visit_once(self, value: T) -> Self::Output;
}

pub trait ApplyVisitor<V> {
    type Output;

    fn apply_visitor(&self, visitor: V) -> Self::Output;
}

pub trait ApplyVisitorMut<V> {
    type Output;

    fn apply_visitor_mut(&mut self, visitor: V) -> Self::Output;
}

pub trait ApplyVisitorOnce<V> {
    type Output;

    fn apply_visitor_once(self, visitor: V) -> Self::Output;
}

pub fn apply<Var, V>(variant: &Var, visitor: V) -> <Var as ApplyVisitor<V>>::Output
where
    Var: ApplyVisitor<V>,
{
    variant.apply_visitor(visitor)
}

pub fn apply_mut<Var, V>(variant: &mut Var, visitor: V) -> <Var as ApplyVisitorMut<V>>::Output
where
    Var: ApplyVisitorMut<V>,
{
    variant.apply_visitor_mut(visitor)
}

pub fn apply_once<Var, V>(variant: Var, visitor: V) -> <Var as ApplyVisitorOnce<V>>::Output
where
    Var: ApplyVisitorOnce<V>,
{
    variant.apply_visitor_once(visitor)
}
