//! Comparison, hashing and text rendering built on visitation.
//!
//! Two variants holding different alternatives are never equal and order by
//! discriminant. Values of the same alternative compare with that
//! alternative's own operators.

use crate::access::VariantExt;
use crate::raw::{Alternative, VariantCore};
use crate::visit::{ApplyVisitor, Visitor};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

pub struct EqualTo<'a, Var> {
    pub other: &'a Var,
}

impl<'a, Var, T> Visitor<T> for EqualTo<'a, Var>
where
    Var: Alternative<T>,
    T: PartialEq,
{
    type Output = bool;

    fn visit(self, value: &T) -> bool {
        self.other.get_if::<T>().map_or(false, |other| value == other)
    }
}

pub struct CompareTo<'a, Var> {
    pub other: &'a Var,
}

impl<'a, Var, T> Visitor<T> for CompareTo<'a, Var>
where
    Var: Alternative<T>,
    T: PartialOrd,
{
    type Output = Option<Ordering>;

    fn visit(self, value: &T) -> Option<Ordering> {
        match self.other.get_if::<T>() {
            Some(other) => value.partial_cmp(other),
            None => Some(<Var as Alternative<T>>::INDEX.cmp(&self.other.which())),
        }
    }
}

pub struct TotalCompareTo<'a, Var> {
    pub other: &'a Var,
}

impl<'a, Var, T> Visitor<T> for TotalCompareTo<'a, Var>
where
    Var: Alternative<T>,
    T: Ord,
{
    type Output = Ordering;

    fn visit(self, value: &T) -> Ordering {
        match self.other.get_if::<T>() {
            Some(other) => value.cmp(other),
            None => <Var as Alternative<T>>::INDEX.cmp(&self.other.which()),
        }
    }
}

pub struct HashInto<'h, H> {
    pub state: &'h mut H,
}

impl<'h, H: Hasher, T: Hash> Visitor<T> for HashInto<'h, H> {
    type Output = ();

    fn visit(self, value: &T) {
        value.hash(self.state)
    }
}

/// Renders `Name(value)`.
pub struct DebugForward<'a, 'b> {
    pub name: &'static str,
    pub f: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b, T: fmt::Debug> Visitor<T> for DebugForward<'a, 'b> {
    type Output = fmt::Result;

    fn visit(self, value: &T) -> fmt::Result {
        self.f.debug_tuple(self.name).field(value).finish()
    }
}

pub struct DisplayForward<'a, 'b> {
    pub f: &'a mut fmt::Formatter<'b>,
}

impl<'a, 'b, T: fmt::Display> Visitor<T> for DisplayForward<'a, 'b> {
    type Output = fmt::Result;

    fn visit(self, value: &T) -> fmt::Result {
        fmt::Display::fmt(value, self.f)
    }
}

/// Writes the active value's `Display` rendering into any text sink.
pub struct Printer<'s, S: ?Sized> {
    pub sink: &'s mut S,
}

impl<'s, S, T> Visitor<T> for Printer<'s, S>
where
    S: fmt::Write + ?Sized,
    T: fmt::Display,
{
    type Output = fmt::Result;

    fn visit(self, value: &T) -> fmt::Result {
        write!(self.sink, "{}", value)
    }
}

pub fn eq<'a, Var>(lhs: &Var, rhs: &'a Var) -> bool
where
    Var: VariantCore + ApplyVisitor<EqualTo<'a, Var>, Output = bool>,
{
    lhs.which() == rhs.which() && lhs.apply_visitor(EqualTo { other: rhs })
}

pub fn partial_cmp<'a, Var>(lhs: &Var, rhs: &'a Var) -> Option<Ordering>
where
    Var: ApplyVisitor<CompareTo<'a, Var>, Output = Option<Ordering>>,
{
    lhs.apply_visitor(CompareTo { other: rhs })
}

pub fn cmp<'a, Var>(lhs: &Var, rhs: &'a Var) -> Ordering
where
    Var: ApplyVisitor<TotalCompareTo<'a, Var>, Output = Ordering>,
{
    lhs.apply_visitor(TotalCompareTo { other: rhs })
}

/// Feeds the discriminant, then the active value.
pub fn hash<'h, Var, H>(variant: &Var, state: &'h mut H)
where
    Var: VariantCore + ApplyVisitor<HashInto<'h, H>, Output = ()>,
    H: Hasher,
{
    variant.which().hash(state);
    variant.apply_visitor(HashInto { state })
}

pub fn debug<'a, 'b, Var>(
    variant: &Var,
    name: &'static str,
    f: &'a mut fmt::Formatter<'b>,
) -> fmt::Result
where
    Var: ApplyVisitor<DebugForward<'a, 'b>, Output = fmt::Result>,
{
    variant.apply_visitor(DebugForward { name, f })
}

pub fn display<'a, 'b, Var>(variant: &Var, f: &'a mut fmt::Formatter<'b>) -> fmt::Result
where
    Var: ApplyVisitor<DisplayForward<'a, 'b>, Output = fmt::Result>,
{
    variant.apply_visitor(DisplayForward { f })
}

pub fn print_to<'s, Var, S>(variant: &Var, sink: &'s mut S) -> fmt::Result
where
    Var: ApplyVisitor<Printer<'s, S>, Output = fmt::Result>,
    S: fmt::Write + ?Sized,
{
    variant.apply_visitor(Printer { sink })
}

/// Renders the active value verbatim. Fails only when the value's own
/// `Display` does.
pub fn print<Var>(variant: &Var) -> Result<String, fmt::Error>
where
    Var: for<'s> ApplyVisitor<Printer<'s, String>, Output = fmt::Result>,
{
    let mut out = String::new();
    print_to(variant, &mut out)?;
    Ok(out)
}
