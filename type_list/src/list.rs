use crate::index::{Here, Index, There};
use std::marker::PhantomData;

/// Empty list.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TNil;

/// Non-empty list node. Never instantiated, only named.
pub struct TCons<H, T>(PhantomData<(H, T)>);

pub trait TypeList {
    const LEN: usize;
}

impl TypeList for TNil {
    const LEN: usize = 0;
}

impl<H, T: TypeList> TypeList for TCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Membership of `T` together with its zero-based position.
///
/// `I` is a witness (`Here`, `There<Here>`, ...) and is always left to
/// inference. A type that is absent has no impl; a type that occurs twice has
/// two candidate witnesses and inference fails. Both are compile errors.
pub trait Find<T, I>: TypeList {
    const INDEX: usize;
}

impl<T, Tail: TypeList> Find<T, Here> for TCons<T, Tail> {
    const INDEX: usize = 0;
}

impl<H, T, Tail, I> Find<T, There<I>> for TCons<H, Tail>
where
    Tail: Find<T, I>,
{
    const INDEX: usize = 1 + <Tail as Find<T, I>>::INDEX;
}

/// Element lookup by witness, the dual of [`Find`].
pub trait At<I: Index> {
    type Output;
}

impl<H, Tail> At<Here> for TCons<H, Tail> {
    type Output = H;
}

impl<H, Tail, I> At<There<I>> for TCons<H, Tail>
where
    I: Index,
    Tail: At<I>,
{
    type Output = <Tail as At<I>>::Output;
}

pub type Nth<L, I> = <L as At<I>>::Output;

/// Type equality as a bound: `A: Same<B>` holds only when `A` is `B`.
pub trait Same<T: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}
