use std::marker::PhantomData;

/// Witness for "the head of the list".
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Here;

/// Witness for "somewhere in the tail, at `I`".
pub struct There<I>(PhantomData<I>);

/// Peano-style position carried by a witness type.
pub trait Index {
    const VALUE: usize;
}

impl Index for Here {
    const VALUE: usize = 0;
}

impl<I: Index> Index for There<I> {
    const VALUE: usize = 1 + I::VALUE;
}
