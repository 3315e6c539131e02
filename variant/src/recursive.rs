use crate::move_out::MoveOut;
use binary_archive::byteorder::WriteBytesExt;
use binary_archive::{ArchiveResult, BinarySerializable};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Heap indirection that lets an alternative mention a type containing the
/// variant itself.
///
/// The wrapper is the sole owner of its pointee and has value semantics:
/// cloning deep-copies, comparison and hashing look through to the pointee.
/// Access and visitation of a variant never expose the wrapper, only `T`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecursiveWrapper<T>(Box<T>);

impl<T> RecursiveWrapper<T> {
    pub fn new(value: T) -> Self {
        RecursiveWrapper(Box::new(value))
    }

    pub fn get(&self) -> &T {
        &self.0
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }

    pub fn into_inner(self) -> T {
        *self.0
    }
}

impl<T> From<T> for RecursiveWrapper<T> {
    fn from(value: T) -> Self {
        RecursiveWrapper::new(value)
    }
}

impl<T> Deref for RecursiveWrapper<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.get()
    }
}

impl<T> DerefMut for RecursiveWrapper<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.get_mut()
    }
}

impl<T> AsRef<T> for RecursiveWrapper<T> {
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for RecursiveWrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.get(), f)
    }
}

impl<T: fmt::Display> fmt::Display for RecursiveWrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.get(), f)
    }
}

/// The pointee's moved-from state stays behind, its value goes to a fresh
/// allocation.
impl<T: MoveOut> MoveOut for RecursiveWrapper<T> {
    fn move_out(&mut self) -> Self {
        RecursiveWrapper::new(self.get_mut().move_out())
    }
}

impl<T: BinarySerializable> BinarySerializable for RecursiveWrapper<T> {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let (input, value) = T::deserialize(all_input, input)?;
        Ok((input, RecursiveWrapper::new(value)))
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), std::io::Error>
    where
        W: WriteBytesExt,
    {
        self.get().serialize(wrt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tree {
        label: String,
        children: Vec<RecursiveWrapper<Tree>>,
    }

    #[test]
    fn clone_is_deep() {
        let leaf = Tree {
            label: "leaf".into(),
            children: vec![],
        };
        let original = RecursiveWrapper::new(Tree {
            label: "root".into(),
            children: vec![leaf.into()],
        });
        let mut copy = original.clone();
        copy.children[0].label.push('!');

        assert_eq!(original.children[0].label, "leaf");
        assert_eq!(copy.children[0].label, "leaf!");
        assert_ne!(original, copy);
    }

    #[test]
    fn move_out_leaves_emptied_pointee() {
        let mut source = RecursiveWrapper::new(String::from("moved"));
        let target = source.move_out();
        assert_eq!(target.get(), "moved");
        assert_eq!(source.get(), "");
    }

    #[test]
    fn formatting_looks_through() {
        let wrapped = RecursiveWrapper::new(42);
        assert_eq!(format!("{}", wrapped), "42");
        assert_eq!(format!("{:?}", wrapped), "42");
        assert_eq!(wrapped.into_inner(), 42);
    }

    #[test]
    fn archive_is_the_pointee_archive() {
        let wrapped = RecursiveWrapper::new(7u16);
        let bytes = wrapped.encode().unwrap();
        assert_eq!(bytes, 7u16.encode().unwrap());
        assert_eq!(RecursiveWrapper::<u16>::decode(&bytes).unwrap(), wrapped);
    }
}
