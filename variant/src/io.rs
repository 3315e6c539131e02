//! Archive support.
//!
//! A variant is written as its discriminant (native-endian `u32`) followed by
//! the active value's own archive bytes. Nothing else is recorded, so a
//! reader must use the same alternative list in the same order as the
//! writer.

use crate::access::VariantExt;
use crate::error::VariantError;
use crate::raw::{Alternative, VariantCore};
use crate::visit::{ApplyVisitor, Visitor};
use binary_archive::byteorder::WriteBytesExt;
use binary_archive::{corrupt_discriminant, ArchiveError, ArchiveResult, BinarySerializable};
use std::io;

/// Reads the alternative at one discriminant.
pub type ReadFn<Var> = for<'a> fn(&'a [u8], &'a [u8]) -> ArchiveResult<'a, Var>;

pub struct Writer<'w, W: ?Sized> {
    pub sink: &'w mut W,
}

impl<'w, W, T> Visitor<T> for Writer<'w, W>
where
    W: WriteBytesExt,
    T: BinarySerializable,
{
    type Output = io::Result<()>;

    fn visit(self, value: &T) -> io::Result<()> {
        value.serialize(self.sink)
    }
}

pub fn write_discriminant<W: WriteBytesExt>(which: usize, sink: &mut W) -> io::Result<()> {
    (which as u32).serialize(sink)
}

pub fn write<'w, Var, W>(variant: &Var, sink: &'w mut W) -> io::Result<()>
where
    Var: VariantCore + ApplyVisitor<Writer<'w, W>, Output = io::Result<()>>,
    W: WriteBytesExt,
{
    write_discriminant(variant.which(), sink)?;
    variant.apply_visitor(Writer { sink })
}

pub fn read_alternative<'a, Var, T>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Var>
where
    Var: Alternative<T>,
    T: BinarySerializable,
{
    let (input, value) = T::deserialize(all_input, input)?;
    Ok((input, Var::from_alternative(value)))
}

/// Reads a discriminant and dispatches to its entry in `table`.
///
/// A discriminant past the end of `table` fails the whole parse, however
/// deeply the variant is nested.
pub fn decode_with<'a, Var>(
    all_input: &'a [u8],
    input: &'a [u8],
    table: &[ReadFn<Var>],
) -> ArchiveResult<'a, Var> {
    let (rest, discriminant) = u32::deserialize(all_input, input)?;
    match table.get(discriminant as usize) {
        Some(read) => read(all_input, rest),
        None => Err(corrupt_discriminant(input)),
    }
}

/// Decodes one variant from the front of `bytes` into `target` and returns
/// the unread rest. `target` is left untouched on failure.
pub fn read<'a, Var>(target: &mut Var, bytes: &'a [u8]) -> Result<&'a [u8], VariantError>
where
    Var: VariantCore + BinarySerializable,
{
    let (rest, value) =
        Var::deserialize(bytes, bytes).map_err(|e| ArchiveError::from_nom(bytes, e))?;
    *target = value;
    Ok(rest)
}

/// Decodes a variant that must span all of `bytes`.
pub fn from_bytes<Var>(bytes: &[u8]) -> Result<Var, VariantError>
where
    Var: VariantCore + BinarySerializable,
{
    Ok(Var::decode(bytes)?)
}

pub fn to_bytes<Var>(variant: &Var) -> Result<Vec<u8>, VariantError>
where
    Var: VariantCore + BinarySerializable,
{
    Ok(variant.encode()?)
}
