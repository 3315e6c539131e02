use crate::error::ArchiveError;
use byteorder::WriteBytesExt;
use nom::bytes::complete::take;
use nom::error::{ErrorKind, ParseError, VerboseError};
use nom::IResult;
use num::Float;
use ordered_float::OrderedFloat;
use std::io::Error;
use std::mem::size_of;

pub type ArchiveResult<'a, T> = IResult<&'a [u8], T, VerboseError<&'a [u8]>>;

/// Longest sequence accepted when its items occupy no archive bytes.
pub const MAX_ZERO_WIDTH_ITEMS: u64 = 1 << 20;

pub fn take_bytes(input: &[u8], count: usize) -> ArchiveResult<'_, &[u8]> {
    take(count)(input)
}

/// Values archived as their raw native-endian bit pattern.
pub trait Arithmetic: Sized + Copy {
    const SIZE: usize = size_of::<Self>();

    /// `bytes` is exactly `SIZE` long.
    fn from_ne_slice(bytes: &[u8]) -> Self;
    fn write_ne<W: WriteBytesExt>(&self, wrt: &mut W) -> Result<(), Error>;
}

macro_rules! arithmetic_impl {
    ($($name:ty),*) => {
        $(impl Arithmetic for $name {
            fn from_ne_slice(bytes: &[u8]) -> Self {
                let mut raw = [0u8; size_of::<$name>()];
                raw.copy_from_slice(bytes);
                <$name>::from_ne_bytes(raw)
            }

            fn write_ne<W: WriteBytesExt>(&self, wrt: &mut W) -> Result<(), Error> {
                wrt.write_all(&self.to_ne_bytes())
            }
        }

        impl BinarySerializable for $name {
            fn deserialize<'a>(_: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
                let (input, raw) = take_bytes(input, <$name as Arithmetic>::SIZE)?;
                Ok((input, <$name as Arithmetic>::from_ne_slice(raw)))
            }

            fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
            where
                W: WriteBytesExt,
            {
                self.write_ne(wrt)
            }
        })*
    };
}

arithmetic_impl!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize, f32, f64);

pub trait BinarySerializable {
    /// `all_input` is the whole archive, `input` the unread suffix of it.
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self>
    where
        Self: Sized;

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt;

    fn make_verbose_error<'a>(
        input: &'a [u8],
        kind: ErrorKind,
        ctx: &'static str,
    ) -> nom::Err<VerboseError<&'a [u8]>> {
        let verbose = VerboseError::from_error_kind(input, kind);
        let verbose = VerboseError::add_context(input, ctx, verbose);
        nom::Err::Error(verbose)
    }

    fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut v = Vec::new();
        self.serialize(&mut v)?;
        Ok(v)
    }

    /// Decodes one value that must span the whole of `input`.
    fn decode(input: &[u8]) -> Result<Self, ArchiveError>
    where
        Self: Sized,
    {
        match Self::deserialize(input, input) {
            Ok((rest, v)) if rest.is_empty() => Ok(v),
            Ok((rest, _)) => Err(ArchiveError::TrailingBytes(rest.len())),
            Err(e) => Err(ArchiveError::from_nom(input, e)),
        }
    }
}

impl BinarySerializable for () {
    fn deserialize<'a>(_: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        Ok((input, ()))
    }

    fn serialize<W>(&self, _: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        Ok(())
    }
}

impl BinarySerializable for bool {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let (rest, raw) = u8::deserialize(all_input, input)?;
        match raw {
            0 => Ok((rest, false)),
            1 => Ok((rest, true)),
            _ => Err(Self::make_verbose_error(input, ErrorKind::Verify, "invalid bool")),
        }
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        wrt.write_u8(*self as u8)
    }
}

impl BinarySerializable for char {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let (rest, raw) = u32::deserialize(all_input, input)?;
        std::char::from_u32(raw)
            .map(|c| (rest, c))
            .ok_or_else(|| Self::make_verbose_error(input, ErrorKind::Verify, "invalid char"))
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        (*self as u32).serialize(wrt)
    }
}

impl BinarySerializable for String {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let (rest, len) = u64::deserialize(all_input, input)?;
        let (rest, raw) = take_bytes(rest, len as usize)?;
        match std::str::from_utf8(raw) {
            Ok(s) => Ok((rest, s.to_owned())),
            Err(_) => Err(Self::make_verbose_error(
                input,
                ErrorKind::Verify,
                "invalid utf-8 in string",
            )),
        }
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        (self.len() as u64).serialize(wrt)?;
        wrt.write_all(self.as_bytes())
    }
}

impl<T: BinarySerializable> BinarySerializable for Vec<T> {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let start = input;
        let (mut input, len) = u64::deserialize(all_input, input)?;
        // a corrupt length must not turn into a huge allocation
        let mut items = Vec::with_capacity((len as usize).min(input.len()));
        for _ in 0..len {
            let (rest, item) = T::deserialize(all_input, input)?;
            if rest.len() == input.len() && len > MAX_ZERO_WIDTH_ITEMS {
                return Err(Self::make_verbose_error(
                    start,
                    ErrorKind::Verify,
                    "sequence of zero-width items is too long",
                ));
            }
            items.push(item);
            input = rest;
        }
        Ok((input, items))
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        (self.len() as u64).serialize(wrt)?;
        self.iter().try_for_each(|item| item.serialize(wrt))
    }
}

impl<T: BinarySerializable> BinarySerializable for Option<T> {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let (rest, tag) = u8::deserialize(all_input, input)?;
        match tag {
            0 => Ok((rest, None)),
            1 => T::deserialize(all_input, rest).map(|(rest, v)| (rest, Some(v))),
            _ => Err(Self::make_verbose_error(input, ErrorKind::Verify, "invalid option tag")),
        }
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        match self {
            None => wrt.write_u8(0),
            Some(v) => {
                wrt.write_u8(1)?;
                v.serialize(wrt)
            }
        }
    }
}

impl<T: BinarySerializable> BinarySerializable for Box<T> {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let (input, value) = T::deserialize(all_input, input)?;
        Ok((input, Box::new(value)))
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        self.as_ref().serialize(wrt)
    }
}

impl<T: BinarySerializable, U: BinarySerializable> BinarySerializable for (T, U) {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let (input, t) = T::deserialize(all_input, input)?;
        let (input, u) = U::deserialize(all_input, input)?;
        Ok((input, (t, u)))
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        self.0.serialize(wrt)?;
        self.1.serialize(wrt)
    }
}

impl<T: BinarySerializable + Float> BinarySerializable for OrderedFloat<T> {
    fn deserialize<'a>(all_input: &'a [u8], input: &'a [u8]) -> ArchiveResult<'a, Self> {
        let (input, f) = T::deserialize(all_input, input)?;
        Ok((input, OrderedFloat::from(f)))
    }

    fn serialize<W>(&self, wrt: &mut W) -> Result<(), Error>
    where
        W: WriteBytesExt,
    {
        self.0.serialize(wrt)
    }
}
