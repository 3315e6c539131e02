//! Compact binary archives: arithmetic values as raw native-endian bytes,
//! aggregates field by field, no self-description.
//!
//! Reading is a `nom` parser over the whole input, writing goes through any
//! `byteorder::WriteBytesExt` sink.

pub mod binary_serialize;
pub mod error;

pub use binary_serialize::{take_bytes, Arithmetic, ArchiveResult, BinarySerializable};
pub use error::{corrupt_discriminant, ArchiveError, CORRUPT_DISCRIMINANT};

pub use byteorder;
pub use nom;
