use crate::binary_serialize::Arithmetic;
use nom::error::{ErrorKind, ParseError, VerboseError, VerboseErrorKind};
use thiserror::Error;

/// Context marking a tagged-union discriminant that names no alternative.
pub const CORRUPT_DISCRIMINANT: &str = "discriminant out of range";

/// Fails the parse at `input`, which must start at the `u32` discriminant
/// just read. The failure is not recoverable by alternation.
pub fn corrupt_discriminant(input: &[u8]) -> nom::Err<VerboseError<&[u8]>> {
    let error = VerboseError::from_error_kind(input, ErrorKind::Verify);
    nom::Err::Failure(VerboseError::add_context(input, CORRUPT_DISCRIMINANT, error))
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("malformed archive at byte {offset}: {context}")]
    Malformed { offset: usize, context: String },
    #[error("discriminant {discriminant} at byte {offset} names no alternative")]
    CorruptDiscriminant { offset: usize, discriminant: u32 },
    #[error("archive ended before the value was complete")]
    Incomplete,
    #[error("{0} bytes left over after decoding")]
    TrailingBytes(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ArchiveError {
    /// Flattens a parser error raised while reading `all_input`.
    pub fn from_nom(all_input: &[u8], err: nom::Err<VerboseError<&[u8]>>) -> Self {
        let verbose = match err {
            nom::Err::Incomplete(_) => return ArchiveError::Incomplete,
            nom::Err::Error(e) | nom::Err::Failure(e) => e,
        };
        let offset_of = |rest: &[u8]| all_input.len().saturating_sub(rest.len());

        let corrupt = verbose.errors.iter().find_map(|(rest, kind)| match kind {
            VerboseErrorKind::Context(ctx) if *ctx == CORRUPT_DISCRIMINANT => Some(*rest),
            _ => None,
        });
        if let Some(rest) = corrupt {
            if let Some(raw) = rest.get(..<u32 as Arithmetic>::SIZE) {
                return ArchiveError::CorruptDiscriminant {
                    offset: offset_of(rest),
                    discriminant: u32::from_ne_slice(raw),
                };
            }
        }

        let ran_dry = verbose
            .errors
            .iter()
            .any(|(_, kind)| matches!(kind, VerboseErrorKind::Nom(ErrorKind::Eof)));
        if ran_dry {
            return ArchiveError::Incomplete;
        }

        let offset = verbose
            .errors
            .first()
            .map(|(rest, _)| offset_of(rest))
            .unwrap_or(0);
        let context = verbose
            .errors
            .iter()
            .rev()
            .find_map(|(_, kind)| match kind {
                VerboseErrorKind::Context(ctx) => Some((*ctx).to_owned()),
                _ => None,
            })
            .or_else(|| {
                verbose.errors.first().map(|(_, kind)| match kind {
                    VerboseErrorKind::Nom(k) => k.description().to_owned(),
                    VerboseErrorKind::Char(c) => format!("expected '{}'", c),
                    VerboseErrorKind::Context(ctx) => (*ctx).to_owned(),
                })
            })
            .unwrap_or_default();

        ArchiveError::Malformed { offset, context }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_means_incomplete() {
        let all = [1u8, 2, 3];
        let err = nom::Err::Error(VerboseError::from_error_kind(&all[3..], ErrorKind::Eof));
        assert!(matches!(ArchiveError::from_nom(&all, err), ArchiveError::Incomplete));
    }

    #[test]
    fn malformed_reports_offset_and_context() {
        let all = [1u8, 2, 3];
        let inner = VerboseError::from_error_kind(&all[2..], ErrorKind::Verify);
        let err = nom::Err::Failure(VerboseError::add_context(&all[2..], "bad tag", inner));
        match ArchiveError::from_nom(&all, err) {
            ArchiveError::Malformed { offset, context } => {
                assert_eq!(offset, 2);
                assert_eq!(context, "bad tag");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn corrupt_discriminant_keeps_value_and_offset() {
        let mut all = 1u32.to_ne_bytes().to_vec();
        all.extend_from_slice(&9u32.to_ne_bytes());
        // outer context added while the failure propagates
        let inner = corrupt_discriminant(&all[4..]);
        let err = match inner {
            nom::Err::Failure(e) => {
                nom::Err::Failure(VerboseError::add_context(&all[..], "outer", e))
            }
            other => other,
        };
        match ArchiveError::from_nom(&all, err) {
            ArchiveError::CorruptDiscriminant {
                offset,
                discriminant,
            } => {
                assert_eq!(offset, 4);
                assert_eq!(discriminant, 9);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
