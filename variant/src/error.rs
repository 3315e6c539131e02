use binary_archive::ArchiveError;
use std::io;
use thiserror::Error;

/// Typed access named an alternative that is not the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bad variant access: requested `{requested}` while `{active}` is active")]
pub struct BadAccess {
    pub requested: &'static str,
    pub active: &'static str,
}

/// A decoded discriminant does not name any alternative of the variant
/// being read at `offset`, which may be nested inside the outermost one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("corrupt variant data: discriminant {discriminant} at byte {offset}")]
pub struct CorruptData {
    pub discriminant: u32,
    pub offset: usize,
}

#[derive(Debug, Error)]
pub enum VariantError {
    #[error(transparent)]
    BadAccess(#[from] BadAccess),
    #[error(transparent)]
    CorruptData(#[from] CorruptData),
    #[error("malformed variant archive: {0}")]
    Malformed(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<ArchiveError> for VariantError {
    fn from(e: ArchiveError) -> Self {
        match e {
            ArchiveError::Io(e) => VariantError::Io(e),
            ArchiveError::CorruptDiscriminant {
                offset,
                discriminant,
            } => CorruptData {
                discriminant,
                offset,
            }
            .into(),
            other => VariantError::Malformed(other.to_string()),
        }
    }
}
