//! Error type of the decoding core.

use pff_mapi::MapiError;
use thiserror::Error;

/// Errors raised by the decoding core.
///
/// Absence of an entry, name or identifier is not an error: lookups
/// return `Ok(None)` for well-formed not-found results.
#[derive(Debug, Error)]
pub enum Error {
    /// A typed accessor was used on an entry of a different value type.
    #[error("type mismatch: expected {expected}, got value type 0x{actual:04x}")]
    TypeMismatch { expected: &'static str, actual: u32 },

    /// The record entry identifier is not a MAPI property.
    #[error("record entry has no MAPI property identifier")]
    NotMapiProperty,

    /// A scalar accessor was used on an entry without value data.
    #[error("record entry has no value data")]
    MissingValueData,

    /// `read` was called on item values whose table was already built.
    #[error("item values table already read")]
    TableAlreadyRead,

    /// The operation requires a materialised item values table.
    #[error("item values table not read")]
    TableNotRead,

    #[error("record set index {0} out of bounds")]
    RecordSetIndex(usize),

    #[error("record entry index {0} out of bounds")]
    RecordEntryIndex(usize),

    /// A record entry the format requires is absent.
    #[error("missing record entry: 0x{0:04x}")]
    MissingEntry(u32),

    /// An attachment with method NONE carries a data object entry; the
    /// combination is undefined.
    #[error("attachment method NONE with attachment data present")]
    UnexpectedAttachmentData,

    #[error("attached file not open")]
    NotOpen,

    #[error("attached file already open")]
    AlreadyOpen,

    /// Open flags other than read access were requested.
    #[error("unsupported access flags")]
    UnsupportedAccessFlags,

    #[error("no {0} access on attached file")]
    AccessDenied(&'static str),

    /// A seek would move the offset outside `[0, size]`.
    #[error("seek offset {0} out of bounds")]
    SeekOutOfBounds(i64),

    #[error("buffer size {0} exceeds maximum")]
    BufferSizeExceedsMaximum(usize),

    #[error("unsupported attachment method: 0x{0:08x}")]
    UnsupportedAttachmentMethod(u32),

    /// The attachment data object carries a value type outside the
    /// combinations the format permits.
    #[error("unsupported attachment data value type: 0x{0:04x}")]
    UnsupportedAttachmentValueType(u32),

    /// An identifier referenced from a value is absent from the local
    /// descriptors tree.
    #[error("missing local descriptor: {0}")]
    MissingLocalDescriptor(u32),

    /// An attachment node must hold exactly one embedded sub item.
    #[error("attachment node has {0} sub nodes, expected exactly one")]
    EmbeddedItemNodes(usize),

    /// Numeric name-to-id map values are unique within a container.
    #[error("duplicate numeric name-to-id map entry: 0x{0:04x}")]
    DuplicateNameToIdMapEntry(u32),

    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    #[error(transparent)]
    Mapi(#[from] MapiError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
