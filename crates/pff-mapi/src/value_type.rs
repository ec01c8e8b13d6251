//! MAPI property value type codes.
//!
//! [MS-OXCDATA 2.11.1](<https://learn.microsoft.com/en-us/openspecs/exchange_server_protocols/ms-oxcdata/0c77892e-288e-435a-9c49-be1c20c7afdb>)

/// A property value type.
///
/// The on-disk code is a `u32`; bit 0x1000 marks a multi-valued property
/// and is stripped with [`ValueType::base_of`] before conversion. The
/// conversion is total: codes outside MS-OXCDATA round-trip through
/// [`ValueType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `PtypUnspecified`: the type is to be taken from context.
    Unspecified,
    /// `PtypNull`: no value.
    Null,
    /// `PtypInteger16`: 2-byte signed integer.
    Integer16,
    /// `PtypInteger32`: 4-byte signed integer.
    Integer32,
    /// `PtypFloating32`: 4-byte IEEE 754 value.
    Floating32,
    /// `PtypFloating64`: 8-byte IEEE 754 value.
    Floating64,
    /// `PtypCurrency`: 8-byte signed integer scaled by 10^-4.
    Currency,
    /// `PtypFloatingTime`: 8-byte IEEE 754 count of days since 1899-12-30.
    FloatingTime,
    /// `PtypErrorCode`: 4-byte SCODE.
    ErrorCode,
    /// `PtypBoolean`: 1-byte, any non-zero value is `true`.
    Boolean,
    /// `PtypObject`: the value references an external stream.
    Object,
    /// `PtypInteger64`: 8-byte signed integer.
    Integer64,
    /// `PtypString8`: codepage-dependent string.
    String8,
    /// `PtypString`: UTF-16 little-endian string.
    Unicode,
    /// `PtypTime`: 8-byte count of 100ns ticks since 1601-01-01 UTC.
    FileTime,
    /// `PtypGuid`: 16-byte GUID.
    Guid,
    /// `PtypServerId`: length-prefixed server identifier blob.
    ServerId,
    /// `PtypRestriction`: serialized restriction structure.
    Restriction,
    /// `PtypRuleAction`: serialized rule action array.
    RuleAction,
    /// `PtypBinary`: raw byte buffer.
    Binary,
    /// A code outside the ones defined by MS-OXCDATA, kept verbatim.
    Unknown(u32),
}

impl ValueType {
    /// The multi-valued property flag (`PtypMultiple*`).
    pub const MULTI_VALUE_FLAG: u32 = 0x1000;

    /// Strips the multi-value flag off a raw value type code.
    pub const fn base_of(raw: u32) -> u32 {
        raw & !Self::MULTI_VALUE_FLAG
    }

    /// Whether the raw value type code has the multi-value flag set.
    pub const fn is_multi_value(raw: u32) -> bool {
        raw & Self::MULTI_VALUE_FLAG != 0
    }

    /// Converts a raw value type code; never fails.
    pub const fn from_u32(raw: u32) -> Self {
        match raw {
            0x0000 => ValueType::Unspecified,
            0x0001 => ValueType::Null,
            0x0002 => ValueType::Integer16,
            0x0003 => ValueType::Integer32,
            0x0004 => ValueType::Floating32,
            0x0005 => ValueType::Floating64,
            0x0006 => ValueType::Currency,
            0x0007 => ValueType::FloatingTime,
            0x000A => ValueType::ErrorCode,
            0x000B => ValueType::Boolean,
            0x000D => ValueType::Object,
            0x0014 => ValueType::Integer64,
            0x001E => ValueType::String8,
            0x001F => ValueType::Unicode,
            0x0040 => ValueType::FileTime,
            0x0048 => ValueType::Guid,
            0x00FB => ValueType::ServerId,
            0x00FD => ValueType::Restriction,
            0x00FE => ValueType::RuleAction,
            0x0102 => ValueType::Binary,
            other => ValueType::Unknown(other),
        }
    }

    pub const fn to_u32(self) -> u32 {
        match self {
            ValueType::Unspecified => 0x0000,
            ValueType::Null => 0x0001,
            ValueType::Integer16 => 0x0002,
            ValueType::Integer32 => 0x0003,
            ValueType::Floating32 => 0x0004,
            ValueType::Floating64 => 0x0005,
            ValueType::Currency => 0x0006,
            ValueType::FloatingTime => 0x0007,
            ValueType::ErrorCode => 0x000A,
            ValueType::Boolean => 0x000B,
            ValueType::Object => 0x000D,
            ValueType::Integer64 => 0x0014,
            ValueType::String8 => 0x001E,
            ValueType::Unicode => 0x001F,
            ValueType::FileTime => 0x0040,
            ValueType::Guid => 0x0048,
            ValueType::ServerId => 0x00FB,
            ValueType::Restriction => 0x00FD,
            ValueType::RuleAction => 0x00FE,
            ValueType::Binary => 0x0102,
            ValueType::Unknown(raw) => raw,
        }
    }

    /// The serialized width of a fixed-width scalar, `None` for
    /// variable-width, reference and unknown types.
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            ValueType::Boolean => Some(1),
            ValueType::Integer16 => Some(2),
            ValueType::Integer32 | ValueType::Floating32 | ValueType::ErrorCode => Some(4),
            ValueType::Integer64
            | ValueType::Floating64
            | ValueType::Currency
            | ValueType::FloatingTime
            | ValueType::FileTime => Some(8),
            ValueType::Guid => Some(16),
            _ => None,
        }
    }
}

impl From<u32> for ValueType {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}
