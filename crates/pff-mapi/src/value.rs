//! Typed property values.

use crate::{FileTime, FloatingTime, Guid, MapiError, ValueType, string};

/// Converts value data into a 32-bit value.
///
/// The value data size of a 32-bit value is 4.
pub fn copy_to_u32(value_data: &[u8]) -> Result<u32, MapiError> {
    if value_data.len() != size_of::<u32>() {
        return Err(MapiError::UnsupportedValueSize {
            expected: size_of::<u32>(),
            actual: value_data.len(),
        });
    }
    let mut bytes = [0u8; size_of::<u32>()];
    bytes.copy_from_slice(value_data);
    Ok(u32::from_le_bytes(bytes))
}

/// Converts value data into a 64-bit value.
///
/// The value data size of a 64-bit value is 8.
pub fn copy_to_u64(value_data: &[u8]) -> Result<u64, MapiError> {
    if value_data.len() != size_of::<u64>() {
        return Err(MapiError::UnsupportedValueSize {
            expected: size_of::<u64>(),
            actual: value_data.len(),
        });
    }
    let mut bytes = [0u8; size_of::<u64>()];
    bytes.copy_from_slice(value_data);
    Ok(u64::from_le_bytes(bytes))
}

/// Converts value data into a 16-bit value.
pub fn copy_to_u16(value_data: &[u8]) -> Result<u16, MapiError> {
    if value_data.len() != size_of::<u16>() {
        return Err(MapiError::UnsupportedValueSize {
            expected: size_of::<u16>(),
            actual: value_data.len(),
        });
    }
    let mut bytes = [0u8; size_of::<u16>()];
    bytes.copy_from_slice(value_data);
    Ok(u16::from_le_bytes(bytes))
}

/// Determines the binary data size of a value; a `None` buffer is empty.
pub fn binary_data_size(value_data: Option<&[u8]>) -> usize {
    value_data.map_or(0, <[u8]>::len)
}

/// Copies the value data into a caller buffer, which must be large enough.
pub fn copy_to_binary_data(value_data: Option<&[u8]>, binary_data: &mut [u8]) -> Result<usize, MapiError> {
    let Some(value_data) = value_data else {
        return Ok(0);
    };
    if binary_data.len() < value_data.len() {
        return Err(MapiError::UnsupportedValueSize {
            expected: value_data.len(),
            actual: binary_data.len(),
        });
    }
    binary_data[..value_data.len()].copy_from_slice(value_data);
    Ok(value_data.len())
}

/// A decoded property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer16(i16),
    Integer32(i32),
    Integer64(i64),
    Floating32(f32),
    Floating64(f64),
    /// A fixed-point currency amount: the stored integer scaled by 10^-4.
    Currency(i64),
    FloatingTime(FloatingTime),
    FileTime(FileTime),
    ErrorCode(u32),
    /// An extended-ASCII string, transcoded from the container codepage.
    String8(String),
    /// A UTF-16 little-endian string.
    Unicode(String),
    Binary(Vec<u8>),
    Guid(Guid),
    /// A reference to an external stream; the identifier names the
    /// local descriptor holding the stream data.
    Object { identifier: u32 },
    /// A multi-valued property, kept raw; the value type is the base
    /// (single-value) type of the elements.
    Multi { value_type: ValueType, data: Vec<u8> },
    /// A property with a value type code outside MS-OXCDATA; the code
    /// and bytes round-trip untouched.
    Unknown { value_type: u32, data: Vec<u8> },
}

impl Value {
    /// Decodes value data under a raw value type code and codepage.
    ///
    /// A `None` buffer decodes to the empty rendition of variable-width
    /// types and is a size error for fixed-width scalars.
    pub fn parse(
        value_type: u32,
        value_data: Option<&[u8]>,
        ascii_codepage: u32,
    ) -> Result<Value, MapiError> {
        if ValueType::is_multi_value(value_type) {
            return Ok(Value::Multi {
                value_type: ValueType::from_u32(ValueType::base_of(value_type)),
                data: value_data.unwrap_or_default().to_vec(),
            });
        }
        let data = value_data.unwrap_or_default();
        match ValueType::from_u32(value_type) {
            ValueType::Unspecified | ValueType::Null => Ok(Value::Null),
            ValueType::Boolean => {
                if data.len() != 1 {
                    return Err(MapiError::UnsupportedValueSize {
                        expected: 1,
                        actual: data.len(),
                    });
                }
                Ok(Value::Boolean(data[0] != 0))
            }
            ValueType::Integer16 => Ok(Value::Integer16(copy_to_u16(data)? as i16)),
            ValueType::Integer32 => Ok(Value::Integer32(copy_to_u32(data)? as i32)),
            ValueType::Integer64 => Ok(Value::Integer64(copy_to_u64(data)? as i64)),
            ValueType::Floating32 => Ok(Value::Floating32(f32::from_bits(copy_to_u32(data)?))),
            ValueType::Floating64 => Ok(Value::Floating64(f64::from_bits(copy_to_u64(data)?))),
            ValueType::Currency => Ok(Value::Currency(copy_to_u64(data)? as i64)),
            ValueType::FloatingTime => Ok(Value::FloatingTime(FloatingTime::new(f64::from_bits(
                copy_to_u64(data)?,
            )))),
            ValueType::FileTime => Ok(Value::FileTime(FileTime::new(copy_to_u64(data)?))),
            ValueType::ErrorCode => Ok(Value::ErrorCode(copy_to_u32(data)?)),
            ValueType::String8 => Ok(Value::String8(string::decode_utf8_string(
                value_data,
                true,
                ascii_codepage,
            )?)),
            ValueType::Unicode => Ok(Value::Unicode(string::decode_utf8_string(
                value_data,
                false,
                ascii_codepage,
            )?)),
            ValueType::Guid => Ok(Value::Guid(Guid::from_bytes(data)?)),
            ValueType::Object => {
                // The first 4 bytes name the referenced descriptor.
                Ok(Value::Object {
                    identifier: copy_to_u32(data.get(..4).unwrap_or(data))?,
                })
            }
            ValueType::ServerId | ValueType::Restriction | ValueType::RuleAction
            | ValueType::Binary => Ok(Value::Binary(data.to_vec())),
            ValueType::Unknown(code) => Ok(Value::Unknown {
                value_type: code,
                data: data.to_vec(),
            }),
        }
    }
}
