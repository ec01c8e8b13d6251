//! Record entries: one property within a record set.

use std::io::{Read, Seek, SeekFrom};
use std::rc::Rc;

use pff_mapi::{FileTime, FloatingTime, Guid, Value, ValueType, string, value};

use crate::name_to_id_map::NameToIdMapEntry;
use crate::{Error, Result};

/// The identifier of a record entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordEntryId {
    /// A default-initialised entry not yet bound to a property.
    #[default]
    Unset,
    /// A MAPI property. Only this form participates in type-based
    /// lookup.
    MapiProperty { entry_type: u32, value_type: u32 },
    /// A GUID-keyed entry, as found in pre-Unicode name-to-id map
    /// tables.
    Guid(Guid),
}

/// One property within a record set: identifier, optional name-to-id
/// binding, raw value bytes and a logical read cursor.
///
/// A `None` value buffer is the empty value, not an error. The typed
/// accessors interpret the bytes under the entry's value type and fail
/// with [`Error::TypeMismatch`] on the wrong type; the cursored
/// [`read_buffer`](RecordEntry::read_buffer)/[`seek_offset`](RecordEntry::seek_offset)
/// pair streams the raw bytes with POSIX offset semantics.
#[derive(Debug, Clone)]
pub struct RecordEntry {
    identifier: RecordEntryId,
    name_to_id_map_entry: Option<Rc<NameToIdMapEntry>>,
    value_data: Option<Vec<u8>>,
    ascii_codepage: u32,
    read_offset: usize,
}

impl RecordEntry {
    /// Creates a default entry inheriting the record set's codepage.
    pub fn new(ascii_codepage: u32) -> Self {
        Self {
            identifier: RecordEntryId::Unset,
            name_to_id_map_entry: None,
            value_data: None,
            ascii_codepage,
            read_offset: 0,
        }
    }

    /// Creates a MAPI property entry.
    pub fn mapi_property(
        entry_type: u32,
        value_type: u32,
        value_data: Option<Vec<u8>>,
        ascii_codepage: u32,
    ) -> Self {
        Self {
            identifier: RecordEntryId::MapiProperty {
                entry_type,
                value_type,
            },
            name_to_id_map_entry: None,
            value_data,
            ascii_codepage,
            read_offset: 0,
        }
    }

    pub fn identifier(&self) -> RecordEntryId {
        self.identifier
    }

    pub fn set_identifier(&mut self, identifier: RecordEntryId) {
        self.identifier = identifier;
    }

    /// The MAPI entry type; absent on non-property identifier formats.
    pub fn entry_type(&self) -> Option<u32> {
        match self.identifier {
            RecordEntryId::MapiProperty { entry_type, .. } => Some(entry_type),
            _ => None,
        }
    }

    /// The MAPI value type; absent on non-property identifier formats.
    pub fn value_type(&self) -> Option<u32> {
        match self.identifier {
            RecordEntryId::MapiProperty { value_type, .. } => Some(value_type),
            _ => None,
        }
    }

    pub fn name_to_id_map_entry(&self) -> Option<&Rc<NameToIdMapEntry>> {
        self.name_to_id_map_entry.as_ref()
    }

    pub fn set_name_to_id_map_entry(&mut self, entry: Rc<NameToIdMapEntry>) {
        self.name_to_id_map_entry = Some(entry);
    }

    pub fn ascii_codepage(&self) -> u32 {
        self.ascii_codepage
    }

    /// Zero-copy view of the value bytes; `None` is the empty value.
    pub fn data(&self) -> Option<&[u8]> {
        self.value_data.as_deref()
    }

    pub fn data_size(&self) -> usize {
        self.value_data.as_ref().map_or(0, Vec::len)
    }

    /// Replaces the value bytes and rewinds the read cursor.
    pub fn set_data(&mut self, value_data: Option<Vec<u8>>) {
        self.value_data = value_data;
        self.read_offset = 0;
    }

    fn mapi_value_type(&self) -> Result<u32> {
        match self.identifier {
            RecordEntryId::MapiProperty { value_type, .. } => Ok(value_type),
            _ => Err(Error::NotMapiProperty),
        }
    }

    /// Checks the entry's value type against the accepted set of an
    /// accessor. Multi-valued entries never pass.
    fn require_value_type(
        &self,
        expected: &'static str,
        accepted: &[ValueType],
    ) -> Result<ValueType> {
        let raw = self.mapi_value_type()?;
        if ValueType::is_multi_value(raw) {
            return Err(Error::TypeMismatch {
                expected,
                actual: raw,
            });
        }
        let value_type = ValueType::from_u32(raw);
        if !accepted.contains(&value_type) {
            return Err(Error::TypeMismatch {
                expected,
                actual: raw,
            });
        }
        Ok(value_type)
    }

    fn scalar_data(&self) -> Result<&[u8]> {
        self.data().ok_or(Error::MissingValueData)
    }

    pub fn as_boolean(&self) -> Result<bool> {
        self.require_value_type("boolean", &[ValueType::Boolean])?;
        let data = self.scalar_data()?;
        if data.len() != 1 {
            return Err(Error::Mapi(pff_mapi::MapiError::UnsupportedValueSize {
                expected: 1,
                actual: data.len(),
            }));
        }
        Ok(data[0] != 0)
    }

    pub fn as_16bit_integer(&self) -> Result<i16> {
        self.require_value_type("16-bit integer", &[ValueType::Integer16])?;
        Ok(value::copy_to_u16(self.scalar_data()?)? as i16)
    }

    pub fn as_32bit_integer(&self) -> Result<i32> {
        self.require_value_type("32-bit integer", &[ValueType::Integer32])?;
        Ok(value::copy_to_u32(self.scalar_data()?)? as i32)
    }

    pub fn as_64bit_integer(&self) -> Result<i64> {
        self.require_value_type("64-bit integer", &[ValueType::Integer64])?;
        Ok(value::copy_to_u64(self.scalar_data()?)? as i64)
    }

    /// The value as an unsigned size; accepts 32-bit and 64-bit
    /// integer entries.
    pub fn as_size(&self) -> Result<u64> {
        let value_type =
            self.require_value_type("size", &[ValueType::Integer32, ValueType::Integer64])?;
        match value_type {
            ValueType::Integer32 => Ok(u64::from(value::copy_to_u32(self.scalar_data()?)?)),
            _ => value::copy_to_u64(self.scalar_data()?).map_err(Error::from),
        }
    }

    /// The value as a double; accepts single and double precision
    /// entries.
    pub fn as_floating_point(&self) -> Result<f64> {
        let value_type = self.require_value_type(
            "floating point",
            &[ValueType::Floating32, ValueType::Floating64],
        )?;
        match value_type {
            ValueType::Floating32 => Ok(f64::from(f32::from_bits(value::copy_to_u32(
                self.scalar_data()?,
            )?))),
            _ => Ok(f64::from_bits(value::copy_to_u64(self.scalar_data()?)?)),
        }
    }

    pub fn as_filetime(&self) -> Result<FileTime> {
        self.require_value_type("filetime", &[ValueType::FileTime])?;
        Ok(FileTime::new(value::copy_to_u64(self.scalar_data()?)?))
    }

    pub fn as_floatingtime(&self) -> Result<FloatingTime> {
        self.require_value_type("floatingtime", &[ValueType::FloatingTime])?;
        Ok(FloatingTime::new(f64::from_bits(value::copy_to_u64(
            self.scalar_data()?,
        )?)))
    }

    pub fn as_guid(&self) -> Result<Guid> {
        self.require_value_type("guid", &[ValueType::Guid])?;
        Guid::from_bytes(self.scalar_data()?).map_err(Error::from)
    }

    fn string_is_ascii(&self) -> Result<bool> {
        let value_type =
            self.require_value_type("string", &[ValueType::String8, ValueType::Unicode])?;
        Ok(value_type == ValueType::String8)
    }

    /// The UTF-8 size, in bytes, of a string entry.
    pub fn utf8_string_size(&self) -> Result<usize> {
        let is_ascii = self.string_is_ascii()?;
        string::utf8_string_size(self.data(), is_ascii, self.ascii_codepage).map_err(Error::from)
    }

    /// Decodes a string entry to UTF-8. A nil value decodes to the
    /// empty string.
    pub fn as_utf8_string(&self) -> Result<String> {
        let is_ascii = self.string_is_ascii()?;
        string::decode_utf8_string(self.data(), is_ascii, self.ascii_codepage).map_err(Error::from)
    }

    /// The UTF-16 size, in code units, of a string entry.
    pub fn utf16_string_size(&self) -> Result<usize> {
        let is_ascii = self.string_is_ascii()?;
        string::utf16_string_size(self.data(), is_ascii, self.ascii_codepage).map_err(Error::from)
    }

    /// Decodes a string entry to UTF-16 code units.
    pub fn as_utf16_string(&self) -> Result<Vec<u16>> {
        let is_ascii = self.string_is_ascii()?;
        string::decode_utf16_string(self.data(), is_ascii, self.ascii_codepage).map_err(Error::from)
    }

    /// Decodes the entry into a typed [`Value`].
    pub fn as_value(&self) -> Result<Value> {
        let raw = self.mapi_value_type()?;
        Value::parse(raw, self.data(), self.ascii_codepage).map_err(Error::from)
    }

    /// Reads up to `buffer.len()` bytes at the read cursor and advances
    /// it. Returns 0 at the end of the value data.
    pub fn read_buffer(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let data = self.value_data.as_deref().unwrap_or_default();
        if self.read_offset >= data.len() {
            return Ok(0);
        }
        let count = buffer.len().min(data.len() - self.read_offset);
        buffer[..count].copy_from_slice(&data[self.read_offset..self.read_offset + count]);
        self.read_offset += count;
        Ok(count)
    }

    /// Moves the read cursor and returns the new absolute offset.
    /// Offsets outside `[0, size]` are rejected; seeking to the exact
    /// end is accepted and a subsequent read returns 0 bytes.
    pub fn seek_offset(&mut self, position: SeekFrom) -> Result<u64> {
        let size = self.data_size() as i128;
        let offset: i128 = match position {
            SeekFrom::Start(offset) => offset as i128,
            SeekFrom::Current(delta) => self.read_offset as i128 + i128::from(delta),
            SeekFrom::End(delta) => size + i128::from(delta),
        };
        if offset < 0 || offset > size {
            return Err(Error::SeekOutOfBounds(
                offset.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64,
            ));
        }
        self.read_offset = offset as usize;
        Ok(offset as u64)
    }

    /// The current read cursor position.
    pub fn offset(&self) -> u64 {
        self.read_offset as u64
    }
}

impl Read for RecordEntry {
    fn read(&mut self, buffer: &mut [u8]) -> std::io::Result<usize> {
        self.read_buffer(buffer).map_err(std::io::Error::other)
    }
}

impl Seek for RecordEntry {
    fn seek(&mut self, position: SeekFrom) -> std::io::Result<u64> {
        self.seek_offset(position).map_err(std::io::Error::other)
    }
}
