//! String value decoding.
//!
//! PFF string properties carry no header: the raw buffer is interpreted
//! under the owning record set's codepage and the value type's ASCII hint.
//! Codepage 1200 ("Unicode") is ambiguous for hinted-ASCII data, so a
//! zero-byte probe decides between UTF-8 and UTF-16 little-endian before
//! dispatch. The probe order is normative: it mutates the effective
//! encoding for every branch that follows.

use crate::{MapiError, codepage, utf7};

/// Determines if there are zero bytes in a string buffer, trailing zero
/// bytes not included.
pub fn string_contains_zero_bytes(buffer: &[u8]) -> bool {
    let mut zero_byte_found = false;
    for &byte in buffer {
        if !zero_byte_found {
            if byte == 0 {
                zero_byte_found = true;
            }
        } else if byte != 0 {
            return true;
        }
    }
    false
}

/// Applies the codepage-1200 probe: hinted-ASCII data containing embedded
/// zero bytes is reclassified as UTF-16 little-endian.
fn effective_is_ascii(value_data: &[u8], is_ascii: bool, ascii_codepage: u32) -> bool {
    if is_ascii
        && ascii_codepage == codepage::UTF16LE
        && string_contains_zero_bytes(value_data)
    {
        return false;
    }
    is_ascii
}

fn decode_utf16le(value_data: &[u8]) -> Result<String, MapiError> {
    if value_data.len() % 2 != 0 {
        return Err(MapiError::InvalidUtf16Data);
    }
    let units = value_data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| MapiError::InvalidUtf16Data)
}

fn decode_byte_stream(value_data: &[u8], ascii_codepage: u32) -> Result<String, MapiError> {
    let encoding = codepage::encoding_for_codepage(ascii_codepage)
        .ok_or(MapiError::UnsupportedCodepage(ascii_codepage))?;
    let (decoded, _, had_errors) = encoding.decode(value_data);
    if had_errors {
        return Err(MapiError::InvalidByteStream(ascii_codepage));
    }
    Ok(decoded.into_owned())
}

/// Decodes a string value to UTF-8.
///
/// A `None` buffer is the empty value and decodes to the empty string. Any
/// terminating NUL present in the stored data is preserved.
pub fn decode_utf8_string(
    value_data: Option<&[u8]>,
    is_ascii: bool,
    ascii_codepage: u32,
) -> Result<String, MapiError> {
    let Some(value_data) = value_data else {
        return Ok(String::new());
    };
    if value_data.len() > isize::MAX as usize {
        return Err(MapiError::ValueSizeExceedsMaximum(value_data.len()));
    }
    if !effective_is_ascii(value_data, is_ascii, ascii_codepage) {
        decode_utf16le(value_data)
    } else if ascii_codepage == codepage::UTF7 {
        utf7::decode_utf7(value_data)
    } else if ascii_codepage == codepage::UTF16LE || ascii_codepage == codepage::UTF8 {
        std::str::from_utf8(value_data)
            .map(str::to_owned)
            .map_err(|_| MapiError::InvalidUtf8Data)
    } else {
        decode_byte_stream(value_data, ascii_codepage)
    }
}

/// Determines the UTF-8 string size, in bytes, of a string value.
pub fn utf8_string_size(
    value_data: Option<&[u8]>,
    is_ascii: bool,
    ascii_codepage: u32,
) -> Result<usize, MapiError> {
    Ok(decode_utf8_string(value_data, is_ascii, ascii_codepage)?.len())
}

/// Decodes a string value to UTF-16 code units.
pub fn decode_utf16_string(
    value_data: Option<&[u8]>,
    is_ascii: bool,
    ascii_codepage: u32,
) -> Result<Vec<u16>, MapiError> {
    let decoded = decode_utf8_string(value_data, is_ascii, ascii_codepage)?;
    Ok(decoded.encode_utf16().collect())
}

/// Determines the UTF-16 string size, in code units, of a string value.
pub fn utf16_string_size(
    value_data: Option<&[u8]>,
    is_ascii: bool,
    ascii_codepage: u32,
) -> Result<usize, MapiError> {
    Ok(decode_utf16_string(value_data, is_ascii, ascii_codepage)?.len())
}
