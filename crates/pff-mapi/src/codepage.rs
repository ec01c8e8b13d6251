//! Windows codepage numbers and their encodings.
//!
//! PFF stores extended-ASCII strings under the container's codepage and
//! identifies encodings by Windows codepage number. The Unicode sentinels
//! (1200, 65000, 65001) are dispatched by the string decoding policy in
//! [`crate::string`]; everything else goes through [`encoding_for_codepage`].

use encoding_rs::Encoding;

/// Codepage number for UTF-16 little-endian ("Unicode").
pub const UTF16LE: u32 = 1200;

/// Codepage number for UTF-7.
pub const UTF7: u32 = 65000;

/// Codepage number for UTF-8.
pub const UTF8: u32 = 65001;

/// The default codepage for extended-ASCII strings (windows-1252), used
/// when the container does not override it.
pub const DEFAULT: u32 = 1252;

/// Maps a Windows codepage number to its byte-stream encoding.
///
/// Returns `None` for unsupported codepages and for the Unicode sentinels,
/// which never decode as plain byte streams.
pub fn encoding_for_codepage(codepage: u32) -> Option<&'static Encoding> {
    use encoding_rs::*;

    match codepage {
        866 => Some(IBM866),
        874 => Some(WINDOWS_874),
        932 => Some(SHIFT_JIS),
        936 => Some(GBK),
        949 => Some(EUC_KR),
        950 => Some(BIG5),
        1250 => Some(WINDOWS_1250),
        1251 => Some(WINDOWS_1251),
        1252 => Some(WINDOWS_1252),
        1253 => Some(WINDOWS_1253),
        1254 => Some(WINDOWS_1254),
        1255 => Some(WINDOWS_1255),
        1256 => Some(WINDOWS_1256),
        1257 => Some(WINDOWS_1257),
        1258 => Some(WINDOWS_1258),
        20866 => Some(KOI8_R),
        21866 => Some(KOI8_U),
        // Windows decodes ISO 8859-1 with the windows-1252 table.
        28591 => Some(WINDOWS_1252),
        28592 => Some(ISO_8859_2),
        28593 => Some(ISO_8859_3),
        28594 => Some(ISO_8859_4),
        28595 => Some(ISO_8859_5),
        28596 => Some(ISO_8859_6),
        28597 => Some(ISO_8859_7),
        28598 => Some(ISO_8859_8),
        28603 => Some(ISO_8859_13),
        28605 => Some(ISO_8859_15),
        38598 => Some(ISO_8859_8_I),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_codepages() {
        assert_eq!(encoding_for_codepage(1252), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_for_codepage(932), Some(encoding_rs::SHIFT_JIS));
        assert_eq!(encoding_for_codepage(1251), Some(encoding_rs::WINDOWS_1251));
    }

    #[test]
    fn test_unicode_sentinels_are_not_byte_streams() {
        assert_eq!(encoding_for_codepage(UTF16LE), None);
        assert_eq!(encoding_for_codepage(UTF7), None);
        assert_eq!(encoding_for_codepage(UTF8), None);
    }

    #[test]
    fn test_unsupported_codepage() {
        assert_eq!(encoding_for_codepage(42), None);
    }
}
