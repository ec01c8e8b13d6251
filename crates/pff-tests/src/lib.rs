//! Test helpers for the `pff` workspace crates.
//!
//! May only be used from `[dev-dependencies]`.

#![forbid(unsafe_code)]

pub use pastey;

/// Parses a hex fixture string into bytes; whitespace is ignored.
///
/// # Panics
/// Panics on non-hex characters or an odd digit count; fixtures are
/// compile-time constants, so a bad fixture should fail loudly.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    let digits: Vec<u32> = hex
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(16)
                .unwrap_or_else(|| panic!("invalid hex digit {c:?} in fixture"))
        })
        .collect();
    assert!(
        digits.len() % 2 == 0,
        "odd number of hex digits in fixture"
    );
    digits
        .chunks_exact(2)
        .map(|pair| (pair[0] * 16 + pair[1]) as u8)
        .collect()
}

/// Generates little-endian read and write round-trip tests for a binrw
/// type against a hex fixture.
///
/// ```ignore
/// test_le_codec! {
///     FileTime: FileTime::new(0) => "0000000000000000"
/// }
/// test_le_codec! {
///     FileTime => epoch: FileTime::new(0) => "0000000000000000"
/// }
/// ```
#[macro_export]
macro_rules! test_le_codec {
    ($ty:ident => $test_name:ident: $value:expr => $hex:expr) => {
        $crate::pastey::paste! {
            #[test]
            fn [<test_ $ty:snake _ $test_name:snake _read>]() {
                use ::binrw::BinRead;
                let bytes = $crate::hex_to_bytes($hex);
                let mut cursor = ::std::io::Cursor::new(&bytes);
                let value = <$ty as BinRead>::read_le(&mut cursor).unwrap();
                assert_eq!(value, $value);
                assert_eq!(cursor.position() as usize, bytes.len(), "trailing bytes");
            }

            #[test]
            fn [<test_ $ty:snake _ $test_name:snake _write>]() {
                use ::binrw::BinWrite;
                let mut cursor = ::std::io::Cursor::new(Vec::new());
                <$ty as BinWrite>::write_le(&$value, &mut cursor).unwrap();
                assert_eq!(cursor.into_inner(), $crate::hex_to_bytes($hex));
            }
        }
    };
    ($ty:ident: $value:expr => $hex:expr) => {
        $crate::test_le_codec! { $ty => value: $value => $hex }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("0a1b2C"), vec![0x0A, 0x1B, 0x2C]);
        assert_eq!(hex_to_bytes("0a 1b 2c"), vec![0x0A, 0x1B, 0x2C]);
        assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    }

    #[test]
    #[should_panic(expected = "invalid hex digit")]
    fn test_hex_to_bytes_rejects_garbage() {
        hex_to_bytes("zz");
    }
}
