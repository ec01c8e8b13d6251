//! [`Guid`] implementation.

use std::fmt;

use binrw::prelude::*;

use crate::MapiError;

/// A GUID in the Windows mixed-endian packet representation: the first
/// three fields little-endian, the trailing eight bytes as-is.
///
/// [MS-DTYP 2.3.4.2](<https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-dtyp/49e490b8-f972-45d6-a3a4-99f924998d97>)
#[binrw::binrw]
#[brw(little)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    pub const SIZE: usize = 16;

    /// Parses a GUID from exactly 16 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MapiError> {
        if bytes.len() != Self::SIZE {
            return Err(MapiError::UnsupportedValueSize {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut data1 = [0u8; 4];
        data1.copy_from_slice(&bytes[0..4]);
        let mut data2 = [0u8; 2];
        data2.copy_from_slice(&bytes[4..6]);
        let mut data3 = [0u8; 2];
        data3.copy_from_slice(&bytes[6..8]);
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..16]);
        Ok(Self {
            data1: u32::from_le_bytes(data1),
            data2: u16::from_le_bytes(data2),
            data3: u16::from_le_bytes(data3),
            data4,
        })
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pff_tests::*;

    // PS_PUBLIC_STRINGS, 00020329-0000-0000-c000-000000000046.
    test_le_codec! {
        Guid: Guid {
            data1: 0x00020329,
            data2: 0x0000,
            data3: 0x0000,
            data4: [0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
        } => "29030200000000 00c000000000000046"
    }

    #[test]
    fn test_guid_from_bytes() {
        let bytes = hex_to_bytes("2903020000000000c000000000000046");
        let guid = Guid::from_bytes(&bytes).unwrap();
        assert_eq!(guid.to_string(), "00020329-0000-0000-c000-000000000046");
    }

    #[test]
    fn test_guid_from_bytes_wrong_size() {
        assert_eq!(
            Guid::from_bytes(&[0u8; 15]),
            Err(MapiError::UnsupportedValueSize {
                expected: 16,
                actual: 15
            })
        );
    }
}
