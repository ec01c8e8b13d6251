//! [`FileTime`] implementation.

use binrw::prelude::*;
use time::OffsetDateTime;
use time::macros::datetime;

use crate::MapiError;

/// A Windows `FILETIME`: the number of 100-nanosecond ticks since
/// 1601-01-01 00:00 UTC, stored little-endian.
///
/// [MS-DTYP 2.3.3](<https://learn.microsoft.com/en-us/openspecs/windows_protocols/ms-dtyp/2c57429b-fdd4-488f-b5fc-9e4cf020fcdf>)
#[binrw::binrw]
#[brw(little)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileTime {
    pub ticks: u64,
}

impl FileTime {
    const EPOCH: OffsetDateTime = datetime!(1601-01-01 0:00 UTC);

    pub const fn new(ticks: u64) -> Self {
        Self { ticks }
    }

    /// Converts to a calendar datetime.
    ///
    /// Fails only for tick counts outside the representable year range.
    pub fn to_datetime(self) -> Result<OffsetDateTime, MapiError> {
        let nanos = Self::EPOCH.unix_timestamp_nanos() + (self.ticks as i128) * 100;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| MapiError::TimestampOutOfRange)
    }
}

impl From<u64> for FileTime {
    fn from(ticks: u64) -> Self {
        Self { ticks }
    }
}

impl From<FileTime> for u64 {
    fn from(value: FileTime) -> Self {
        value.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pff_tests::*;

    test_le_codec! {
        FileTime: FileTime::new(0x01D0_1234_5678_9ABC) => "bc9a78563412d001"
    }

    #[test]
    fn test_file_time_epoch() {
        let datetime = FileTime::new(0).to_datetime().unwrap();
        assert_eq!(datetime, datetime!(1601-01-01 0:00 UTC));
    }

    #[test]
    fn test_file_time_unix_epoch() {
        // 1970-01-01 is 11644473600 seconds after 1601-01-01.
        let datetime = FileTime::new(116_444_736_000_000_000).to_datetime().unwrap();
        assert_eq!(datetime, datetime!(1970-01-01 0:00 UTC));
    }

    #[test]
    fn test_file_time_out_of_range() {
        assert_eq!(
            FileTime::new(u64::MAX).to_datetime(),
            Err(MapiError::TimestampOutOfRange)
        );
    }
}
