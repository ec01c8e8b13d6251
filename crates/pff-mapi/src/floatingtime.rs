//! [`FloatingTime`] implementation.

use binrw::prelude::*;
use time::{Duration, OffsetDateTime};
use time::macros::datetime;

use crate::MapiError;

/// An OLE automation date (`PtypFloatingTime`): an IEEE 754 binary64 count
/// of days since 1899-12-30 00:00 UTC, stored little-endian. Fractions of
/// a day encode the time of day.
///
/// [MS-OXCDATA 2.11.1](<https://learn.microsoft.com/en-us/openspecs/exchange_server_protocols/ms-oxcdata/0c77892e-288e-435a-9c49-be1c20c7afdb>)
#[binrw::binrw]
#[brw(little)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatingTime {
    pub days: f64,
}

impl FloatingTime {
    const EPOCH: OffsetDateTime = datetime!(1899-12-30 0:00 UTC);

    pub const fn new(days: f64) -> Self {
        Self { days }
    }

    /// Converts to a calendar datetime.
    ///
    /// Fails for non-finite day counts and for values outside the
    /// representable year range.
    pub fn to_datetime(self) -> Result<OffsetDateTime, MapiError> {
        if !self.days.is_finite() {
            return Err(MapiError::TimestampOutOfRange);
        }
        let offset = Duration::checked_seconds_f64(self.days * 86_400.0)
            .ok_or(MapiError::TimestampOutOfRange)?;
        Self::EPOCH
            .checked_add(offset)
            .ok_or(MapiError::TimestampOutOfRange)
    }
}

impl From<f64> for FloatingTime {
    fn from(days: f64) -> Self {
        Self { days }
    }
}

impl From<FloatingTime> for f64 {
    fn from(value: FloatingTime) -> Self {
        value.days
    }
}
