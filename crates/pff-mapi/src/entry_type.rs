//! Well-known MAPI property entry types.
//!
//! Only the entry types the library itself dispatches on are listed here;
//! consumers address everything else by raw number or by named property.
//!
//! [MS-OXPROPS](<https://learn.microsoft.com/en-us/openspecs/exchange_server_protocols/ms-oxprops/f6ab1613-aefe-447d-a49c-18217230b148>)

/// `PidTagMessageClass`
pub const MESSAGE_CLASS: u32 = 0x001A;

/// `PidTagDisplayName`
pub const DISPLAY_NAME: u32 = 0x3001;

/// `PidTagMessageCodepage`
pub const MESSAGE_CODEPAGE: u32 = 0x3FFD;

/// `PidTagAttachSize`
pub const ATTACHMENT_SIZE: u32 = 0x0E20;

/// `PidTagAttachDataBinary` / `PidTagAttachDataObject`
pub const ATTACHMENT_DATA_OBJECT: u32 = 0x3701;

/// `PidTagAttachFilename`
pub const ATTACHMENT_FILENAME_SHORT: u32 = 0x3704;

/// `PidTagAttachMethod`
pub const ATTACHMENT_METHOD: u32 = 0x3705;

/// `PidTagAttachLongFilename`
pub const ATTACHMENT_FILENAME_LONG: u32 = 0x3707;

/// The start of the named-property range; entry types at or above this
/// value are subject to name-to-id mapping.
pub const NAMED_PROPERTY_MINIMUM: u32 = 0x8000;
