//! MAPI data types and value decoding for `pff`.
//!
//! PFF stores item properties as `(entry type, value type, bytes)` triples.
//! This crate holds the pieces that interpret those triples: the value type
//! codes of [MS-OXCDATA 2.11.1], the scalar types (`FILETIME`, floating
//! time, `GUID`), Windows codepage handling, and the string/scalar/binary
//! decoding policy.
//!
//! [MS-OXCDATA 2.11.1]: <https://learn.microsoft.com/en-us/openspecs/exchange_server_protocols/ms-oxcdata/0c77892e-288e-435a-9c49-be1c20c7afdb>

#![forbid(unsafe_code)]

pub mod codepage;
pub mod entry_type;
mod error;
mod filetime;
mod floatingtime;
mod guid;
pub mod string;
mod utf7;
pub mod value;
mod value_type;

pub use error::MapiError;
pub use filetime::FileTime;
pub use floatingtime::FloatingTime;
pub use guid::Guid;
pub use value::Value;
pub use value_type::ValueType;

/// MAPI decoding result type
pub type Result<T> = std::result::Result<T, MapiError>;
