//! A Pure Rust Outlook PFF (PST/OST) decoding core.
//!
//! PFF stores a tree of items (folders, messages, attachments); every item
//! carries a property table of one or more record sets, each an ordered
//! array of `(entry type, value type, bytes)` record entries. This crate
//! decodes that object model: typed property access, named-property
//! lookup through the container's name-to-id map, attachment typing, and
//! a seekable read-only file adapter over attachment data.
//!
//! The on-disk index structures (descriptor and offsets indexes, local
//! descriptor trees, block reassembly, encryption unmasking) live behind
//! the collaborator traits in [`services`]; the core stays independent of
//! the container revision.
//!
//! The core is single-threaded: handles share decoded state through
//! `Rc<RefCell<_>>`, and distinct containers can be decoded on distinct
//! threads without interaction.

#![forbid(unsafe_code)]

pub mod attached_file;
pub mod attachment;
pub mod error;
pub mod file;
pub mod io;
pub mod item;
pub mod item_values;
pub mod name_to_id_map;
pub mod record_entry;
pub mod record_set;
pub mod services;
pub mod table;

pub use attached_file::{AccessFlags, AttachedFile};
pub use attachment::{Attachment, AttachmentMethod, AttachmentType};
pub use error::Error;
pub use file::File;
pub use io::FileIo;
pub use item::Item;
pub use item_values::ItemValues;
pub use name_to_id_map::{NameToIdMap, NameToIdMapEntry};
pub use record_entry::{RecordEntry, RecordEntryId};
pub use record_set::{MatchFlags, RecordSet};
pub use services::{
    DataStream, IndexServices, ItemDescriptor, ItemTree, LocalDescriptorValue,
    LocalDescriptorsTree, NodeDatabase, NodeHandle,
};
pub use table::PropertyTable;

pub use pff_mapi::{FileTime, FloatingTime, Guid, MapiError, Value, ValueType, codepage, entry_type};

/// PFF result type
pub type Result<T> = std::result::Result<T, crate::Error>;
