//! Attachment helpers.
//!
//! MAPI attachment typing is quirky: the payload shape follows from the
//! combination of `PidTagAttachMethod` and the value type of the
//! `PidTagAttachDataBinary`/`PidTagAttachDataObject` entry. Exactly five
//! combinations are valid; everything else is an explicit error.

use std::io::SeekFrom;

use pff_mapi::{ValueType, entry_type, value};

use crate::attached_file::AttachedFile;
use crate::item::Item;
use crate::record_set::MatchFlags;
use crate::{Error, Result};

/// `PidTagAttachMethod` values the library accepts.
///
/// `afByReferenceOnly` (4) and anything above `afStorage` (6) are
/// unsupported and rejected at dispatch.
///
/// [MS-OXCMSG 2.2.2.9](<https://learn.microsoft.com/en-us/openspecs/exchange_server_protocols/ms-oxcmsg/252923d6-dd41-468b-9c57-d3f68051a516>)
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentMethod {
    /// `afNone`: the attachment holds no payload.
    None = 0,
    /// `afByValue`: the data object holds the content by value.
    ByValue = 1,
    /// `afByReference`: the content lives outside the container.
    ByReference = 2,
    /// `afEmbeddedMessage`: the data object references a sub message.
    EmbeddedMessage = 5,
    /// `afStorage`: the data object references an OLE storage object.
    Ole = 6,
}

impl TryFrom<u32> for AttachmentMethod {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(AttachmentMethod::None),
            1 => Ok(AttachmentMethod::ByValue),
            2 => Ok(AttachmentMethod::ByReference),
            5 => Ok(AttachmentMethod::EmbeddedMessage),
            6 => Ok(AttachmentMethod::Ole),
            _ => Err(Error::UnsupportedAttachmentMethod(value)),
        }
    }
}

/// How an attachment's payload is surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentType {
    /// No payload.
    None,
    /// A byte stream, read through the data accessors or an
    /// [`AttachedFile`].
    Data,
    /// A reference to external content; only the link properties exist.
    Reference,
    /// An embedded message item, materialised with
    /// [`Attachment::embedded_item`].
    Item,
}

/// An attachment item wrapper exposing the MAPI attachment typing and
/// the payload byte stream.
pub struct Attachment {
    item: Item,
}

impl Attachment {
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn into_item(self) -> Item {
        self.item
    }

    /// Determines the attachment type from the attachment method and
    /// the data object's value type.
    pub fn attachment_type(&self) -> Result<AttachmentType> {
        let method = {
            let entry = self
                .item
                .record_entry_by_type(
                    0,
                    entry_type::ATTACHMENT_METHOD,
                    ValueType::Integer32.to_u32(),
                    MatchFlags::new(),
                )?
                .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_METHOD))?;
            AttachmentMethod::try_from(entry.as_32bit_integer()? as u32)?
        };
        match method {
            AttachmentMethod::None => {
                // A data object entry next to method NONE is undefined
                // and rejected.
                if self.data_object_details()?.is_some() {
                    return Err(Error::UnexpectedAttachmentData);
                }
                Ok(AttachmentType::None)
            }
            AttachmentMethod::ByReference => Ok(AttachmentType::Reference),
            AttachmentMethod::ByValue | AttachmentMethod::EmbeddedMessage | AttachmentMethod::Ole => {
                let (value_type, _) = self
                    .data_object_details()?
                    .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_DATA_OBJECT))?;
                match ValueType::from_u32(value_type) {
                    ValueType::Binary => Ok(AttachmentType::Data),
                    ValueType::Object if method == AttachmentMethod::EmbeddedMessage => {
                        Ok(AttachmentType::Item)
                    }
                    // An OLE data object surfaces as a plain stream.
                    ValueType::Object if method == AttachmentMethod::Ole => {
                        Ok(AttachmentType::Data)
                    }
                    _ => Err(Error::UnsupportedAttachmentValueType(value_type)),
                }
            }
        }
    }

    /// Value type and raw size of the data object entry, when present.
    fn data_object_details(&self) -> Result<Option<(u32, u64)>> {
        let mut inner = self.item.inner_mut();
        match inner.data_object_entry_mut()? {
            None => Ok(None),
            Some(entry) => {
                let value_type = entry.value_type().ok_or(Error::NotMapiProperty)?;
                Ok(Some((value_type, entry.data_size() as u64)))
            }
        }
    }

    /// The attachment data size; `Ok(None)` when the item carries no
    /// data object entry.
    ///
    /// An OLE embedded object is sized through its data stream, which is
    /// materialised lazily and memoised on the item; everything else is
    /// the record entry's raw size.
    pub fn data_size(&self) -> Result<Option<u64>> {
        let Some((value_type, raw_size)) = self.data_object_details()? else {
            return Ok(None);
        };
        if value_type == ValueType::Object.to_u32() {
            let mut inner = self.item.inner_mut();
            Ok(Some(inner.embedded_object_data_size()?))
        } else {
            Ok(Some(raw_size))
        }
    }

    /// Reads attachment data at the current offset.
    pub fn read_data(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let (value_type, _) = self
            .data_object_details()?
            .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_DATA_OBJECT))?;
        let mut inner = self.item.inner_mut();
        let inner = &mut *inner;
        if value_type == ValueType::Object.to_u32() {
            let services = inner.services.clone();
            let stream = inner.embedded_object_data_stream()?;
            let mut file_io = services.file_io.borrow_mut();
            stream.read_buffer(&mut *file_io, buffer)
        } else {
            let entry = inner
                .data_object_entry_mut()?
                .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_DATA_OBJECT))?;
            entry.read_buffer(buffer)
        }
    }

    /// Seeks within the attachment data; offsets follow POSIX
    /// conventions.
    pub fn seek_data(&mut self, position: SeekFrom) -> Result<u64> {
        let (value_type, _) = self
            .data_object_details()?
            .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_DATA_OBJECT))?;
        let mut inner = self.item.inner_mut();
        let inner = &mut *inner;
        if value_type == ValueType::Object.to_u32() {
            let stream = inner.embedded_object_data_stream()?;
            stream.seek_offset(position)
        } else {
            let entry = inner
                .data_object_entry_mut()?
                .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_DATA_OBJECT))?;
            entry.seek_offset(position)
        }
    }

    /// Materialises the embedded message item of the attachment;
    /// `Ok(None)` when the attachment has no data object value.
    ///
    /// The data object value names a child descriptor: it is resolved
    /// against the item tree first and, when absent there, through the
    /// table's local descriptors tree, in which case the embedded item
    /// is appended as the sole sub node of the attachment. A missing
    /// local descriptor identifier is fatal.
    pub fn embedded_item(&self) -> Result<Option<Item>> {
        let mut inner = self.item.inner_mut();
        let inner = &mut *inner;
        // Promotion of items found through recovery scanning is not
        // supported.
        if inner.values.descriptor().recovered {
            return Err(Error::Unsupported("recovered embedded item"));
        }
        let identifier = {
            let entry = inner
                .data_object_entry_mut()?
                .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_DATA_OBJECT))?;
            match entry.data() {
                None => return Ok(None),
                Some(data) => value::copy_to_u32(data.get(..4).unwrap_or(data))?,
            }
        };
        let services = inner.services.clone();
        let mut item_tree = services.item_tree.borrow_mut();
        let node = match item_tree.node_by_identifier(identifier)? {
            Some(node) => node,
            None => {
                // The descriptor identifier lives in the local
                // descriptors tree of the attachment's table.
                let local_descriptor_value = inner
                    .values
                    .local_descriptors_value_by_identifier(
                        &mut *services.file_io.borrow_mut(),
                        identifier,
                    )?
                    .ok_or(Error::MissingLocalDescriptor(identifier))?;
                log::debug!(
                    "local descriptor identifier: {} data: {} local descriptors: {}",
                    local_descriptor_value.identifier,
                    local_descriptor_value.data_identifier,
                    local_descriptor_value.local_descriptors_identifier
                );
                // The embedded item becomes the sub item of the
                // attachment.
                item_tree.append_identifier(
                    inner.node,
                    identifier,
                    local_descriptor_value.data_identifier,
                    local_descriptor_value.local_descriptors_identifier,
                    inner.values.descriptor().recovered,
                )?;
                let number_of_sub_nodes = item_tree.number_of_sub_nodes(inner.node)?;
                // Only a single embedded item per attachment may exist.
                if number_of_sub_nodes != 1 {
                    return Err(Error::EmbeddedItemNodes(number_of_sub_nodes));
                }
                item_tree.sub_node_by_index(inner.node, 0)?
            }
        };
        let descriptor = item_tree.node_descriptor(node)?;
        drop(item_tree);
        Ok(Some(Item::new(services, node, descriptor)))
    }

    /// Creates the seekable read-only file adapter over the attachment
    /// data.
    pub fn data_file(&self) -> AttachedFile {
        AttachedFile::new(Attachment::new(self.item.clone()))
    }
}
