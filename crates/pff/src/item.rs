//! Item handles.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use pff_mapi::{entry_type, value};

use crate::item_values::ItemValues;
use crate::record_entry::RecordEntry;
use crate::record_set::{MatchFlags, RecordSet};
use crate::services::{DataStream, IndexServices, ItemDescriptor, NodeHandle};
use crate::{Error, Result};

pub(crate) struct InternalItem {
    pub(crate) services: IndexServices,
    pub(crate) node: NodeHandle,
    pub(crate) values: ItemValues,
    pub(crate) embedded_object_data_stream: Option<Box<dyn DataStream>>,
}

impl InternalItem {
    /// The attachment data object entry, looked up with any value type.
    pub(crate) fn data_object_entry_mut(&mut self) -> Result<Option<&mut RecordEntry>> {
        let services = self.services.clone();
        self.values.record_entry_by_type_mut(
            &services,
            0,
            entry_type::ATTACHMENT_DATA_OBJECT,
            0,
            MatchFlags::new().with_match_any_value_type(true),
        )
    }

    fn open_embedded_object_data(&mut self) -> Result<Box<dyn DataStream>> {
        let services = self.services.clone();
        let identifier = {
            let entry = self
                .data_object_entry_mut()?
                .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_DATA_OBJECT))?;
            let data = entry.data().ok_or(Error::MissingValueData)?;
            // The referenced descriptor is named by the first 4 bytes.
            value::copy_to_u32(data.get(..4).unwrap_or(data))?
        };
        let local_descriptor_value = self
            .values
            .local_descriptors_value_by_identifier(
                &mut *services.file_io.borrow_mut(),
                identifier,
            )?
            .ok_or(Error::MissingLocalDescriptor(identifier))?;
        log::debug!(
            "opening embedded object data stream, descriptor: {} data: {}",
            identifier,
            local_descriptor_value.data_identifier
        );
        services.node_database.borrow_mut().open_data_stream(
            &mut *services.file_io.borrow_mut(),
            local_descriptor_value.data_identifier,
            self.values.descriptor().recovered,
        )
    }

    /// The embedded object data stream, materialised on first use and
    /// memoised on the item.
    pub(crate) fn embedded_object_data_stream(&mut self) -> Result<&mut dyn DataStream> {
        let stream = match self.embedded_object_data_stream.take() {
            Some(stream) => stream,
            None => self.open_embedded_object_data()?,
        };
        Ok(self.embedded_object_data_stream.insert(stream).as_mut())
    }

    pub(crate) fn embedded_object_data_size(&mut self) -> Result<u64> {
        let services = self.services.clone();
        let stream = self.embedded_object_data_stream()?;
        let mut file_io = services.file_io.borrow_mut();
        stream.size(&mut *file_io)
    }
}

/// A read-only handle onto one item of a container.
///
/// Cheap to clone: clones share the underlying decoded state, so the
/// property table of an item is materialised at most once. The handle is
/// single-threaded; overlapping borrows of one item are a caller bug and
/// abort at runtime.
#[derive(Clone)]
pub struct Item {
    inner: Rc<RefCell<InternalItem>>,
}

impl Item {
    pub(crate) fn new(
        services: IndexServices,
        node: NodeHandle,
        descriptor: ItemDescriptor,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(InternalItem {
                services,
                node,
                values: ItemValues::new(descriptor),
                embedded_object_data_stream: None,
            })),
        }
    }

    pub(crate) fn inner_mut(&self) -> RefMut<'_, InternalItem> {
        self.inner.borrow_mut()
    }

    /// The descriptor this item was materialised from.
    pub fn descriptor(&self) -> ItemDescriptor {
        *self.inner.borrow().values.descriptor()
    }

    /// The item's descriptor identifier.
    pub fn identifier(&self) -> u32 {
        self.descriptor().descriptor_identifier
    }

    /// The number of record sets, reading the property table on first
    /// use.
    pub fn number_of_record_sets(&self) -> Result<usize> {
        let mut inner = self.inner.borrow_mut();
        let services = inner.services.clone();
        inner.values.number_of_record_sets(&services)
    }

    /// A borrow of the record set at `index`, reading the property table
    /// on first use.
    pub fn record_set(&self, index: usize) -> Result<Ref<'_, RecordSet>> {
        if index >= self.number_of_record_sets()? {
            return Err(Error::RecordSetIndex(index));
        }
        let inner = self.inner.borrow();
        Ref::filter_map(inner, |item| {
            item.values
                .table()
                .and_then(|table| table.record_sets().get(index))
        })
        .map_err(|_| Error::RecordSetIndex(index))
    }

    /// Finds a record entry by entry and value type pair; `Ok(None)`
    /// when absent.
    pub fn record_entry_by_type(
        &self,
        record_set_index: usize,
        entry_type: u32,
        value_type: u32,
        flags: MatchFlags,
    ) -> Result<Option<Ref<'_, RecordEntry>>> {
        if record_set_index >= self.number_of_record_sets()? {
            return Err(Error::RecordSetIndex(record_set_index));
        }
        let inner = self.inner.borrow();
        Ok(Ref::filter_map(inner, |item| {
            item.values
                .table()
                .and_then(|table| table.record_sets().get(record_set_index))
                .and_then(|record_set| record_set.entry_by_type(entry_type, value_type, flags))
        })
        .ok())
    }

    /// Finds a record entry by UTF-8 property name; `Ok(None)` when
    /// absent or when the container has no name-to-id map.
    pub fn record_entry_by_utf8_name(
        &self,
        record_set_index: usize,
        name: &str,
        value_type: u32,
        flags: MatchFlags,
    ) -> Result<Option<Ref<'_, RecordEntry>>> {
        if record_set_index >= self.number_of_record_sets()? {
            return Err(Error::RecordSetIndex(record_set_index));
        }
        let inner = self.inner.borrow();
        Ok(Ref::filter_map(inner, |item| {
            item.values
                .table()
                .and_then(|table| table.record_sets().get(record_set_index))
                .and_then(|record_set| record_set.entry_by_utf8_name(name, value_type, flags))
        })
        .ok())
    }

    /// Finds a record entry by UTF-16 property name; `Ok(None)` when
    /// absent or when the container has no name-to-id map.
    pub fn record_entry_by_utf16_name(
        &self,
        record_set_index: usize,
        name: &[u16],
        value_type: u32,
        flags: MatchFlags,
    ) -> Result<Option<Ref<'_, RecordEntry>>> {
        if record_set_index >= self.number_of_record_sets()? {
            return Err(Error::RecordSetIndex(record_set_index));
        }
        let inner = self.inner.borrow();
        Ok(Ref::filter_map(inner, |item| {
            item.values
                .table()
                .and_then(|table| table.record_sets().get(record_set_index))
                .and_then(|record_set| record_set.entry_by_utf16_name(name, value_type, flags))
        })
        .ok())
    }
}
