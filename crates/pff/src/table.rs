//! The decoded property table of one item.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::io::FileIo;
use crate::record_entry::RecordEntry;
use crate::record_set::{MatchFlags, RecordSet};
use crate::services::{LocalDescriptorValue, LocalDescriptorsTree};
use crate::{Error, Result};

/// One or more record sets plus the table's local descriptors tree,
/// produced by the node database's table reader.
///
/// Cloning deep-copies the record sets; the local descriptors tree is a
/// shared handle, as it only serves lookups.
#[derive(Clone, Default)]
pub struct PropertyTable {
    record_sets: Vec<RecordSet>,
    local_descriptors: Option<Rc<RefCell<dyn LocalDescriptorsTree>>>,
}

impl PropertyTable {
    pub fn new(
        record_sets: Vec<RecordSet>,
        local_descriptors: Option<Rc<RefCell<dyn LocalDescriptorsTree>>>,
    ) -> Self {
        Self {
            record_sets,
            local_descriptors,
        }
    }

    pub fn number_of_record_sets(&self) -> usize {
        self.record_sets.len()
    }

    pub fn record_sets(&self) -> &[RecordSet] {
        &self.record_sets
    }

    pub fn record_set(&self, index: usize) -> Result<&RecordSet> {
        self.record_sets
            .get(index)
            .ok_or(Error::RecordSetIndex(index))
    }

    pub fn record_set_mut(&mut self, index: usize) -> Result<&mut RecordSet> {
        self.record_sets
            .get_mut(index)
            .ok_or(Error::RecordSetIndex(index))
    }

    /// Convenience lookup across one record set; `Ok(None)` when the
    /// entry is absent.
    pub fn record_entry_by_type(
        &self,
        record_set_index: usize,
        entry_type: u32,
        value_type: u32,
        flags: MatchFlags,
    ) -> Result<Option<&RecordEntry>> {
        Ok(self
            .record_set(record_set_index)?
            .entry_by_type(entry_type, value_type, flags))
    }

    /// Looks up a local descriptor in the table's tree; `Ok(None)` when
    /// the identifier is absent or the table carries no tree.
    pub fn local_descriptors_value_by_identifier(
        &mut self,
        file_io: &mut dyn FileIo,
        identifier: u64,
    ) -> Result<Option<LocalDescriptorValue>> {
        match &self.local_descriptors {
            Some(tree) => tree.borrow_mut().value_by_identifier(file_io, identifier),
            None => Ok(None),
        }
    }
}

impl fmt::Debug for PropertyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTable")
            .field("record_sets", &self.record_sets.len())
            .field("local_descriptors", &self.local_descriptors.is_some())
            .finish()
    }
}
