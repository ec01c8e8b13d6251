//! Item values: the lazily decoded property table view of one item.

use crate::io::FileIo;
use crate::record_entry::RecordEntry;
use crate::record_set::MatchFlags;
use crate::services::{IndexServices, ItemDescriptor, LocalDescriptorValue};
use crate::table::PropertyTable;
use crate::{Error, Result};

/// The property table of one descriptor, materialised on first use.
///
/// Building is one-shot: [`read`](ItemValues::read) fails when the table
/// was already built. The retrieval operations read the table on demand
/// and surface the read failure unchanged. A single instance must not be
/// shared across concurrent mutators; readers that trigger the auto-read
/// synchronise externally.
#[derive(Debug)]
pub struct ItemValues {
    descriptor: ItemDescriptor,
    table: Option<PropertyTable>,
}

impl ItemValues {
    pub fn new(descriptor: ItemDescriptor) -> Self {
        Self {
            descriptor,
            table: None,
        }
    }

    pub fn descriptor(&self) -> &ItemDescriptor {
        &self.descriptor
    }

    /// Whether the property table has been materialised.
    pub fn is_read(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Option<&PropertyTable> {
        self.table.as_ref()
    }

    pub fn table_mut(&mut self) -> Option<&mut PropertyTable> {
        self.table.as_mut()
    }

    /// Reads the item values for the descriptor through the node
    /// database. Single-shot: fails with [`Error::TableAlreadyRead`]
    /// when a table exists.
    pub fn read(&mut self, services: &IndexServices) -> Result<()> {
        if self.table.is_some() {
            return Err(Error::TableAlreadyRead);
        }
        let mut node_database = services.node_database.borrow_mut();
        let mut file_io = services.file_io.borrow_mut();
        let table = node_database.read_table(
            &self.descriptor,
            &mut *file_io,
            services.name_to_id_map.as_deref(),
        )?;
        self.table = Some(table);
        Ok(())
    }

    pub(crate) fn ensure(&mut self, services: &IndexServices) -> Result<()> {
        if self.table.is_none() {
            log::debug!(
                "reading item values of descriptor: {}",
                self.descriptor.descriptor_identifier
            );
            self.read(services)?;
        }
        Ok(())
    }

    fn ensure_table(&mut self, services: &IndexServices) -> Result<&mut PropertyTable> {
        self.ensure(services)?;
        self.table.as_mut().ok_or(Error::TableNotRead)
    }

    /// Deep-copies the materialised table from another item values.
    pub fn clone_table_from(&mut self, source: &ItemValues) -> Result<()> {
        if self.table.is_some() {
            return Err(Error::TableAlreadyRead);
        }
        self.table = source.table.clone();
        Ok(())
    }

    /// Looks up a local descriptor in the table's tree. Requires a
    /// materialised table; `Ok(None)` when the identifier is absent.
    pub fn local_descriptors_value_by_identifier(
        &mut self,
        file_io: &mut dyn FileIo,
        identifier: u32,
    ) -> Result<Option<LocalDescriptorValue>> {
        let table = self.table.as_mut().ok_or(Error::TableNotRead)?;
        table.local_descriptors_value_by_identifier(file_io, u64::from(identifier))
    }

    /// The number of record sets, reading the table if needed.
    pub fn number_of_record_sets(&mut self, services: &IndexServices) -> Result<usize> {
        Ok(self.ensure_table(services)?.number_of_record_sets())
    }

    /// Finds a record entry by entry and value type pair, reading the
    /// table if needed; `Ok(None)` when absent.
    pub fn record_entry_by_type(
        &mut self,
        services: &IndexServices,
        record_set_index: usize,
        entry_type: u32,
        value_type: u32,
        flags: MatchFlags,
    ) -> Result<Option<&RecordEntry>> {
        let table = self.ensure_table(services)?;
        Ok(table
            .record_set(record_set_index)?
            .entry_by_type(entry_type, value_type, flags))
    }

    pub(crate) fn record_entry_by_type_mut(
        &mut self,
        services: &IndexServices,
        record_set_index: usize,
        entry_type: u32,
        value_type: u32,
        flags: MatchFlags,
    ) -> Result<Option<&mut RecordEntry>> {
        let table = self.ensure_table(services)?;
        Ok(table
            .record_set_mut(record_set_index)?
            .entry_by_type_mut(entry_type, value_type, flags))
    }

    /// Finds a record entry by UTF-8 property name, reading the table if
    /// needed; `Ok(None)` when absent or without a name-to-id map.
    pub fn record_entry_by_utf8_name(
        &mut self,
        services: &IndexServices,
        record_set_index: usize,
        name: &str,
        value_type: u32,
        flags: MatchFlags,
    ) -> Result<Option<&RecordEntry>> {
        let table = self.ensure_table(services)?;
        Ok(table
            .record_set(record_set_index)?
            .entry_by_utf8_name(name, value_type, flags))
    }

    /// Finds a record entry by UTF-16 property name, reading the table
    /// if needed; `Ok(None)` when absent or without a name-to-id map.
    pub fn record_entry_by_utf16_name(
        &mut self,
        services: &IndexServices,
        record_set_index: usize,
        name: &[u16],
        value_type: u32,
        flags: MatchFlags,
    ) -> Result<Option<&RecordEntry>> {
        let table = self.ensure_table(services)?;
        Ok(table
            .record_set(record_set_index)?
            .entry_by_utf16_name(name, value_type, flags))
    }
}
