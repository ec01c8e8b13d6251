//! Record sets: one logical row of a property table.

use modular_bitfield::prelude::*;

use crate::name_to_id_map::NameToIdMapEntry;
use crate::record_entry::{RecordEntry, RecordEntryId};
use crate::{Error, Result};

/// Flags controlling record entry lookup.
///
/// By default the value type must match exactly and name-to-id mapped
/// properties are addressed through their mapped entry type value.
#[bitfield]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchFlags {
    /// Accept any value type instead of requiring equality.
    pub match_any_value_type: bool,
    /// Match on the raw entry type, bypassing the name-to-id map. Named
    /// properties are not retrievable this way.
    pub ignore_name_to_id_map: bool,
    #[skip]
    __: B6,
}

/// An ordered array of record entries plus the codepage its
/// extended-ASCII strings inherit.
///
/// Entry indices are stable for the lifetime of the set; lookups return
/// the first matching entry in insertion order.
#[derive(Debug, Clone)]
pub struct RecordSet {
    entries: Vec<RecordEntry>,
    ascii_codepage: u32,
}

impl RecordSet {
    /// Creates a record set holding `number_of_entries` default entries,
    /// each inheriting the codepage.
    pub fn new(number_of_entries: usize, ascii_codepage: u32) -> Self {
        Self {
            entries: (0..number_of_entries)
                .map(|_| RecordEntry::new(ascii_codepage))
                .collect(),
            ascii_codepage,
        }
    }

    pub fn ascii_codepage(&self) -> u32 {
        self.ascii_codepage
    }

    pub fn number_of_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grows with default entries inheriting the codepage, or shrinks
    /// dropping the tail.
    pub fn resize(&mut self, number_of_entries: usize) {
        let ascii_codepage = self.ascii_codepage;
        self.entries
            .resize_with(number_of_entries, || RecordEntry::new(ascii_codepage));
    }

    /// Appends an entry, e.g. while a table reader populates the set.
    pub fn push_entry(&mut self, entry: RecordEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[RecordEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [RecordEntry] {
        &mut self.entries
    }

    pub fn entry_by_index(&self, index: usize) -> Result<&RecordEntry> {
        self.entries.get(index).ok_or(Error::RecordEntryIndex(index))
    }

    pub fn entry_by_index_mut(&mut self, index: usize) -> Result<&mut RecordEntry> {
        self.entries
            .get_mut(index)
            .ok_or(Error::RecordEntryIndex(index))
    }

    fn position_by_type(&self, entry_type: u32, value_type: u32, flags: MatchFlags) -> Option<usize> {
        self.entries.iter().position(|entry| {
            // Skip table entries that do not carry a MAPI identifier.
            let RecordEntryId::MapiProperty {
                entry_type: raw_entry_type,
                value_type: raw_value_type,
            } = entry.identifier()
            else {
                return false;
            };
            let matched = if flags.ignore_name_to_id_map() {
                raw_entry_type == entry_type
            } else if let Some(map_entry) = entry.name_to_id_map_entry() {
                // Mapped properties are addressed through their mapped
                // entry type value.
                matches!(map_entry.as_ref(), NameToIdMapEntry::Numeric(value) if *value == entry_type)
            } else {
                raw_entry_type == entry_type
            };
            matched && (flags.match_any_value_type() || raw_value_type == value_type)
        })
    }

    fn position_by_utf8_name(&self, name: &str, value_type: u32, flags: MatchFlags) -> Option<usize> {
        self.entries.iter().position(|entry| {
            entry
                .name_to_id_map_entry()
                .is_some_and(|map_entry| map_entry.matches_utf8_name(name))
                && (flags.match_any_value_type() || entry.value_type() == Some(value_type))
        })
    }

    fn position_by_utf16_name(
        &self,
        name: &[u16],
        value_type: u32,
        flags: MatchFlags,
    ) -> Option<usize> {
        self.entries.iter().position(|entry| {
            entry
                .name_to_id_map_entry()
                .is_some_and(|map_entry| map_entry.matches_utf16_name(name))
                && (flags.match_any_value_type() || entry.value_type() == Some(value_type))
        })
    }

    /// Finds the first record entry matching the entry and value type
    /// pair; `None` when absent.
    pub fn entry_by_type(
        &self,
        entry_type: u32,
        value_type: u32,
        flags: MatchFlags,
    ) -> Option<&RecordEntry> {
        let index = self.position_by_type(entry_type, value_type, flags)?;
        self.entries.get(index)
    }

    pub fn entry_by_type_mut(
        &mut self,
        entry_type: u32,
        value_type: u32,
        flags: MatchFlags,
    ) -> Option<&mut RecordEntry> {
        let index = self.position_by_type(entry_type, value_type, flags)?;
        self.entries.get_mut(index)
    }

    /// Finds the first record entry whose name-to-id binding matches a
    /// UTF-8 encoded property name.
    pub fn entry_by_utf8_name(
        &self,
        name: &str,
        value_type: u32,
        flags: MatchFlags,
    ) -> Option<&RecordEntry> {
        let index = self.position_by_utf8_name(name, value_type, flags)?;
        self.entries.get(index)
    }

    pub fn entry_by_utf8_name_mut(
        &mut self,
        name: &str,
        value_type: u32,
        flags: MatchFlags,
    ) -> Option<&mut RecordEntry> {
        let index = self.position_by_utf8_name(name, value_type, flags)?;
        self.entries.get_mut(index)
    }

    /// Finds the first record entry whose name-to-id binding matches a
    /// UTF-16 encoded property name.
    pub fn entry_by_utf16_name(
        &self,
        name: &[u16],
        value_type: u32,
        flags: MatchFlags,
    ) -> Option<&RecordEntry> {
        let index = self.position_by_utf16_name(name, value_type, flags)?;
        self.entries.get(index)
    }

    pub fn entry_by_utf16_name_mut(
        &mut self,
        name: &[u16],
        value_type: u32,
        flags: MatchFlags,
    ) -> Option<&mut RecordEntry> {
        let index = self.position_by_utf16_name(name, value_type, flags)?;
        self.entries.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pff_mapi::ValueType;

    use super::*;

    fn sample_set() -> RecordSet {
        let mut record_set = RecordSet::new(0, 1252);
        record_set.push_entry(RecordEntry::mapi_property(
            0x3705,
            ValueType::Integer32.to_u32(),
            Some(1i32.to_le_bytes().to_vec()),
            1252,
        ));
        record_set.push_entry(RecordEntry::mapi_property(
            0x3001,
            ValueType::Unicode.to_u32(),
            Some(vec![0x41, 0x00]),
            1252,
        ));
        record_set
    }

    #[test]
    fn test_new_inherits_codepage() {
        let record_set = RecordSet::new(3, 1251);
        assert_eq!(record_set.number_of_entries(), 3);
        assert_eq!(record_set.entry_by_index(0).unwrap().ascii_codepage(), 1251);
        assert!(record_set.entry_by_index(3).is_err());
    }

    #[test]
    fn test_resize() {
        let mut record_set = RecordSet::new(1, 1252);
        record_set.resize(4);
        assert_eq!(record_set.number_of_entries(), 4);
        assert_eq!(record_set.entry_by_index(3).unwrap().ascii_codepage(), 1252);

        record_set.resize(0);
        assert!(record_set.is_empty());
        record_set.resize(2);
        assert_eq!(record_set.number_of_entries(), 2);
    }

    #[test]
    fn test_entry_by_type_strict_value_type() {
        let record_set = sample_set();
        let entry = record_set
            .entry_by_type(0x3705, ValueType::Integer32.to_u32(), MatchFlags::new())
            .unwrap();
        assert_eq!(entry.entry_type(), Some(0x3705));

        // Wrong value type under strict matching.
        assert!(
            record_set
                .entry_by_type(0x3705, ValueType::Integer64.to_u32(), MatchFlags::new())
                .is_none()
        );

        // Any value type accepted with the flag.
        assert!(
            record_set
                .entry_by_type(
                    0x3705,
                    0,
                    MatchFlags::new().with_match_any_value_type(true)
                )
                .is_some()
        );
    }

    #[test]
    fn test_entry_by_type_skips_non_mapi_entries() {
        let mut record_set = RecordSet::new(2, 1252);
        record_set.push_entry(RecordEntry::mapi_property(
            0x0E20,
            ValueType::Integer32.to_u32(),
            Some(9i32.to_le_bytes().to_vec()),
            1252,
        ));
        // The two default entries in front are not candidates.
        let entry = record_set
            .entry_by_type(0x0E20, ValueType::Integer32.to_u32(), MatchFlags::new())
            .unwrap();
        assert_eq!(entry.as_32bit_integer().unwrap(), 9);
    }

    #[test]
    fn test_numeric_name_map_alias() {
        let mut record_set = sample_set();
        let alias = Rc::new(NameToIdMapEntry::Numeric(0x8102));
        record_set.entries_mut()[0].set_name_to_id_map_entry(alias);

        // The mapped entry is addressed through the alias value.
        assert!(
            record_set
                .entry_by_type(0x8102, ValueType::Integer32.to_u32(), MatchFlags::new())
                .is_some()
        );
        // The raw entry type no longer matches under default flags.
        assert!(
            record_set
                .entry_by_type(0x3705, ValueType::Integer32.to_u32(), MatchFlags::new())
                .is_none()
        );
        // Unless the name-to-id map is ignored.
        assert!(
            record_set
                .entry_by_type(
                    0x3705,
                    ValueType::Integer32.to_u32(),
                    MatchFlags::new().with_ignore_name_to_id_map(true)
                )
                .is_some()
        );
    }

    #[test]
    fn test_string_name_binding_not_found_by_type() {
        let mut record_set = sample_set();
        let name = Rc::new(NameToIdMapEntry::ascii_name("Keywords"));
        record_set.entries_mut()[0].set_name_to_id_map_entry(name);

        assert!(
            record_set
                .entry_by_type(0x3705, ValueType::Integer32.to_u32(), MatchFlags::new())
                .is_none()
        );
    }

    #[test]
    fn test_entry_by_name() {
        let mut record_set = sample_set();
        let name = Rc::new(NameToIdMapEntry::ascii_name("Keywords"));
        record_set.entries_mut()[1].set_name_to_id_map_entry(name);

        let entry = record_set
            .entry_by_utf8_name("Keywords", ValueType::Unicode.to_u32(), MatchFlags::new())
            .unwrap();
        assert_eq!(entry.entry_type(), Some(0x3001));

        assert!(
            record_set
                .entry_by_utf8_name("Other", ValueType::Unicode.to_u32(), MatchFlags::new())
                .is_none()
        );
        // Strict value type applies to name lookups too.
        assert!(
            record_set
                .entry_by_utf8_name("Keywords", ValueType::String8.to_u32(), MatchFlags::new())
                .is_none()
        );

        let utf16_name: Vec<u16> = "Keywords".encode_utf16().collect();
        assert!(
            record_set
                .entry_by_utf16_name(
                    &utf16_name,
                    0,
                    MatchFlags::new().with_match_any_value_type(true)
                )
                .is_some()
        );
    }

    #[test]
    fn test_first_match_wins() {
        let mut record_set = RecordSet::new(0, 1252);
        record_set.push_entry(RecordEntry::mapi_property(
            0x0E20,
            ValueType::Integer32.to_u32(),
            Some(1i32.to_le_bytes().to_vec()),
            1252,
        ));
        record_set.push_entry(RecordEntry::mapi_property(
            0x0E20,
            ValueType::Integer32.to_u32(),
            Some(2i32.to_le_bytes().to_vec()),
            1252,
        ));
        let entry = record_set
            .entry_by_type(0x0E20, ValueType::Integer32.to_u32(), MatchFlags::new())
            .unwrap();
        assert_eq!(entry.as_32bit_integer().unwrap(), 1);
    }

    #[test]
    fn test_entry_identity_is_stable_across_lookups() {
        let record_set = sample_set();
        let first = record_set.entry_by_index(0).unwrap() as *const RecordEntry;
        let by_type = record_set
            .entry_by_type(
                0x3705,
                ValueType::Integer32.to_u32(),
                MatchFlags::new(),
            )
            .unwrap() as *const RecordEntry;
        assert_eq!(first, by_type);
    }
}
