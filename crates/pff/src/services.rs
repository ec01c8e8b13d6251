//! Collaborator traits for the container's index structures.
//!
//! The core decodes property tables and attachment data; where the bytes
//! come from (descriptor and offsets indexes, block reassembly,
//! encryption unmasking) is the node database's business. A container
//! revision supplies implementations of these traits and the core stays
//! unchanged.

use std::cell::RefCell;
use std::io::SeekFrom;
use std::rc::Rc;

use crate::Result;
use crate::io::FileIo;
use crate::name_to_id_map::NameToIdMap;
use crate::table::PropertyTable;

/// The descriptor tuple an item is materialised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDescriptor {
    pub descriptor_identifier: u32,
    pub data_identifier: u64,
    pub local_descriptors_identifier: u64,
    /// Set when the descriptor was found by recovery scanning instead of
    /// through the descriptor index.
    pub recovered: bool,
}

impl ItemDescriptor {
    pub const fn new(
        descriptor_identifier: u32,
        data_identifier: u64,
        local_descriptors_identifier: u64,
        recovered: bool,
    ) -> Self {
        Self {
            descriptor_identifier,
            data_identifier,
            local_descriptors_identifier,
            recovered,
        }
    }
}

/// An opaque handle onto an item tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// An owned local descriptor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDescriptorValue {
    pub identifier: u64,
    pub data_identifier: u64,
    pub local_descriptors_identifier: u64,
}

/// The item values table reader and streaming data backend.
pub trait NodeDatabase {
    /// Decodes the property table of a descriptor: one or more record
    /// sets whose value buffers have been demasked and, where needed,
    /// reassembled from multi-block descriptors. Name-to-id bindings are
    /// resolved against the supplied map.
    fn read_table(
        &mut self,
        descriptor: &ItemDescriptor,
        file_io: &mut dyn FileIo,
        name_to_id_map: Option<&NameToIdMap>,
    ) -> Result<PropertyTable>;

    /// Opens a streaming reader over the data of a descriptor, without
    /// materialising it in memory.
    fn open_data_stream(
        &mut self,
        file_io: &mut dyn FileIo,
        data_identifier: u64,
        recovered: bool,
    ) -> Result<Box<dyn DataStream>>;
}

/// The local descriptors tree attached to one property table.
pub trait LocalDescriptorsTree {
    /// Looks up a local descriptor; `Ok(None)` when the identifier is
    /// absent.
    fn value_by_identifier(
        &mut self,
        file_io: &mut dyn FileIo,
        identifier: u64,
    ) -> Result<Option<LocalDescriptorValue>>;
}

/// A streamed data value, e.g. an OLE embedded object.
pub trait DataStream {
    /// Reads up to `buffer.len()` bytes at the current stream offset.
    fn read_buffer(&mut self, file_io: &mut dyn FileIo, buffer: &mut [u8]) -> Result<usize>;

    /// Moves the stream offset and returns the new absolute position.
    fn seek_offset(&mut self, position: SeekFrom) -> Result<u64>;

    /// The total stream size.
    fn size(&mut self, file_io: &mut dyn FileIo) -> Result<u64>;
}

/// The tree of item descriptors of one container.
pub trait ItemTree {
    /// Finds the node carrying a descriptor identifier; `Ok(None)` when
    /// absent from the tree.
    fn node_by_identifier(&mut self, identifier: u32) -> Result<Option<NodeHandle>>;

    /// Appends a child descriptor under a parent node.
    fn append_identifier(
        &mut self,
        parent: NodeHandle,
        identifier: u32,
        data_identifier: u64,
        local_descriptors_identifier: u64,
        recovered: bool,
    ) -> Result<()>;

    fn number_of_sub_nodes(&mut self, node: NodeHandle) -> Result<usize>;

    fn sub_node_by_index(&mut self, node: NodeHandle, index: usize) -> Result<NodeHandle>;

    /// The descriptor stored on a node.
    fn node_descriptor(&mut self, node: NodeHandle) -> Result<ItemDescriptor>;
}

/// The bundle of collaborators a container hands to its items.
///
/// Shared by handle: the core is single-threaded, so `Rc<RefCell<_>>`
/// carries the exclusive-access contract at runtime, and two containers
/// on two threads never interact.
#[derive(Clone)]
pub struct IndexServices {
    pub file_io: Rc<RefCell<dyn FileIo>>,
    pub node_database: Rc<RefCell<dyn NodeDatabase>>,
    pub item_tree: Rc<RefCell<dyn ItemTree>>,
    /// The container's name-to-id map; named-property lookups are
    /// `NotFound` without one.
    pub name_to_id_map: Option<Rc<NameToIdMap>>,
}
