//! The container file facade.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Result;
use crate::io::FileIo;
use crate::item::Item;
use crate::name_to_id_map::NameToIdMap;
use crate::services::{IndexServices, ItemDescriptor, ItemTree, NodeDatabase, NodeHandle};

/// A read-only handle onto one PFF container.
///
/// The container's on-disk index structures arrive as collaborator
/// implementations; the file handle wires them into an
/// [`IndexServices`] bundle and vends [`Item`] handles. Two files on two
/// threads never interact.
pub struct File {
    services: IndexServices,
}

impl File {
    pub fn new(
        file_io: Rc<RefCell<dyn FileIo>>,
        node_database: Rc<RefCell<dyn NodeDatabase>>,
        item_tree: Rc<RefCell<dyn ItemTree>>,
    ) -> Self {
        Self {
            services: IndexServices {
                file_io,
                node_database,
                item_tree,
                name_to_id_map: None,
            },
        }
    }

    /// Installs the container's name-to-id map. Named-property lookups
    /// return not-found without one.
    pub fn with_name_to_id_map(mut self, name_to_id_map: Rc<NameToIdMap>) -> Self {
        self.services.name_to_id_map = Some(name_to_id_map);
        self
    }

    pub fn services(&self) -> &IndexServices {
        &self.services
    }

    pub fn name_to_id_map(&self) -> Option<&Rc<NameToIdMap>> {
        self.services.name_to_id_map.as_ref()
    }

    /// Finds the item carrying a descriptor identifier; `Ok(None)` when
    /// the identifier is absent from the item tree.
    pub fn item_by_identifier(&self, identifier: u32) -> Result<Option<Item>> {
        let mut item_tree = self.services.item_tree.borrow_mut();
        let Some(node) = item_tree.node_by_identifier(identifier)? else {
            return Ok(None);
        };
        let descriptor = item_tree.node_descriptor(node)?;
        drop(item_tree);
        Ok(Some(Item::new(self.services.clone(), node, descriptor)))
    }

    /// Wraps a known tree node without searching the item tree.
    pub fn item_for_node(&self, node: NodeHandle, descriptor: ItemDescriptor) -> Item {
        Item::new(self.services.clone(), node, descriptor)
    }
}
