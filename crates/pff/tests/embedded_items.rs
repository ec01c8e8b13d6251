//! End-to-end tests of the attachment layer against mock index services:
//! table auto-read, attachment dispatch, OLE data streaming, embedded
//! message promotion and the attached-file adapter.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek, SeekFrom};
use std::rc::Rc;

use pff::{
    AccessFlags, Attachment, AttachmentType, DataStream, Error, File, FileIo, IndexServices,
    ItemDescriptor, ItemTree, ItemValues, LocalDescriptorValue, LocalDescriptorsTree, MatchFlags,
    NameToIdMap, NameToIdMapEntry, NodeDatabase, NodeHandle, PropertyTable, RecordEntry,
    RecordSet, ValueType,
};
use pff_mapi::entry_type;

const ATTACHMENT_DESCRIPTOR: u32 = 0x2121;
const EMBEDDED_DESCRIPTOR: u32 = 0x8025;

struct MockNode {
    identifier: u32,
    descriptor: ItemDescriptor,
    children: Vec<usize>,
}

#[derive(Default)]
struct MockItemTree {
    nodes: Vec<MockNode>,
}

impl MockItemTree {
    fn add_root(&mut self, descriptor: ItemDescriptor) -> NodeHandle {
        self.nodes.push(MockNode {
            identifier: descriptor.descriptor_identifier,
            descriptor,
            children: Vec::new(),
        });
        NodeHandle((self.nodes.len() - 1) as u64)
    }
}

impl ItemTree for MockItemTree {
    fn node_by_identifier(&mut self, identifier: u32) -> pff::Result<Option<NodeHandle>> {
        Ok(self
            .nodes
            .iter()
            .position(|node| node.identifier == identifier)
            .map(|index| NodeHandle(index as u64)))
    }

    fn append_identifier(
        &mut self,
        parent: NodeHandle,
        identifier: u32,
        data_identifier: u64,
        local_descriptors_identifier: u64,
        recovered: bool,
    ) -> pff::Result<()> {
        let descriptor = ItemDescriptor::new(
            identifier,
            data_identifier,
            local_descriptors_identifier,
            recovered,
        );
        self.nodes.push(MockNode {
            identifier,
            descriptor,
            children: Vec::new(),
        });
        let child = self.nodes.len() - 1;
        self.nodes[parent.0 as usize].children.push(child);
        Ok(())
    }

    fn number_of_sub_nodes(&mut self, node: NodeHandle) -> pff::Result<usize> {
        Ok(self.nodes[node.0 as usize].children.len())
    }

    fn sub_node_by_index(&mut self, node: NodeHandle, index: usize) -> pff::Result<NodeHandle> {
        Ok(NodeHandle(self.nodes[node.0 as usize].children[index] as u64))
    }

    fn node_descriptor(&mut self, node: NodeHandle) -> pff::Result<ItemDescriptor> {
        Ok(self.nodes[node.0 as usize].descriptor)
    }
}

struct MockStream {
    data: Vec<u8>,
    offset: usize,
}

impl DataStream for MockStream {
    fn read_buffer(&mut self, _file_io: &mut dyn FileIo, buffer: &mut [u8]) -> pff::Result<usize> {
        let remaining = self.data.len().saturating_sub(self.offset);
        let count = buffer.len().min(remaining);
        buffer[..count].copy_from_slice(&self.data[self.offset..self.offset + count]);
        self.offset += count;
        Ok(count)
    }

    fn seek_offset(&mut self, position: SeekFrom) -> pff::Result<u64> {
        let size = self.data.len() as i64;
        let offset = match position {
            SeekFrom::Start(offset) => offset as i64,
            SeekFrom::Current(delta) => self.offset as i64 + delta,
            SeekFrom::End(delta) => size + delta,
        };
        if offset < 0 || offset > size {
            return Err(Error::SeekOutOfBounds(offset));
        }
        self.offset = offset as usize;
        Ok(offset as u64)
    }

    fn size(&mut self, _file_io: &mut dyn FileIo) -> pff::Result<u64> {
        Ok(self.data.len() as u64)
    }
}

#[derive(Default)]
struct MockNodeDatabase {
    tables: HashMap<u32, PropertyTable>,
    streams: HashMap<u64, Vec<u8>>,
    table_reads: usize,
    stream_opens: usize,
}

impl NodeDatabase for MockNodeDatabase {
    fn read_table(
        &mut self,
        descriptor: &ItemDescriptor,
        _file_io: &mut dyn FileIo,
        _name_to_id_map: Option<&NameToIdMap>,
    ) -> pff::Result<PropertyTable> {
        self.table_reads += 1;
        self.tables
            .get(&descriptor.descriptor_identifier)
            .cloned()
            .ok_or(Error::Unsupported("unknown descriptor"))
    }

    fn open_data_stream(
        &mut self,
        _file_io: &mut dyn FileIo,
        data_identifier: u64,
        _recovered: bool,
    ) -> pff::Result<Box<dyn DataStream>> {
        self.stream_opens += 1;
        let data = self
            .streams
            .get(&data_identifier)
            .cloned()
            .ok_or(Error::Unsupported("unknown data identifier"))?;
        Ok(Box::new(MockStream { data, offset: 0 }))
    }
}

struct MockLocalDescriptors {
    values: Vec<LocalDescriptorValue>,
}

impl LocalDescriptorsTree for MockLocalDescriptors {
    fn value_by_identifier(
        &mut self,
        _file_io: &mut dyn FileIo,
        identifier: u64,
    ) -> pff::Result<Option<LocalDescriptorValue>> {
        Ok(self
            .values
            .iter()
            .find(|value| value.identifier == identifier)
            .copied())
    }
}

struct Fixture {
    file: File,
    item_tree: Rc<RefCell<MockItemTree>>,
    node_database: Rc<RefCell<MockNodeDatabase>>,
}

fn fixture() -> Fixture {
    let file_io = Rc::new(RefCell::new(Cursor::new(Vec::<u8>::new())));
    let item_tree = Rc::new(RefCell::new(MockItemTree::default()));
    let node_database = Rc::new(RefCell::new(MockNodeDatabase::default()));
    let file = File::new(file_io, node_database.clone(), item_tree.clone());
    Fixture {
        file,
        item_tree,
        node_database,
    }
}

fn attachment_record_set(
    method: u32,
    data_value_type: Option<u32>,
    data: Option<Vec<u8>>,
) -> RecordSet {
    let mut record_set = RecordSet::new(0, 1252);
    record_set.push_entry(RecordEntry::mapi_property(
        entry_type::ATTACHMENT_METHOD,
        ValueType::Integer32.to_u32(),
        Some(method.to_le_bytes().to_vec()),
        1252,
    ));
    if let Some(value_type) = data_value_type {
        record_set.push_entry(RecordEntry::mapi_property(
            entry_type::ATTACHMENT_DATA_OBJECT,
            value_type,
            data,
            1252,
        ));
    }
    record_set
}

impl Fixture {
    /// Registers an attachment item whose table holds `record_set` and
    /// the given local descriptors, and wraps it.
    fn attachment(
        &self,
        record_set: RecordSet,
        local_descriptors: Vec<LocalDescriptorValue>,
    ) -> Attachment {
        self.attachment_with_descriptor(
            ItemDescriptor::new(ATTACHMENT_DESCRIPTOR, 0x100, 0x200, false),
            record_set,
            local_descriptors,
        )
    }

    fn attachment_with_descriptor(
        &self,
        descriptor: ItemDescriptor,
        record_set: RecordSet,
        local_descriptors: Vec<LocalDescriptorValue>,
    ) -> Attachment {
        let node = self.item_tree.borrow_mut().add_root(descriptor);
        let table = PropertyTable::new(
            vec![record_set],
            Some(Rc::new(RefCell::new(MockLocalDescriptors {
                values: local_descriptors,
            }))),
        );
        self.node_database
            .borrow_mut()
            .tables
            .insert(descriptor.descriptor_identifier, table);
        Attachment::new(self.file.item_for_node(node, descriptor))
    }
}

#[test]
fn test_attachment_dispatch_table() {
    let binary = ValueType::Binary.to_u32();
    let object = ValueType::Object.to_u32();

    let accepted = [
        (2, None, AttachmentType::Reference),
        (1, Some(binary), AttachmentType::Data),
        (5, Some(binary), AttachmentType::Data),
        (6, Some(binary), AttachmentType::Data),
        (5, Some(object), AttachmentType::Item),
        (6, Some(object), AttachmentType::Data),
    ];
    for (method, value_type, expected) in accepted {
        let fixture = fixture();
        let attachment = fixture.attachment(
            attachment_record_set(method, value_type, Some(vec![0u8; 4])),
            Vec::new(),
        );
        assert_eq!(
            attachment.attachment_type().unwrap(),
            expected,
            "method {method} value type {value_type:?}"
        );
    }
}

#[test]
fn test_attachment_dispatch_rejects_unknown_combinations() {
    // afByValue may not carry an object reference.
    {
        let fixture = fixture();
        let attachment = fixture.attachment(
            attachment_record_set(1, Some(ValueType::Object.to_u32()), Some(vec![0u8; 4])),
            Vec::new(),
        );
        assert!(matches!(
            attachment.attachment_type(),
            Err(Error::UnsupportedAttachmentValueType(0x000D))
        ));
    }

    // An integer is no attachment payload.
    {
        let fixture = fixture();
        let attachment = fixture.attachment(
            attachment_record_set(6, Some(ValueType::Integer32.to_u32()), Some(vec![0u8; 4])),
            Vec::new(),
        );
        assert!(matches!(
            attachment.attachment_type(),
            Err(Error::UnsupportedAttachmentValueType(0x0003))
        ));
    }

    // Unsupported methods, afByReferenceOnly included.
    for method in [3u32, 4, 7] {
        let fixture = fixture();
        let attachment = fixture.attachment(
            attachment_record_set(method, Some(ValueType::Binary.to_u32()), Some(vec![1])),
            Vec::new(),
        );
        assert!(matches!(
            attachment.attachment_type(),
            Err(Error::UnsupportedAttachmentMethod(m)) if m == method
        ));
    }

    // Method NONE tolerates no data object entry.
    {
        let fixture = fixture();
        let attachment = fixture.attachment(attachment_record_set(0, None, None), Vec::new());
        assert_eq!(attachment.attachment_type().unwrap(), AttachmentType::None);
    }

    {
        let fixture = fixture();
        let attachment = fixture.attachment(
            attachment_record_set(0, Some(ValueType::Binary.to_u32()), Some(vec![1])),
            Vec::new(),
        );
        assert!(matches!(
            attachment.attachment_type(),
            Err(Error::UnexpectedAttachmentData)
        ));
    }

    // An attachment without a method entry is malformed.
    {
        let fixture = fixture();
        let attachment = fixture.attachment(RecordSet::new(0, 1252), Vec::new());
        assert!(matches!(
            attachment.attachment_type(),
            Err(Error::MissingEntry(0x3705))
        ));
    }
}

#[test]
fn test_table_is_read_once() {
    let fixture = fixture();
    let attachment = fixture.attachment(
        attachment_record_set(1, Some(ValueType::Binary.to_u32()), Some(vec![1, 2, 3])),
        Vec::new(),
    );
    let item = attachment.item();
    assert_eq!(item.number_of_record_sets().unwrap(), 1);
    assert_eq!(item.number_of_record_sets().unwrap(), 1);
    assert_eq!(attachment.data_size().unwrap(), Some(3));
    assert_eq!(fixture.node_database.borrow().table_reads, 1);
}

#[test]
fn test_explicit_read_is_one_shot() {
    let fixture = fixture();
    let _ = fixture.attachment(
        attachment_record_set(1, Some(ValueType::Binary.to_u32()), Some(vec![1])),
        Vec::new(),
    );
    let services: IndexServices = fixture.file.services().clone();
    let descriptor = ItemDescriptor::new(ATTACHMENT_DESCRIPTOR, 0x100, 0x200, false);

    let mut values = ItemValues::new(descriptor);
    values.read(&services).unwrap();
    assert!(values.is_read());
    assert!(matches!(values.read(&services), Err(Error::TableAlreadyRead)));

    // Duplicating an item deep-copies its materialised table.
    let mut copy = ItemValues::new(descriptor);
    copy.clone_table_from(&values).unwrap();
    assert!(copy.is_read());
    assert!(matches!(
        copy.clone_table_from(&values),
        Err(Error::TableAlreadyRead)
    ));
    assert!(matches!(copy.read(&services), Err(Error::TableAlreadyRead)));
}

#[test]
fn test_data_attachment_read_and_seek() {
    let fixture = fixture();
    let mut record_set = attachment_record_set(
        1,
        Some(ValueType::Binary.to_u32()),
        Some(b"attachment contents".to_vec()),
    );
    // PidTagAttachLongFilename, "report.pdf" in UTF-16LE.
    record_set.push_entry(RecordEntry::mapi_property(
        entry_type::ATTACHMENT_FILENAME_LONG,
        ValueType::Unicode.to_u32(),
        Some(pff_tests::hex_to_bytes(
            "7200650070006f00720074002e00700064006600",
        )),
        1252,
    ));
    let mut attachment = fixture.attachment(record_set, Vec::new());

    let filename = attachment
        .item()
        .record_entry_by_type(
            0,
            entry_type::ATTACHMENT_FILENAME_LONG,
            ValueType::Unicode.to_u32(),
            MatchFlags::new(),
        )
        .unwrap()
        .unwrap();
    assert_eq!(filename.as_utf8_string().unwrap(), "report.pdf");
    drop(filename);

    assert_eq!(attachment.data_size().unwrap(), Some(19));

    let mut buffer = [0u8; 10];
    assert_eq!(attachment.read_data(&mut buffer).unwrap(), 10);
    assert_eq!(&buffer, b"attachment");

    assert_eq!(attachment.seek_data(SeekFrom::End(-8)).unwrap(), 11);
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4];
    loop {
        let count = attachment.read_data(&mut chunk).unwrap();
        if count == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..count]);
    }
    assert_eq!(buffer, b"contents");
}

#[test]
fn test_attached_file_state_machine() {
    let fixture = fixture();
    let attachment = fixture.attachment(
        attachment_record_set(
            1,
            Some(ValueType::Binary.to_u32()),
            Some(b"file payload".to_vec()),
        ),
        Vec::new(),
    );
    let mut attached_file = attachment.data_file();

    // Size is permitted in any state; reads are not.
    assert_eq!(attached_file.size().unwrap(), 12);
    assert!(!attached_file.is_open());
    assert!(attached_file.exists());
    assert!(matches!(
        attached_file.read_buffer(&mut [0u8; 4]),
        Err(Error::NotOpen)
    ));
    assert!(matches!(
        attached_file.seek_offset(SeekFrom::Start(0)),
        Err(Error::NotOpen)
    ));

    // Write access is rejected at open.
    assert!(matches!(
        attached_file.open(AccessFlags::new().with_read(true).with_write(true)),
        Err(Error::UnsupportedAccessFlags)
    ));
    assert!(matches!(
        attached_file.open(AccessFlags::new()),
        Err(Error::UnsupportedAccessFlags)
    ));

    attached_file.open(AccessFlags::read_only()).unwrap();
    assert!(attached_file.is_open());
    assert!(matches!(
        attached_file.open(AccessFlags::read_only()),
        Err(Error::AlreadyOpen)
    ));

    let mut buffer = [0u8; 4];
    assert_eq!(attached_file.read_buffer(&mut buffer).unwrap(), 4);
    assert_eq!(&buffer, b"file");

    // Writes never transfer bytes.
    assert!(matches!(
        attached_file.write_buffer(b"nope"),
        Err(Error::AccessDenied("write"))
    ));

    // Seek to the exact end is accepted, past the end is not.
    assert_eq!(attached_file.seek_offset(SeekFrom::End(0)).unwrap(), 12);
    assert_eq!(attached_file.read_buffer(&mut buffer).unwrap(), 0);
    assert!(matches!(
        attached_file.seek_offset(SeekFrom::Start(13)),
        Err(Error::SeekOutOfBounds(13))
    ));

    // The clone starts closed and keeps the access flags.
    let mut cloned = attached_file.clone();
    assert!(!cloned.is_open());
    assert_eq!(cloned.access_flags(), attached_file.access_flags());
    assert_eq!(cloned.size().unwrap(), 12);

    attached_file.close().unwrap();
    assert!(!attached_file.is_open());
    assert!(matches!(attached_file.close(), Err(Error::NotOpen)));
    assert!(matches!(
        attached_file.read_buffer(&mut buffer),
        Err(Error::NotOpen)
    ));
    assert_eq!(attached_file.size().unwrap(), 12);

    // A closed handle can be re-opened.
    attached_file.open(AccessFlags::read_only()).unwrap();
    assert!(attached_file.is_open());
}

#[test]
fn test_attached_file_as_std_io() {
    let fixture = fixture();
    let attachment = fixture.attachment(
        attachment_record_set(
            1,
            Some(ValueType::Binary.to_u32()),
            Some(b"nested container image".to_vec()),
        ),
        Vec::new(),
    );
    let mut attached_file = attachment.data_file();
    attached_file.open(AccessFlags::read_only()).unwrap();

    // The adapter is a FileIo itself: it can drive a nested parse.
    attached_file.seek(SeekFrom::Start(7)).unwrap();
    let mut contents = String::new();
    attached_file.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "container image");
    assert_eq!(FileIo::size(&mut attached_file).unwrap(), 22);
}

#[test]
fn test_ole_attachment_streams_from_backend() {
    let fixture = fixture();
    let stream_bytes = b"OLE embedded object bytes".to_vec();
    fixture
        .node_database
        .borrow_mut()
        .streams
        .insert(0x9000, stream_bytes.clone());

    let object_reference = 0x61u32.to_le_bytes().to_vec();
    let mut attachment = fixture.attachment(
        attachment_record_set(6, Some(ValueType::Object.to_u32()), Some(object_reference)),
        vec![LocalDescriptorValue {
            identifier: 0x61,
            data_identifier: 0x9000,
            local_descriptors_identifier: 0,
        }],
    );

    assert_eq!(attachment.attachment_type().unwrap(), AttachmentType::Data);
    assert_eq!(
        attachment.data_size().unwrap(),
        Some(stream_bytes.len() as u64)
    );

    let mut buffer = [0u8; 3];
    assert_eq!(attachment.read_data(&mut buffer).unwrap(), 3);
    assert_eq!(&buffer, b"OLE");
    assert_eq!(attachment.seek_data(SeekFrom::Start(13)).unwrap(), 13);
    let mut buffer = [0u8; 6];
    assert_eq!(attachment.read_data(&mut buffer).unwrap(), 6);
    assert_eq!(&buffer, b"object");

    // The stream is materialised once and memoised on the item.
    assert_eq!(fixture.node_database.borrow().stream_opens, 1);
}

#[test]
fn test_embedded_message_promotion() {
    let fixture = fixture();

    // The embedded message's own property table.
    let mut message_set = RecordSet::new(0, 1252);
    message_set.push_entry(RecordEntry::mapi_property(
        0x0037,
        ValueType::String8.to_u32(),
        Some(b"embedded subject".to_vec()),
        1252,
    ));
    fixture
        .node_database
        .borrow_mut()
        .tables
        .insert(EMBEDDED_DESCRIPTOR, PropertyTable::new(vec![message_set], None));

    let object_reference = EMBEDDED_DESCRIPTOR.to_le_bytes().to_vec();
    let attachment = fixture.attachment(
        attachment_record_set(5, Some(ValueType::Object.to_u32()), Some(object_reference)),
        vec![LocalDescriptorValue {
            identifier: u64::from(EMBEDDED_DESCRIPTOR),
            data_identifier: 0x7000,
            local_descriptors_identifier: 0x7100,
        }],
    );

    assert_eq!(attachment.attachment_type().unwrap(), AttachmentType::Item);

    let embedded = attachment.embedded_item().unwrap().unwrap();
    let descriptor = embedded.descriptor();
    assert_eq!(descriptor.descriptor_identifier, EMBEDDED_DESCRIPTOR);
    assert_eq!(descriptor.data_identifier, 0x7000);
    assert_eq!(descriptor.local_descriptors_identifier, 0x7100);
    assert!(!descriptor.recovered);

    // The embedded item was appended as the sole sub node.
    {
        let mut item_tree = fixture.item_tree.borrow_mut();
        let attachment_node = item_tree
            .node_by_identifier(ATTACHMENT_DESCRIPTOR)
            .unwrap()
            .unwrap();
        assert_eq!(item_tree.number_of_sub_nodes(attachment_node).unwrap(), 1);
    }

    // The embedded item decodes its own table.
    let entry = embedded
        .record_entry_by_type(
            0,
            0x0037,
            ValueType::String8.to_u32(),
            MatchFlags::new(),
        )
        .unwrap()
        .unwrap();
    assert_eq!(entry.as_utf8_string().unwrap(), "embedded subject");
    drop(entry);

    // A second materialisation resolves through the item tree and does
    // not append another node.
    let again = attachment.embedded_item().unwrap().unwrap();
    assert_eq!(again.descriptor().descriptor_identifier, EMBEDDED_DESCRIPTOR);
    let mut item_tree = fixture.item_tree.borrow_mut();
    let attachment_node = item_tree
        .node_by_identifier(ATTACHMENT_DESCRIPTOR)
        .unwrap()
        .unwrap();
    assert_eq!(item_tree.number_of_sub_nodes(attachment_node).unwrap(), 1);
}

#[test]
fn test_embedded_item_missing_local_descriptor_is_fatal() {
    let fixture = fixture();
    let object_reference = 0x4242u32.to_le_bytes().to_vec();
    let attachment = fixture.attachment(
        attachment_record_set(5, Some(ValueType::Object.to_u32()), Some(object_reference)),
        Vec::new(),
    );
    assert!(matches!(
        attachment.embedded_item(),
        Err(Error::MissingLocalDescriptor(0x4242))
    ));
}

#[test]
fn test_embedded_item_without_value_data() {
    let fixture = fixture();
    let attachment = fixture.attachment(
        attachment_record_set(5, Some(ValueType::Object.to_u32()), None),
        Vec::new(),
    );
    assert!(attachment.embedded_item().unwrap().is_none());
}

#[test]
fn test_recovered_embedded_item_is_unsupported() {
    let fixture = fixture();
    let attachment = fixture.attachment_with_descriptor(
        ItemDescriptor::new(ATTACHMENT_DESCRIPTOR, 0x100, 0x200, true),
        attachment_record_set(
            5,
            Some(ValueType::Object.to_u32()),
            Some(0x4242u32.to_le_bytes().to_vec()),
        ),
        Vec::new(),
    );
    assert!(matches!(
        attachment.embedded_item(),
        Err(Error::Unsupported(_))
    ));
}

#[test]
fn test_named_property_lookup_through_item() {
    let fixture = fixture();

    let mut name_to_id_map = NameToIdMap::new();
    let binding = name_to_id_map
        .insert(NameToIdMapEntry::ascii_name("Keywords"))
        .unwrap();

    let mut record_set = RecordSet::new(0, 1252);
    let mut entry = RecordEntry::mapi_property(
        0x8011,
        ValueType::String8.to_u32(),
        Some(b"forensics".to_vec()),
        1252,
    );
    entry.set_name_to_id_map_entry(binding);
    record_set.push_entry(entry);

    let descriptor = ItemDescriptor::new(0x3333, 0x10, 0x20, false);
    let node = fixture.item_tree.borrow_mut().add_root(descriptor);
    fixture
        .node_database
        .borrow_mut()
        .tables
        .insert(0x3333, PropertyTable::new(vec![record_set], None));

    let file = fixture
        .file
        .with_name_to_id_map(Rc::new(name_to_id_map));
    let item = file.item_for_node(node, descriptor);

    let entry = item
        .record_entry_by_utf8_name(
            0,
            "Keywords",
            ValueType::String8.to_u32(),
            MatchFlags::new(),
        )
        .unwrap()
        .unwrap();
    assert_eq!(entry.as_utf8_string().unwrap(), "forensics");
    drop(entry);

    let utf16_name: Vec<u16> = "Keywords".encode_utf16().collect();
    assert!(
        item.record_entry_by_utf16_name(
            0,
            &utf16_name,
            0,
            MatchFlags::new().with_match_any_value_type(true)
        )
        .unwrap()
        .is_some()
    );

    assert!(
        item.record_entry_by_utf8_name(0, "Missing", 0, MatchFlags::new())
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_item_record_set_access() {
    let fixture = fixture();
    let attachment = fixture.attachment(
        attachment_record_set(1, Some(ValueType::Binary.to_u32()), Some(vec![1, 2])),
        Vec::new(),
    );
    let item = attachment.item();

    let record_set = item.record_set(0).unwrap();
    assert_eq!(record_set.number_of_entries(), 2);
    assert_eq!(record_set.ascii_codepage(), 1252);
    drop(record_set);

    assert!(matches!(item.record_set(1), Err(Error::RecordSetIndex(1))));

    assert!(
        item.record_entry_by_type(0, 0x9999, 0, MatchFlags::new().with_match_any_value_type(true))
            .unwrap()
            .is_none()
    );
    assert!(matches!(
        item.record_entry_by_type(9, 0x3705, 0, MatchFlags::new()),
        Err(Error::RecordSetIndex(9))
    ));
}
