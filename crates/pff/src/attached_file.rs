//! The attached-file IO adapter.

use std::io::{Read, Seek, SeekFrom, Write};

use modular_bitfield::prelude::*;

use pff_mapi::entry_type;

use crate::attachment::Attachment;
use crate::{Error, Result};

/// Access mode flags of an attached file.
#[bitfield]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessFlags {
    pub read: bool,
    pub write: bool,
    #[skip]
    __: B6,
}

impl AccessFlags {
    /// Read-only access, the only mode the library supports.
    pub fn read_only() -> Self {
        Self::new().with_read(true)
    }
}

/// A seekable, openable read-only file over the logical byte stream of
/// one attachment.
///
/// The handle never materialises the attachment in memory: reads are
/// delegated to the record entry cursor or, for OLE embedded objects, to
/// the streaming data backend. Lifecycle: created closed, opened for
/// read, streamed, closed; a closed handle can be re-opened.
///
/// Through its `Read`/`Seek` impls the handle doubles as a
/// [`FileIo`](crate::FileIo), so an attached container file can drive a
/// nested parse.
pub struct AttachedFile {
    attachment: Attachment,
    is_open: bool,
    access_flags: AccessFlags,
}

impl AttachedFile {
    /// Creates the handle in the closed state.
    pub fn new(attachment: Attachment) -> Self {
        Self {
            attachment,
            is_open: false,
            access_flags: AccessFlags::new(),
        }
    }

    pub fn attachment(&self) -> &Attachment {
        &self.attachment
    }

    /// Opens the handle. The flags must include read access and nothing
    /// beyond it; the library is read-only.
    pub fn open(&mut self, access_flags: AccessFlags) -> Result<()> {
        if self.is_open {
            return Err(Error::AlreadyOpen);
        }
        if !access_flags.read() || access_flags.write() {
            return Err(Error::UnsupportedAccessFlags);
        }
        self.access_flags = access_flags;
        self.is_open = true;
        Ok(())
    }

    /// Closes the handle; fails when not open.
    pub fn close(&mut self) -> Result<()> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        self.is_open = false;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the handle references an attachment item. Always true in
    /// this rendition: a handle cannot outlive its attachment.
    pub fn exists(&self) -> bool {
        true
    }

    pub fn access_flags(&self) -> AccessFlags {
        self.access_flags
    }

    /// Reads up to `buffer.len()` bytes of attachment data at the
    /// current offset. Requires an open handle with read access.
    pub fn read_buffer(&mut self, buffer: &mut [u8]) -> Result<usize> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        if !self.access_flags.read() {
            return Err(Error::AccessDenied("read"));
        }
        self.attachment.read_data(buffer)
    }

    /// Write is part of the interface, but the library is read-only:
    /// the request is validated and no bytes are ever written.
    pub fn write_buffer(&mut self, buffer: &[u8]) -> Result<usize> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        if !self.access_flags.write() {
            return Err(Error::AccessDenied("write"));
        }
        if buffer.len() > isize::MAX as usize {
            return Err(Error::BufferSizeExceedsMaximum(buffer.len()));
        }
        Ok(0)
    }

    /// Seeks within the attachment data; requires an open handle.
    pub fn seek_offset(&mut self, position: SeekFrom) -> Result<u64> {
        if !self.is_open {
            return Err(Error::NotOpen);
        }
        self.attachment.seek_data(position)
    }

    /// The attachment data size; permitted in any state.
    pub fn size(&mut self) -> Result<u64> {
        self.attachment
            .data_size()?
            .ok_or(Error::MissingEntry(entry_type::ATTACHMENT_DATA_OBJECT))
    }
}

/// The clone starts closed and keeps the source's access flags; both
/// handles stream the same attachment.
impl Clone for AttachedFile {
    fn clone(&self) -> Self {
        Self {
            attachment: Attachment::new(self.attachment.item().clone()),
            is_open: false,
            access_flags: self.access_flags,
        }
    }
}

impl Read for AttachedFile {
    fn read(&mut self, buffer: &mut [u8]) -> std::io::Result<usize> {
        self.read_buffer(buffer).map_err(std::io::Error::other)
    }
}

impl Write for AttachedFile {
    fn write(&mut self, buffer: &[u8]) -> std::io::Result<usize> {
        self.write_buffer(buffer).map_err(std::io::Error::other)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Seek for AttachedFile {
    fn seek(&mut self, position: SeekFrom) -> std::io::Result<u64> {
        self.seek_offset(position).map_err(std::io::Error::other)
    }
}
