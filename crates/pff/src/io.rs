//! The byte-source seam.

use std::io::{Read, Seek, SeekFrom};

use crate::Result;

/// The caller's byte source: anything readable and seekable.
///
/// The container file handle reads through this seam, and the
/// [attached-file adapter](crate::AttachedFile) implements it in turn, so
/// an attachment can drive another container's parse without touching the
/// filesystem.
pub trait FileIo: Read + Seek {
    /// Reads up to `buffer.len()` bytes at the current offset.
    fn read_buffer(&mut self, buffer: &mut [u8]) -> Result<usize> {
        Ok(self.read(buffer)?)
    }

    /// Moves the current offset and returns the new absolute position.
    fn seek_offset(&mut self, position: SeekFrom) -> Result<u64> {
        Ok(self.seek(position)?)
    }

    /// The total stream size. The current offset is restored afterwards.
    fn size(&mut self) -> Result<u64> {
        let current = self.stream_position()?;
        let end = self.seek(SeekFrom::End(0))?;
        self.seek(SeekFrom::Start(current))?;
        Ok(end)
    }
}

impl<T: Read + Seek + ?Sized> FileIo for T {}
