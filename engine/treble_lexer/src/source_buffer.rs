//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source
//! content, so the scanner detects end of source without explicit
//! bounds checking. The total buffer size is rounded up to the next
//! 64-byte boundary, which also provides safe zero padding for
//! `peek()` and `peek2()` near the end of the buffer.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`, and the buffer
/// always extends at least two bytes past the source content, so
/// `peek()` and `peek2()` from any position within the source stay in
/// bounds.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from template source.
    ///
    /// Copies the source bytes into a cache-line-padded buffer with a
    /// `0x00` sentinel appended.
    ///
    /// # Source Size
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`;
    /// template sources of that size are not supported.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to the next 64-byte boundary. The `+ 2` reserves the
        // sentinel plus at least one more zero byte, keeping two-byte
        // lookahead in bounds from any position within the source.
        let padded_len = (source_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled, then copy source bytes. The sentinel
        // (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let source_len = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Size assertion: Vec<u8> = 24, u32 = 4, + 4 padding = 32 bytes.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
