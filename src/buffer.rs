//==============================================================================
// Buffer: an owned, fixed-capacity byte buffer
//==============================================================================
//
// A `Buffer` is one heap allocation. Sharing it means borrowing it
// (`&Buffer`, named through `alias`); duplicating it means calling
// `deep_copy`, which makes a second, independently owned allocation. The
// allocation is released when the owner goes out of scope, exactly once.
// Both kinds of copy are recorded in the lineage graph.

use std::fmt;
use std::io::{self, BufRead, Read};

use tracing::debug;
use zeroize::Zeroize;

use crate::error::{DemoError, Result};
use crate::ledger;
use crate::lineage::{self, BufferId};

/// Number of bytes `zero_out_memory` clears.
pub const ZERO_LEN: usize = 100;

pub struct Buffer {
    id: BufferId,
    bytes: Box<[u8]>,
}

impl Buffer {
    /// Allocates a zero-filled buffer of exactly `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        let bytes = vec![0u8; capacity].into_boxed_slice();
        ledger::record_alloc(capacity);
        let id = lineage::register(capacity);
        debug!(?id, capacity, "allocated buffer");
        Buffer { id, bytes }
    }

    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Hands out a named shallow alias: the same allocation, borrowed.
    pub fn alias(&self, name: &'static str) -> &Buffer {
        lineage::record_alias(self.id, name);
        self
    }

    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Bytes up to, not including, the first NUL. The whole buffer if there
    /// is no terminator.
    pub fn c_str(&self) -> &[u8] {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.bytes.len());
        &self.bytes[..end]
    }

    pub fn is_zeroed(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }

    /// Overwrites every byte with zero.
    pub fn zero_out(&mut self) {
        self.bytes[..].zeroize();
        debug!(id = ?self.id, capacity = self.capacity(), "zeroed buffer");
    }

    /// Makes the C-string view empty without touching the remaining bytes.
    pub fn truncate_to_empty(&mut self) {
        if let Some(first) = self.bytes.first_mut() {
            *first = 0;
        }
    }

    /// Allocates a new buffer of the same capacity holding a byte-for-byte
    /// copy of this one.
    pub fn deep_copy(&self) -> Buffer {
        let mut copy = Buffer::with_capacity(self.capacity());
        copy.bytes.copy_from_slice(&self.bytes);
        lineage::record_deep_copy(self.id, copy.id);
        copy
    }

    /// Stores `text` followed by a NUL terminator at the start of the buffer.
    pub fn store_c_str(&mut self, text: &[u8]) -> Result<()> {
        if text.len() + 1 > self.capacity() {
            return Err(DemoError::LiteralTooLong {
                len: text.len(),
                capacity: self.capacity(),
            });
        }
        self.bytes[..text.len()].copy_from_slice(text);
        self.bytes[text.len()] = 0;
        Ok(())
    }

    /// Reads one line the way C's `fgets` does: at most `capacity - 1`
    /// bytes, stopping after a newline, which is kept. The bytes are
    /// followed by a NUL terminator.
    ///
    /// Returns `Ok(None)` if the input was already at its end. Bytes past
    /// the limit are left unread in `reader`.
    pub fn fill_line_from<R: BufRead>(&mut self, reader: &mut R) -> io::Result<Option<usize>> {
        let limit = self.capacity().saturating_sub(1);
        if limit == 0 {
            self.truncate_to_empty();
            return Ok(Some(0));
        }

        let mut line = Vec::with_capacity(limit);
        let read = reader.by_ref().take(limit as u64).read_until(b'\n', &mut line)?;
        if read == 0 {
            return Ok(None);
        }

        self.bytes[..read].copy_from_slice(&line);
        self.bytes[read] = 0;
        Ok(Some(read))
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        ledger::record_release(self.capacity());
        lineage::record_release(self.id, self.is_zeroed());
        debug!(id = ?self.id, capacity = self.capacity(), "released buffer");
    }
}

impl Zeroize for Buffer {
    fn zeroize(&mut self) {
        self.zero_out();
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.capacity())
            .field("c_str", &String::from_utf8_lossy(self.c_str()))
            .finish()
    }
}

/// Zeroes the first `ZERO_LEN` bytes of `buf`, or all of it if shorter.
pub fn zero_out_memory(buf: &mut [u8]) {
    let len = buf.len().min(ZERO_LEN);
    buf[..len].zeroize();
}
