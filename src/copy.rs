//==============================================================================
// Buffer duplication
//==============================================================================

use tracing::debug;

use crate::buffer::Buffer;
use crate::config::DemoConfig;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub copied_bytes: usize,
    pub scratch_len: usize,
}

/// Duplicates `source` into a fresh allocation, fills an unrelated scratch
/// buffer with the configured literal, and releases both before returning.
///
/// `source` is only borrowed: the caller keeps ownership and nothing here
/// can free or retain it.
pub fn copy_process(source: &Buffer, config: &DemoConfig) -> Result<CopyReport> {
    let duplicate = source.deep_copy();

    let mut scratch = Buffer::with_capacity(config.scratch_capacity);
    scratch.store_c_str(config.scratch_literal.as_bytes())?;

    let report = CopyReport {
        copied_bytes: duplicate.capacity(),
        scratch_len: scratch.c_str().len(),
    };
    debug!(?report, "duplicated buffer");
    Ok(report)
}
