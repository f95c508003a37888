//==============================================================================
// Demo driver
//==============================================================================

use std::io::{BufRead, Write};

use tracing::debug;
use zeroize::Zeroizing;

use crate::buffer::Buffer;
use crate::config::DemoConfig;
use crate::copy::{copy_process, CopyReport};
use crate::error::Result;
use crate::lineage::{self, LineageReport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    /// Bytes read from the input, newline included, before the wipe.
    pub line: Option<Vec<u8>>,
    pub read_failed: bool,
    pub copy: CopyReport,
    /// Where the line's bytes went: its aliases and every deep copy.
    pub lineage: LineageReport,
}

/// Reads one line into a fresh buffer, duplicates it through a shared
/// alias, wipes it through the owner and releases it.
///
/// A failed read (end of input or an I/O error) writes the configured
/// diagnostic to `output` and empties the buffer; the run continues.
/// The buffer is wiped before release on every path, errors included.
pub fn run_demo<R, W>(input: &mut R, output: &mut W, config: &DemoConfig) -> Result<DemoOutcome>
where
    R: BufRead,
    W: Write,
{
    config.validate()?;

    let mut buffer = Zeroizing::new(Buffer::with_capacity(config.buffer_capacity));
    let origin = buffer.id();

    let line = match buffer.fill_line_from(input) {
        Ok(Some(len)) => {
            debug!(len, "read line");
            Some(buffer.as_bytes()[..len].to_vec())
        }
        Ok(None) => {
            debug!("input ended before a line was read");
            None
        }
        Err(err) => {
            debug!(error = %err, "failed to read line");
            None
        }
    };

    let read_failed = line.is_none();
    if read_failed {
        write!(output, "{}", config.read_failure_message)?;
        output.flush()?;
        buffer.truncate_to_empty();
    }

    // Shallow aliases: three names, one allocation. They are shared borrows,
    // so they must all be dead before the owner writes again.
    let alias = buffer.alias("alias");
    let chained = alias.alias("chained");
    let chained_again = chained.alias("chained_again");
    debug!(
        addr = ?alias.as_bytes().as_ptr(),
        same_allocation = std::ptr::eq(chained, chained_again),
        "aliased buffer"
    );

    let copy = copy_process(alias, config)?;

    buffer.zero_out();
    drop(buffer);

    let lineage = lineage::report(origin);
    let unwiped = lineage.unwiped();
    if !unwiped.is_empty() {
        debug!(?unwiped, "copies of the line were released without a wipe");
    }

    Ok(DemoOutcome {
        line,
        read_failed,
        copy,
        lineage,
    })
}
