//==============================================================================
// Process-wide buffer slot
//==============================================================================
//
// One buffer that lives for the duration of the demo. `install` hands back a
// guard; the buffer is released when the guard is dropped or `release` is
// called, whichever comes first. Each install bumps a generation, and a
// guard only ever releases the buffer of its own generation.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use tracing::debug;

use crate::buffer::Buffer;
use crate::error::{DemoError, Result};

struct Slot {
    generation: u64,
    buffer: Option<Buffer>,
}

lazy_static! {
    static ref PROCESS_BUFFER: Mutex<Slot> = Mutex::new(Slot {
        generation: 0,
        buffer: None,
    });
}

fn slot() -> MutexGuard<'static, Slot> {
    // Nothing can be left half-written in an Option swap; keep going.
    PROCESS_BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Releases the process-wide buffer when dropped.
#[must_use = "the process-wide buffer is released as soon as the guard is dropped"]
pub struct ProcessBufferGuard {
    generation: u64,
    armed: bool,
}

impl ProcessBufferGuard {
    /// Releases now instead of at end of scope.
    pub fn release(mut self) -> bool {
        self.armed = false;
        release_generation(self.generation)
    }
}

impl Drop for ProcessBufferGuard {
    fn drop(&mut self) {
        if self.armed {
            release_generation(self.generation);
        }
    }
}

pub fn install(capacity: usize) -> Result<ProcessBufferGuard> {
    let mut slot = slot();
    if slot.buffer.is_some() {
        return Err(DemoError::ProcessBufferInUse);
    }
    slot.generation += 1;
    slot.buffer = Some(Buffer::with_capacity(capacity));
    debug!(capacity, generation = slot.generation, "installed process-wide buffer");
    Ok(ProcessBufferGuard {
        generation: slot.generation,
        armed: true,
    })
}

/// Drops whatever buffer is installed. Returns `false` if there was none.
pub fn release() -> bool {
    let taken = slot().buffer.take();
    finish_release(taken)
}

fn release_generation(generation: u64) -> bool {
    let taken = {
        let mut slot = slot();
        if slot.generation == generation {
            slot.buffer.take()
        } else {
            None
        }
    };
    finish_release(taken)
}

// Called with the lock already gone.
fn finish_release(taken: Option<Buffer>) -> bool {
    match taken {
        Some(buffer) => {
            drop(buffer);
            debug!("released process-wide buffer");
            true
        }
        None => false,
    }
}
