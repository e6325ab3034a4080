// Reserved Memory
// "Headroom bought up front, spent at the worst possible moment"

use std::sync::Mutex;

/// A block of memory pre-allocated at interceptor construction and released
/// as the very first step of the fatal-shutdown pass, so that building the
/// failure record and running handlers still works after the process
/// exhausted the heap.
#[derive(Debug)]
pub struct ReservedMemory {
    block: Mutex<Vec<u8>>,
}

impl ReservedMemory {
    pub fn allocate(kilobytes: usize) -> Self {
        Self {
            block: Mutex::new(vec![0u8; kilobytes * 1024]),
        }
    }

    /// Free the block. Returns `true` only on the pass that actually freed
    /// it; later calls are no-ops. Runs even through a poisoned lock — the
    /// fatal path cannot afford to skip this.
    pub fn release(&self) -> bool {
        let mut block = match self.block.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if block.capacity() == 0 {
            return false;
        }

        let freed = std::mem::take(&mut *block);
        drop(freed);
        true
    }

    pub fn remaining_bytes(&self) -> usize {
        match self.block.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}
