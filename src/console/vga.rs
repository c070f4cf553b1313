// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
use core::ptr::NonNull;

use volatile::VolatilePtr;

use super::{GRID_BYTES, TextBuffer};

/// The memory-mapped VGA text grid.
pub struct VgaText {
    base: NonNull<u8>,
}

// Only ever touched from the single boot CPU, behind the console lock.
unsafe impl Send for VgaText {}

impl VgaText {
    /// # Safety
    /// `base` must be a non-null address with [`GRID_BYTES`] writable bytes
    /// of text memory behind it for the rest of the run.
    pub const unsafe fn at(base: usize) -> Self {
        Self {
            base: unsafe { NonNull::new_unchecked(base as *mut u8) },
        }
    }
}

impl TextBuffer for VgaText {
    fn write_byte(&mut self, offset: usize, value: u8) {
        if offset >= GRID_BYTES {
            return;
        }
        let cell = unsafe { VolatilePtr::new(self.base.add(offset)) };
        cell.write(value);
    }
}
