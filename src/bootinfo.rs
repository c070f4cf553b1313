// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! The multiboot2 boot contract: what the loader hands to `kernel_main`.

use crate::error::BootError;
use crate::multiboot2::TagIter;
use crate::util::{is_aligned, read_u32};

/// Value the loader leaves in `eax`.
pub const MULTIBOOT2_BOOTLOADER_MAGIC: u32 = 0x36d7_6289;
/// `{ total_size: u32, reserved: u32 }` in front of the first tag.
pub const INFO_HEADER_SIZE: usize = 8;
pub const INFO_ALIGN: usize = 8;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BootHandoff {
    pub magic: u32,
    pub info_address: usize,
}

impl BootHandoff {
    pub const fn new(magic: u32, info_address: usize) -> Self {
        Self {
            magic,
            info_address,
        }
    }

    /// Checks the contract without touching the info block.
    pub fn validate(&self) -> Result<BootInfo, BootError> {
        if self.magic != MULTIBOOT2_BOOTLOADER_MAGIC {
            return Err(BootError::InvalidMagic(self.magic));
        }
        if !is_aligned(self.info_address, INFO_ALIGN) {
            return Err(BootError::MisalignedInfoBlock(self.info_address));
        }
        Ok(BootInfo {
            address: self.info_address,
        })
    }
}

/// A validated info block address.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BootInfo {
    address: usize,
}

impl BootInfo {
    pub fn address(&self) -> usize {
        self.address
    }

    pub fn first_tag(&self) -> usize {
        self.address + INFO_HEADER_SIZE
    }

    /// `total_size` from the info block header.
    ///
    /// # Safety
    /// The info block must be mapped and readable.
    pub unsafe fn total_size(&self) -> u32 {
        let header =
            unsafe { core::slice::from_raw_parts(self.address as *const u8, INFO_HEADER_SIZE) };
        read_u32(header, 0).unwrap_or(0)
    }

    /// Walks the tag stream, bounded by `total_size`.
    ///
    /// # Safety
    /// The info block must be mapped, readable and end with an end tag (or
    /// be at least as long as its `total_size` claims).
    pub unsafe fn tags<'a>(&self) -> TagIter<'a> {
        let total = unsafe { self.total_size() } as usize;
        unsafe { TagIter::bounded(self.first_tag(), self.address + total) }
    }
}
