// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Fake multiboot2 info blocks for unit tests.

use std::vec::Vec;

use crate::bootinfo::{BootHandoff, BootInfo, INFO_HEADER_SIZE, MULTIBOOT2_BOOTLOADER_MAGIC};
use crate::util::align_up;

use super::TAG_ALIGN;

pub const FB_TYPE_INDEXED: u8 = 0;
pub const FB_TYPE_RGB: u8 = 1;
pub const FB_TYPE_EGA_TEXT: u8 = 2;

pub struct InfoBlockBuilder {
    bytes: Vec<u8>,
}

impl InfoBlockBuilder {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; INFO_HEADER_SIZE],
        }
    }

    pub fn tag(&mut self, typ: u32, payload: &[u8]) -> &mut Self {
        self.raw_header(typ, (8 + payload.len()) as u32);
        self.bytes.extend_from_slice(payload);
        self.bytes.resize(align_up(self.bytes.len(), TAG_ALIGN), 0);
        self
    }

    /// A bare header with an arbitrary (possibly bogus) size.
    pub fn raw_header(&mut self, typ: u32, size: u32) -> &mut Self {
        self.bytes.extend_from_slice(&typ.to_le_bytes());
        self.bytes.extend_from_slice(&size.to_le_bytes());
        self
    }

    /// Framebuffer tag as GRUB lays it out.
    pub fn framebuffer(
        &mut self,
        addr: u64,
        width: u32,
        height: u32,
        bpp: u8,
        model: u8,
    ) -> &mut Self {
        let mut p = Vec::new();
        p.extend_from_slice(&addr.to_le_bytes());
        p.extend_from_slice(&(width * (bpp as u32).div_ceil(8)).to_le_bytes());
        p.extend_from_slice(&width.to_le_bytes());
        p.extend_from_slice(&height.to_le_bytes());
        p.push(bpp);
        p.push(model);
        p.extend_from_slice(&0u16.to_le_bytes());
        match model {
            FB_TYPE_RGB => p.extend_from_slice(&[16, 8, 8, 8, 0, 8]),
            FB_TYPE_INDEXED => p.extend_from_slice(&0u16.to_le_bytes()),
            _ => {}
        }
        self.tag(8, &p)
    }

    pub fn finish(mut self) -> InfoBlock {
        self.tag(0, &[]);
        self.finish_without_end()
    }

    pub fn finish_without_end(mut self) -> InfoBlock {
        let total = self.bytes.len() as u32;
        self.bytes[0..4].copy_from_slice(&total.to_le_bytes());
        let words = self
            .bytes
            .chunks(8)
            .map(|c| {
                let mut w = [0u8; 8];
                w[..c.len()].copy_from_slice(c);
                u64::from_le_bytes(w)
            })
            .collect();
        InfoBlock { words }
    }
}

/// An 8-byte aligned info block living in test memory.
pub struct InfoBlock {
    words: Vec<u64>,
}

impl InfoBlock {
    pub fn address(&self) -> usize {
        self.words.as_ptr() as usize
    }

    pub fn first_tag(&self) -> usize {
        self.address() + INFO_HEADER_SIZE
    }

    pub fn handoff(&self) -> BootHandoff {
        BootHandoff::new(MULTIBOOT2_BOOTLOADER_MAGIC, self.address())
    }

    pub fn info(&self) -> BootInfo {
        self.handoff().validate().unwrap()
    }
}
