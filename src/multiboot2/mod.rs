// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Multiboot2 boot information: the tag stream and the framebuffer tag.

pub mod framebuffer;
pub mod tag;

#[cfg(test)]
pub(crate) mod testing;

pub use framebuffer::{ColorModel, FramebufferDescriptor, RgbLayout, select_framebuffer};
pub use tag::{TAG_ALIGN, TAG_HEADER_SIZE, Tag, TagIter, TagType};
