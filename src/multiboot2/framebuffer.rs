// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! The framebuffer tag (type 8).
//!
//! Common part, offsets from the tag start:
//!   addr@8 (u64)  pitch@16  width@20  height@24 (u32)  bpp@28  type@29 (u8)
//! followed, for direct RGB, by position/size pairs for red, green and blue.

use log::{debug, info, warn};

use super::tag::{Tag, TagType};
use crate::error::BootError;
use crate::util::{read_u8, read_u32, read_u64};

const OFF_ADDR: usize = 8;
const OFF_PITCH: usize = 16;
const OFF_WIDTH: usize = 20;
const OFF_HEIGHT: usize = 24;
const OFF_BPP: usize = 28;
const OFF_TYPE: usize = 29;
const OFF_RGB: usize = 32;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ColorModel {
    Indexed,
    Rgb,
    EgaText,
    Unknown(u8),
}

impl From<u8> for ColorModel {
    fn from(v: u8) -> Self {
        match v {
            0 => ColorModel::Indexed,
            1 => ColorModel::Rgb,
            2 => ColorModel::EgaText,
            other => ColorModel::Unknown(other),
        }
    }
}

/// Bit position and width of each channel in a direct RGB pixel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RgbLayout {
    pub red: (u8, u8),
    pub green: (u8, u8),
    pub blue: (u8, u8),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FramebufferDescriptor {
    pub address: u64,
    pub pitch: u32,
    pub width: u32,
    pub height: u32,
    pub bpp: u8,
    pub model: ColorModel,
    pub rgb: Option<RgbLayout>,
}

impl FramebufferDescriptor {
    /// Decodes a framebuffer tag. `None` for other tags or a truncated one.
    pub fn parse(tag: &Tag<'_>) -> Option<Self> {
        if tag.typ() != TagType::Framebuffer {
            return None;
        }
        let b = tag.bytes();
        let model = ColorModel::from(read_u8(b, OFF_TYPE)?);
        let rgb = match model {
            ColorModel::Rgb => Some(RgbLayout {
                red: (read_u8(b, OFF_RGB)?, read_u8(b, OFF_RGB + 1)?),
                green: (read_u8(b, OFF_RGB + 2)?, read_u8(b, OFF_RGB + 3)?),
                blue: (read_u8(b, OFF_RGB + 4)?, read_u8(b, OFF_RGB + 5)?),
            }),
            _ => None,
        };
        Some(Self {
            address: read_u64(b, OFF_ADDR)?,
            pitch: read_u32(b, OFF_PITCH)?,
            width: read_u32(b, OFF_WIDTH)?,
            height: read_u32(b, OFF_HEIGHT)?,
            bpp: read_u8(b, OFF_BPP)?,
            model,
            rgb,
        })
    }

    /// Direct RGB at 32 bits per pixel is the only layout we can draw.
    pub fn check_rgba32(&self) -> Result<(), BootError> {
        if self.model != ColorModel::Rgb {
            return Err(BootError::UnsupportedFramebufferType(self.model));
        }
        if self.bpp != 32 {
            return Err(BootError::UnsupportedColorDepth(self.bpp));
        }
        Ok(())
    }
}

/// Returns the first framebuffer tag we can draw on.
///
/// Unusable framebuffer tags before it are handed to `on_reject` and skipped;
/// the walk carries on with the next tag.
pub fn select_framebuffer<'a, I, F>(tags: I, mut on_reject: F) -> Option<FramebufferDescriptor>
where
    I: IntoIterator<Item = Tag<'a>>,
    F: FnMut(BootError),
{
    for tag in tags {
        match tag.typ() {
            TagType::Framebuffer => {}
            TagType::Cmdline => {
                info!("[mb2] cmdline: {}", tag.string().unwrap_or("<non-utf8>"));
                continue;
            }
            TagType::BootLoaderName => {
                info!("[mb2] loader: {}", tag.string().unwrap_or("<non-utf8>"));
                continue;
            }
            other => {
                debug!("[mb2] skip {:?} size={} at {:#x}", other, tag.size(), tag.address());
                continue;
            }
        }

        let Some(fb) = FramebufferDescriptor::parse(&tag) else {
            warn!("[mb2] truncated framebuffer tag ({} bytes)", tag.size());
            continue;
        };
        info!(
            "[mb2] framebuffer {:#x} {}x{} pitch={} bpp={} {:?}",
            fb.address, fb.width, fb.height, fb.pitch, fb.bpp, fb.model
        );

        match fb.check_rgba32() {
            Ok(()) => return Some(fb),
            Err(e) => {
                warn!("[mb2] {}", e);
                on_reject(e);
            }
        }
    }
    None
}
