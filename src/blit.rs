// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Copies RGBA pictures into a 32-bit direct RGB framebuffer.

use core::ptr::NonNull;

use volatile::VolatilePtr;

use crate::error::BootError;
use crate::multiboot2::FramebufferDescriptor;
use crate::picture::Picture;

/// `[r, g, b, a]` -> `0xAARRGGBB`.
#[inline]
pub const fn pack_pixel(px: [u8; 4]) -> u32 {
    let [r, g, b, a] = px;
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// A framebuffer known to be direct RGB at 32 bits per pixel.
#[derive(Debug, Copy, Clone)]
pub struct Rgba32Surface {
    base: NonNull<u32>,
    width: u32,
    height: u32,
}

impl Rgba32Surface {
    /// Accepts a direct RGB 32-bpp framebuffer whose `height * pitch` bytes
    /// all lie below `mapped_end`.
    pub fn new(fb: &FramebufferDescriptor, mapped_end: u64) -> Result<Self, BootError> {
        fb.check_rgba32()?;
        let span = u64::from(fb.height) * u64::from(fb.pitch);
        match fb.address.checked_add(span) {
            Some(end) if end <= mapped_end => {}
            _ => return Err(BootError::FramebufferUnmapped(fb.address)),
        }
        let base = NonNull::new(fb.address as usize as *mut u32).ok_or(BootError::NoFramebuffer)?;
        Ok(Self {
            base,
            width: fb.width,
            height: fb.height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Writes every pixel of `picture` at the top-left corner, row-major,
    /// one volatile store per pixel.
    ///
    /// # Safety
    /// The framebuffer memory must be mapped and writable, and the picture
    /// must fit: rows are `width` pixels apart and nothing is clipped.
    pub unsafe fn blit(&self, picture: &Picture) {
        let stride = self.width as usize;
        for row in 0..picture.height {
            for column in 0..picture.width {
                let offset = row as usize * stride + column as usize;
                let value = pack_pixel(picture.pixel(row, column));
                unsafe { VolatilePtr::new(self.base.add(offset)) }.write(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IDENTITY_MAPPED_END;
    use crate::multiboot2::ColorModel;
    use std::vec::Vec;

    fn descriptor(mem: &mut [u32], width: u32, height: u32) -> FramebufferDescriptor {
        FramebufferDescriptor {
            address: mem.as_mut_ptr() as u64,
            pitch: width * 4,
            width,
            height,
            bpp: 32,
            model: ColorModel::Rgb,
            rgb: None,
        }
    }

    #[test]
    fn packs_argb() {
        assert_eq!(pack_pixel([10, 20, 30, 255]), 0xFF0A_141E);
        assert_eq!(pack_pixel([40, 50, 60, 128]), 0x8028_323C);
        assert_eq!(pack_pixel([0, 0, 0, 0]), 0);
    }

    #[test]
    fn two_pixel_picture_lands_at_consecutive_offsets() {
        static PX: [u8; 8] = [10, 20, 30, 255, 40, 50, 60, 128];
        let picture = Picture::new(2, 1, &PX);
        let mut mem = vec![0u32; 4];
        let surface = Rgba32Surface::new(&descriptor(&mut mem, 2, 2), u64::MAX).unwrap();
        unsafe { surface.blit(&picture) };
        assert_eq!(mem, [0xFF0A_141E, 0x8028_323C, 0, 0]);
    }

    #[test]
    fn rows_use_framebuffer_width_as_stride() {
        static PX: [u8; 16] = [
            1, 0, 0, 0xff, 2, 0, 0, 0xff, //
            3, 0, 0, 0xff, 4, 0, 0, 0xff,
        ];
        let picture = Picture::new(2, 2, &PX);
        let mut mem = vec![0u32; 5 * 3];
        let surface = Rgba32Surface::new(&descriptor(&mut mem, 5, 3), u64::MAX).unwrap();
        unsafe { surface.blit(&picture) };

        let red = |v: u8| 0xff00_0000 | (v as u32) << 16;
        let mut expected: Vec<u32> = vec![0; 15];
        expected[0] = red(1);
        expected[1] = red(2);
        expected[5] = red(3);
        expected[6] = red(4);
        assert_eq!(mem, expected);
    }

    #[test]
    fn rejects_unsupported_descriptors() {
        let mut mem = vec![0u32; 1];
        let mut fb = descriptor(&mut mem, 1, 1);
        fb.bpp = 16;
        assert_eq!(
            Rgba32Surface::new(&fb, u64::MAX).unwrap_err(),
            BootError::UnsupportedColorDepth(16)
        );
        fb.bpp = 32;
        fb.model = ColorModel::Indexed;
        assert_eq!(
            Rgba32Surface::new(&fb, u64::MAX).unwrap_err(),
            BootError::UnsupportedFramebufferType(ColorModel::Indexed)
        );
    }

    #[test]
    fn rejects_framebuffers_past_the_identity_map() {
        let mut fb = descriptor(&mut [], 1024, 768);
        fb.address = 0xfd00_0000;
        assert!(Rgba32Surface::new(&fb, IDENTITY_MAPPED_END).is_ok());

        fb.address = 0xffff_0000;
        assert_eq!(
            Rgba32Surface::new(&fb, IDENTITY_MAPPED_END).unwrap_err(),
            BootError::FramebufferUnmapped(0xffff_0000)
        );

        fb.address = 0x1_0000_0000;
        assert_eq!(
            Rgba32Surface::new(&fb, IDENTITY_MAPPED_END).unwrap_err(),
            BootError::FramebufferUnmapped(0x1_0000_0000)
        );

        fb.address = u64::MAX - 8;
        assert_eq!(
            Rgba32Surface::new(&fb, u64::MAX).unwrap_err(),
            BootError::FramebufferUnmapped(u64::MAX - 8)
        );
    }
}
