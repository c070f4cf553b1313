// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project

/// An immutable RGBA raster, 4 bytes per pixel in R, G, B, A order.
#[derive(Debug, Copy, Clone)]
pub struct Picture {
    pub width: u32,
    pub height: u32,
    pub subpixels: &'static [u8],
}

impl Picture {
    pub const fn new(width: u32, height: u32, subpixels: &'static [u8]) -> Self {
        Self {
            width,
            height,
            subpixels,
        }
    }

    /// `[r, g, b, a]` of one pixel.
    #[inline]
    pub fn pixel(&self, row: u32, column: u32) -> [u8; 4] {
        let at = 4 * (row as usize * self.width as usize + column as usize);
        [
            self.subpixels[at],
            self.subpixels[at + 1],
            self.subpixels[at + 2],
            self.subpixels[at + 3],
        ]
    }
}
