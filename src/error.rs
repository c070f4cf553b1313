// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
use core::fmt;

use crate::console::PutChar;
use crate::multiboot2::ColorModel;
use crate::printf;

/// Everything that stops the kernel before it starts drawing.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BootError {
    /// The loader did not hand over the multiboot2 magic.
    InvalidMagic(u32),
    /// The info block is not 8-byte aligned.
    MisalignedInfoBlock(usize),
    /// A framebuffer tag with a colour model other than direct RGB.
    UnsupportedFramebufferType(ColorModel),
    /// A direct RGB framebuffer that is not 32 bits per pixel.
    UnsupportedColorDepth(u8),
    /// The tag stream ended without a usable framebuffer.
    NoFramebuffer,
    /// The framebuffer reaches past the identity-mapped memory.
    FramebufferUnmapped(u64),
}

impl BootError {
    /// Prints the on-screen diagnostic for this error.
    pub fn report<W: PutChar + ?Sized>(&self, out: &mut W) {
        match *self {
            BootError::InvalidMagic(magic) => {
                printf!(out, "Invalid magic number: 0x%x\n", magic)
            }
            BootError::MisalignedInfoBlock(addr) => printf!(out, "Unaligned mbi: 0x%x\n", addr),
            BootError::UnsupportedFramebufferType(_) => {
                printf!(out, "Wrong framebuffer type, cannot continue !\n")
            }
            BootError::UnsupportedColorDepth(_) => {
                printf!(out, "Wrong color depth, cannot continue !\n")
            }
            BootError::NoFramebuffer => printf!(out, "No usable framebuffer, cannot continue !\n"),
            BootError::FramebufferUnmapped(addr) => {
                printf!(out, "Framebuffer at 0x%x is not mapped, cannot continue !\n", addr)
            }
        }
    }
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::InvalidMagic(m) => write!(f, "invalid boot magic {m:#x}"),
            BootError::MisalignedInfoBlock(a) => write!(f, "info block {a:#x} is not 8-byte aligned"),
            BootError::UnsupportedFramebufferType(model) => {
                write!(f, "unsupported framebuffer type {model:?}")
            }
            BootError::UnsupportedColorDepth(bpp) => write!(f, "unsupported color depth {bpp} bpp"),
            BootError::NoFramebuffer => write!(f, "no usable framebuffer tag"),
            BootError::FramebufferUnmapped(a) => {
                write!(f, "framebuffer at {a:#x} lies outside the identity map")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    fn reported(err: BootError) -> String<80> {
        let mut out = String::new();
        err.report(&mut out);
        out
    }

    #[test]
    fn diagnostics_match_console_texts() {
        assert_eq!(
            reported(BootError::InvalidMagic(0x2bad_b002)),
            "Invalid magic number: 0x2badb002\n"
        );
        assert_eq!(
            reported(BootError::MisalignedInfoBlock(0x10_0004)),
            "Unaligned mbi: 0x100004\n"
        );
        assert_eq!(
            reported(BootError::UnsupportedFramebufferType(ColorModel::EgaText)),
            "Wrong framebuffer type, cannot continue !\n"
        );
        assert_eq!(
            reported(BootError::UnsupportedColorDepth(24)),
            "Wrong color depth, cannot continue !\n"
        );
        assert_eq!(
            reported(BootError::NoFramebuffer),
            "No usable framebuffer, cannot continue !\n"
        );
        assert_eq!(
            reported(BootError::FramebufferUnmapped(0x1_0000_0000)),
            "Framebuffer at 0x100000000 is not mapped, cannot continue !\n"
        );
    }

    #[test]
    fn display_is_for_logs() {
        let text = std::format!("{}", BootError::UnsupportedColorDepth(16));
        assert_eq!(text, "unsupported color depth 16 bpp");
    }
}
