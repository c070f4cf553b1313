// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project

/// Rounds `x` up to the next multiple of `a` (power of two).
#[inline]
pub const fn align_up(x: usize, a: usize) -> usize {
    (x + (a - 1)) & !(a - 1)
}

#[inline]
pub const fn is_aligned(x: usize, a: usize) -> bool {
    x & (a - 1) == 0
}

/// Little-endian field readers for loader-provided records.
pub fn read_u8(bytes: &[u8], off: usize) -> Option<u8> {
    bytes.get(off).copied()
}

pub fn read_u32(bytes: &[u8], off: usize) -> Option<u32> {
    let raw = bytes.get(off..off + 4)?;
    Some(u32::from_le_bytes(raw.try_into().ok()?))
}

pub fn read_u64(bytes: &[u8], off: usize) -> Option<u64> {
    let raw = bytes.get(off..off + 8)?;
    Some(u64::from_le_bytes(raw.try_into().ok()?))
}
