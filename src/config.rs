// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Compile-time configuration. Behaviour switches live in cargo features.

use log::LevelFilter;

/// Text console geometry.
pub const COLUMNS: usize = 80;
pub const LINES: usize = 24;
/// Light grey on black.
pub const ATTRIBUTE: u8 = 7;
/// VGA text memory (identity mapped by the boot stub).
pub const VIDEO_BASE: usize = 0xB8000;
/// The boot stub identity maps `0..IDENTITY_MAPPED_END` and nothing else.
pub const IDENTITY_MAPPED_END: u64 = 4 << 30;

/// Loop iterations that roughly make up one second on the reference VM.
pub const SPINS_PER_SECOND: u64 = 700_000_000;
/// Delay between two pictures, in busy-wait "seconds".
pub const SLIDE_DELAY_SECONDS: u32 = 1;

/// Dimensions of the built-in picture set.
pub const PICTURE_WIDTH: u32 = 128;
pub const PICTURE_HEIGHT: u32 = 96;

#[cfg(feature = "log-trace")]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Trace;
#[cfg(not(feature = "log-trace"))]
pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;
