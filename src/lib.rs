// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Multiboot2 framebuffer slideshow kernel.
//!
//! Everything except the entry point and the panic handler lives here so the
//! host can run the unit tests with `std`.
#![cfg_attr(not(test), no_std)]

pub mod arch;
pub mod assets;
pub mod blit;
pub mod bootinfo;
pub mod clock;
pub mod config;
pub mod console;
pub mod error;
pub mod kmain;
pub mod logger;
pub mod multiboot2;
pub mod picture;
pub mod util;
