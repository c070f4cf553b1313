// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
#[cfg(feature = "serial-log")]
pub mod serial;

use x86_64::instructions;

/// Nothing in this kernel handles interrupts; keep them off for good.
pub fn init() {
    instructions::interrupts::disable();
}

pub fn halt_forever() -> ! {
    loop {
        instructions::interrupts::disable();
        instructions::hlt();
    }
}
