// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
#![no_std]
#![no_main]

use core::panic::PanicInfo;

use slideboot::arch::native as arch;
use slideboot::bootinfo::BootHandoff;
use slideboot::console::{CONSOLE, break_lock};
use slideboot::kmain::kmain;
use slideboot::kprintln;

/// Called by the long-mode trampoline with the loader's `eax` and `ebx`.
#[unsafe(no_mangle)]
pub extern "C" fn kernel_main(magic: u32, info_address: usize) {
    arch::init();
    slideboot::logger::init();
    log::info!("[SLIDEBOOT] Kernel starts.");

    kmain(BootHandoff::new(magic, info_address));
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    // SAFETY: one core, interrupts off; whoever held the console is the code
    // that just panicked and will not run again.
    unsafe { break_lock(&CONSOLE) };
    kprintln!("\n*** KERNEL PANIC ***\n{}", info);
    arch::halt_forever();
}
