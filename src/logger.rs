// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! `log` backend.
//!
//! The VGA grid is reserved for the user-facing diagnostics, so records only
//! go out when the `serial-log` feature wires up COM1. Without it they are
//! dropped after the level check.

use log::{LevelFilter, Log, Metadata, Record};

use crate::config::LOG_LEVEL;

pub struct KernelLogger {
    level: LevelFilter,
}

static LOGGER: KernelLogger = KernelLogger { level: LOG_LEVEL };

impl Log for KernelLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        #[cfg(all(feature = "serial-log", target_arch = "x86_64"))]
        {
            use core::fmt::Write;
            let _ = writeln!(
                &mut crate::arch::x86_64::serial::Serial,
                "[{:<5}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Installs the logger. Safe to call more than once; later calls are no-ops.
pub fn init() {
    if log::set_logger(&LOGGER).is_err() {
        return;
    }
    #[cfg(all(feature = "serial-log", target_arch = "x86_64"))]
    unsafe {
        crate::arch::x86_64::serial::init_com1();
    }
    log::set_max_level(LOGGER.level);
}
