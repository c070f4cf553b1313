// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! COM1 sink for the log mirror.

use core::fmt::Write;
use spin::Mutex;
use uart_16550::SerialPort;

const COM1_PORT: u16 = 0x3F8;

static COM1: Mutex<Option<SerialPort>> = Mutex::new(None);

/// # Safety
/// Programs the UART at the COM1 I/O ports; call once, before logging.
pub unsafe fn init_com1() {
    let mut port = unsafe { SerialPort::new(COM1_PORT) };
    port.init();
    *COM1.lock() = Some(port);
}

fn _write_str(s: &str) {
    if let Some(ref mut port) = *COM1.lock() {
        for &b in s.as_bytes() {
            if b == b'\n' {
                let _ = port.send(b'\r');
            }
            let _ = port.send(b);
        }
    }
}

pub struct Serial;
impl Write for Serial {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        _write_str(s);
        Ok(())
    }
}
