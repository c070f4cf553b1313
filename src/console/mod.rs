// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Text console on the 80x24 character grid.
//!
//! The grid is written cell by cell (character byte + attribute byte). There
//! is no scrollback: when the cursor runs past the last row it wraps to the
//! top and overwrites whatever was there.

pub mod itoa;
pub mod printf;
pub mod vga;

use core::fmt;

use spin::Mutex;

use crate::config::{ATTRIBUTE, COLUMNS, LINES, VIDEO_BASE};

pub use itoa::{INT_BUF_LEN, IntStyle, format_integer};
pub use printf::{Arg, PutChar, printf};
pub use vga::VgaText;

/// Size of the character grid in bytes.
pub const GRID_BYTES: usize = COLUMNS * LINES * 2;

/// Byte-addressed backing store of the character grid.
pub trait TextBuffer {
    fn write_byte(&mut self, offset: usize, value: u8);
}

pub struct Console<B: TextBuffer> {
    buffer: B,
    column: usize,
    row: usize,
}

pub static CONSOLE: Mutex<Console<VgaText>> =
    Mutex::new(Console::new(unsafe { VgaText::at(VIDEO_BASE) }));

impl<B: TextBuffer> Console<B> {
    pub const fn new(buffer: B) -> Self {
        Self {
            buffer,
            column: 0,
            row: 0,
        }
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Zeroes the whole grid and homes the cursor.
    pub fn clear(&mut self) {
        for offset in 0..GRID_BYTES {
            self.buffer.write_byte(offset, 0);
        }
        self.column = 0;
        self.row = 0;
    }

    pub fn put_char(&mut self, c: u8) {
        if c == b'\n' || c == b'\r' {
            self.newline();
            return;
        }

        let cell = (self.column + self.row * COLUMNS) * 2;
        self.buffer.write_byte(cell, c);
        self.buffer.write_byte(cell + 1, ATTRIBUTE);

        self.column += 1;
        if self.column >= COLUMNS {
            self.newline();
        }
    }

    fn newline(&mut self) {
        self.column = 0;
        self.row += 1;
        if self.row >= LINES {
            self.row = 0;
        }
    }
}

/// Releases `mutex` if something holds it. Returns whether it was held.
///
/// # Safety
/// The holder must never touch the data again, as when it is the code that
/// panicked on a single core with interrupts off.
pub unsafe fn break_lock<T>(mutex: &Mutex<T>) -> bool {
    if !mutex.is_locked() {
        return false;
    }
    unsafe { mutex.force_unlock() };
    true
}

impl<B: TextBuffer> PutChar for Console<B> {
    fn put_char(&mut self, c: u8) {
        Console::put_char(self, c);
    }
}

impl<B: TextBuffer> fmt::Write for Console<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for b in s.bytes() {
            self.put_char(b);
        }
        Ok(())
    }
}

/// Formats into any [`PutChar`] sink with the minimal printf dialect.
#[macro_export]
macro_rules! printf {
    ($out:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::console::printf(
            $out,
            $fmt,
            &[$($crate::console::Arg::from($arg)),*],
        )
    };
}

#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let _ = write!($crate::console::CONSOLE.lock(), $($arg)*);
    }};
}

#[macro_export]
macro_rules! kprintln {
    () => { $crate::kprint!("\n") };
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        $crate::kprint!(concat!($fmt, "\n") $(, $($arg)+)?);
    }};
}
