// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! A deliberately small printf dialect.
//!
//! Supported: `%d %u %x %s`, an optional `0` flag and a single-digit width
//! (`%04x`). Any other conversion character prints the next argument as one
//! character. No precision, no multi-digit widths, no positional arguments.

use super::itoa::{INT_BUF_LEN, IntStyle, format_integer};

/// Anything that accepts one output byte at a time.
pub trait PutChar {
    fn put_char(&mut self, c: u8);
}

impl<const N: usize> PutChar for heapless::String<N> {
    fn put_char(&mut self, c: u8) {
        // Full strings silently truncate.
        let _ = self.push(c as char);
    }
}

/// One formatter argument.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Arg<'a> {
    /// Sign-extended value plus the width of the type it came from. `%u`
    /// and `%x` print only the low `bits` bits.
    Int { value: i64, bits: u32 },
    /// `None` renders as `(null)`.
    Str(Option<&'a str>),
    Char(u8),
}

macro_rules! arg_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg<'_> {
            fn from(v: $t) -> Self {
                Arg::Int {
                    value: v as i64,
                    bits: <$t>::BITS,
                }
            }
        })*
    };
}

arg_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(Some(s))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        Arg::Str(s)
    }
}

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(c as u8)
    }
}

const NULL_TEXT: &str = "(null)";

/// The value `style` formats: the full signed value for `%d`, the low `bits`
/// bits for `%u` and `%x`.
fn view(style: IntStyle, value: i64, bits: u32) -> i64 {
    match style {
        IntStyle::Signed => value,
        _ if bits >= i64::BITS => value,
        _ => (value as u64 & ((1u64 << bits) - 1)) as i64,
    }
}

pub fn printf<W: PutChar + ?Sized>(out: &mut W, format: &str, args: &[Arg<'_>]) {
    let mut fmt = format.bytes();
    let mut args = args.iter();
    let mut buf = [0u8; INT_BUF_LEN];

    while let Some(c) = fmt.next() {
        if c != b'%' {
            out.put_char(c);
            continue;
        }

        let Some(mut c) = fmt.next() else { break };
        let mut pad0 = false;
        let mut pad = 0usize;

        if c == b'0' {
            pad0 = true;
            let Some(next) = fmt.next() else { break };
            c = next;
        }
        if c.is_ascii_digit() {
            pad = (c - b'0') as usize;
            let Some(next) = fmt.next() else { break };
            c = next;
        }

        if let Some(style) = IntStyle::from_conversion(c) {
            match args.next() {
                Some(&Arg::Int { value, bits }) => {
                    let text = format_integer(&mut buf, style, view(style, value, bits));
                    put_padded(out, text.as_bytes(), pad, pad0);
                }
                Some(Arg::Str(s)) => {
                    put_padded(out, s.unwrap_or(NULL_TEXT).as_bytes(), pad, pad0)
                }
                Some(Arg::Char(ch)) => {
                    let text = format_integer(&mut buf, style, *ch as i64);
                    put_padded(out, text.as_bytes(), pad, pad0);
                }
                None => {}
            }
            continue;
        }

        match (c, args.next()) {
            (b's', Some(Arg::Str(Some(s)))) => put_padded(out, s.as_bytes(), pad, pad0),
            (b's', Some(Arg::Str(None)) | None) => {
                put_padded(out, NULL_TEXT.as_bytes(), pad, pad0)
            }
            (b's', Some(Arg::Int { value, .. })) => {
                let text = format_integer(&mut buf, IntStyle::Signed, *value);
                put_padded(out, text.as_bytes(), pad, pad0);
            }
            (b's', Some(Arg::Char(ch))) => put_padded(out, &[*ch], pad, pad0),
            (_, Some(Arg::Int { value, .. })) => out.put_char(*value as u8),
            (_, Some(Arg::Char(ch))) => out.put_char(*ch),
            (_, Some(Arg::Str(s))) => {
                for b in s.unwrap_or(NULL_TEXT).bytes() {
                    out.put_char(b);
                }
            }
            (_, None) => {}
        }
    }
}

fn put_padded<W: PutChar + ?Sized>(out: &mut W, text: &[u8], pad: usize, pad0: bool) {
    let fill = if pad0 { b'0' } else { b' ' };
    for _ in text.len()..pad {
        out.put_char(fill);
    }
    for &b in text {
        out.put_char(b);
    }
}
