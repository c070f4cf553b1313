// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Integer to text without `core::fmt`.

/// Large enough for every `i64` in decimal (with sign) and every `u64`.
pub const INT_BUF_LEN: usize = 20;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IntStyle {
    /// `%d`: decimal, `-` prefix for negatives.
    Signed,
    /// `%u`: decimal of the raw bit pattern.
    Unsigned,
    /// `%x`: lowercase hex of the raw bit pattern, no prefix.
    Hex,
}

impl IntStyle {
    pub fn from_conversion(c: u8) -> Option<Self> {
        match c {
            b'd' => Some(Self::Signed),
            b'u' => Some(Self::Unsigned),
            b'x' => Some(Self::Hex),
            _ => None,
        }
    }
}

/// Writes `value` into `buf` least significant digit first, then reverses
/// the digits in place. Returns the text.
pub fn format_integer(buf: &mut [u8; INT_BUF_LEN], style: IntStyle, value: i64) -> &str {
    let mut p = 0;
    let mut start = 0;
    let mut ud = value as u64;
    let mut divisor = 10;

    match style {
        IntStyle::Signed if value < 0 => {
            buf[0] = b'-';
            p = 1;
            start = 1;
            ud = value.unsigned_abs();
        }
        IntStyle::Hex => divisor = 16,
        _ => {}
    }

    loop {
        let remainder = (ud % divisor) as u8;
        buf[p] = if remainder < 10 {
            remainder + b'0'
        } else {
            remainder - 10 + b'a'
        };
        p += 1;
        ud /= divisor;
        if ud == 0 {
            break;
        }
    }

    buf[start..p].reverse();

    core::str::from_utf8(&buf[..p]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(style: IntStyle, v: i64) -> std::string::String {
        let mut buf = [0u8; INT_BUF_LEN];
        format_integer(&mut buf, style, v).into()
    }

    #[test]
    fn decimal_round_trips_i32_samples() {
        let samples = [
            0,
            1,
            -1,
            9,
            10,
            -42,
            12345,
            i32::MAX,
            i32::MIN,
            i32::MIN + 1,
        ];
        for v in samples {
            let s = fmt(IntStyle::Signed, v as i64);
            assert_eq!(s.parse::<i32>().unwrap(), v, "{s}");
        }
        let mut v: i32 = 7;
        for _ in 0..200 {
            v = v.wrapping_mul(-1_103_515_245).wrapping_add(12_345);
            assert_eq!(fmt(IntStyle::Signed, v as i64).parse::<i32>().unwrap(), v);
        }
    }

    #[test]
    fn hex_matches_std_for_u32_samples() {
        let mut v: u32 = 1;
        for _ in 0..200 {
            assert_eq!(fmt(IntStyle::Hex, v as i64), format!("{v:x}"));
            v = v.wrapping_mul(2_654_435_761).wrapping_add(1);
        }
        assert_eq!(fmt(IntStyle::Hex, 0), "0");
        assert_eq!(fmt(IntStyle::Hex, u32::MAX as i64), "ffffffff");
        assert_eq!(fmt(IntStyle::Hex, 0x36d7_6289), "36d76289");
    }

    #[test]
    fn extremes_fit_the_buffer() {
        assert_eq!(fmt(IntStyle::Signed, i64::MIN), "-9223372036854775808");
        assert_eq!(fmt(IntStyle::Unsigned, -1), "18446744073709551615");
        assert_eq!(fmt(IntStyle::Hex, -1), "ffffffffffffffff");
    }

    #[test]
    fn unsigned_ignores_sign() {
        assert_eq!(fmt(IntStyle::Unsigned, 255), "255");
        assert_eq!(fmt(IntStyle::Unsigned, u32::MAX as i64), "4294967295");
    }

    #[test]
    fn conversion_chars_map_to_styles() {
        assert_eq!(IntStyle::from_conversion(b'd'), Some(IntStyle::Signed));
        assert_eq!(IntStyle::from_conversion(b'u'), Some(IntStyle::Unsigned));
        assert_eq!(IntStyle::from_conversion(b'x'), Some(IntStyle::Hex));
        assert_eq!(IntStyle::from_conversion(b's'), None);
    }
}
