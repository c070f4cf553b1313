// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Built-in picture set, generated at compile time.

use crate::config::{PICTURE_HEIGHT, PICTURE_WIDTH};
use crate::picture::Picture;

const W: usize = PICTURE_WIDTH as usize;
const H: usize = PICTURE_HEIGHT as usize;
const LEN: usize = 4 * W * H;

#[derive(Copy, Clone)]
enum Pattern {
    Gradient,
    Checker,
    Bars,
    Rings,
}

const fn render(pattern: Pattern) -> [u8; LEN] {
    let mut out = [0u8; LEN];
    let mut y = 0;
    while y < H {
        let mut x = 0;
        while x < W {
            let (r, g, b) = match pattern {
                Pattern::Gradient => ((x * 255 / (W - 1)) as u8, (y * 255 / (H - 1)) as u8, 0x80),
                Pattern::Checker => {
                    if (x / 16 + y / 16) % 2 == 0 {
                        (0xff, 0xff, 0xff)
                    } else {
                        (0x20, 0x20, 0x20)
                    }
                }
                Pattern::Bars => match x * 8 / W {
                    0 => (0xff, 0xff, 0xff),
                    1 => (0xff, 0xff, 0x00),
                    2 => (0x00, 0xff, 0xff),
                    3 => (0x00, 0xff, 0x00),
                    4 => (0xff, 0x00, 0xff),
                    5 => (0xff, 0x00, 0x00),
                    6 => (0x00, 0x00, 0xff),
                    _ => (0x00, 0x00, 0x00),
                },
                Pattern::Rings => {
                    let dx = if x > W / 2 { x - W / 2 } else { W / 2 - x };
                    let dy = if y > H / 2 { y - H / 2 } else { H / 2 - y };
                    let band = ((dx * dx + dy * dy) / 64) % 3;
                    match band {
                        0 => (0xe0, 0x30, 0x30),
                        1 => (0x30, 0xe0, 0x30),
                        _ => (0x30, 0x30, 0xe0),
                    }
                }
            };
            let at = 4 * (y * W + x);
            out[at] = r;
            out[at + 1] = g;
            out[at + 2] = b;
            out[at + 3] = 0xff;
            x += 1;
        }
        y += 1;
    }
    out
}

static GRADIENT: [u8; LEN] = render(Pattern::Gradient);
static CHECKER: [u8; LEN] = render(Pattern::Checker);
static BARS: [u8; LEN] = render(Pattern::Bars);
static RINGS: [u8; LEN] = render(Pattern::Rings);

pub static PICTURES: [Picture; 4] = [
    Picture::new(PICTURE_WIDTH, PICTURE_HEIGHT, &GRADIENT),
    Picture::new(PICTURE_WIDTH, PICTURE_HEIGHT, &CHECKER),
    Picture::new(PICTURE_WIDTH, PICTURE_HEIGHT, &BARS),
    Picture::new(PICTURE_WIDTH, PICTURE_HEIGHT, &RINGS),
];
