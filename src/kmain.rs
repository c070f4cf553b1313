// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
//! Boot sequencing: contract check, tag walk, then the endless slideshow.

use log::{error, info};

use crate::assets::PICTURES;
use crate::blit::Rgba32Surface;
use crate::bootinfo::BootHandoff;
use crate::clock::{BusyWaitClock, Delay};
use crate::config::{IDENTITY_MAPPED_END, SLIDE_DELAY_SECONDS};
use crate::console::{CONSOLE, Console, TextBuffer};
use crate::error::BootError;
use crate::multiboot2::select_framebuffer;
use crate::picture::Picture;

/// Clears the console, checks the boot contract and finds a framebuffer that
/// lies entirely below `mapped_end`.
///
/// Every failure is printed once on `console` before it is returned.
pub fn setup<B: TextBuffer>(
    console: &mut Console<B>,
    handoff: BootHandoff,
    mapped_end: u64,
) -> Result<Rgba32Surface, BootError> {
    console.clear();

    let boot = handoff.validate().inspect_err(|e| e.report(console))?;
    info!("[boot] multiboot2 info block at {:#x}", boot.address());

    // SAFETY: the loader owns the info block and keeps it mapped; its
    // address passed the contract check above.
    let tags = unsafe { boot.tags() };
    let fb = select_framebuffer(tags, |e| e.report(console)).ok_or_else(|| {
        BootError::NoFramebuffer.report(console);
        BootError::NoFramebuffer
    })?;

    Rgba32Surface::new(&fb, mapped_end).inspect_err(|e| e.report(console))
}

/// Cycles through a picture set. The index advances before each draw, so the
/// first picture shown is the second one in the set.
pub struct SlideShow<'p> {
    pictures: &'p [Picture],
    index: usize,
}

impl<'p> SlideShow<'p> {
    pub const fn new(pictures: &'p [Picture]) -> Self {
        Self { pictures, index: 0 }
    }

    pub fn next_picture(&mut self) -> Option<&'p Picture> {
        let len = self.pictures.len();
        if len == 0 {
            return None;
        }
        self.index = (self.index + 1) % len;
        self.pictures.get(self.index)
    }

    /// Draws the next picture and waits one slide interval.
    ///
    /// # Safety
    /// See [`Rgba32Surface::blit`].
    pub unsafe fn step<D: Delay>(&mut self, surface: &Rgba32Surface, delay: &mut D) {
        if let Some(picture) = self.next_picture() {
            unsafe { surface.blit(picture) };
        }
        delay.delay_seconds(SLIDE_DELAY_SECONDS);
    }
}

/// Draws forever. There is no way out short of a reset.
///
/// # Safety
/// See [`Rgba32Surface::blit`].
pub unsafe fn run<D: Delay>(surface: Rgba32Surface, pictures: &[Picture], mut delay: D) -> ! {
    info!(
        "[show] {} pictures on {}x{} surface",
        pictures.len(),
        surface.width(),
        surface.height()
    );
    let mut show = SlideShow::new(pictures);
    loop {
        unsafe { show.step(&surface, &mut delay) };
    }
}

/// Kernel body. Returns only when the boot cannot proceed.
pub fn kmain(handoff: BootHandoff) {
    let surface = {
        let mut console = CONSOLE.lock();
        match setup(&mut *console, handoff, IDENTITY_MAPPED_END) {
            Ok(surface) => surface,
            Err(e) => {
                error!("[boot] aborted: {}", e);
                return;
            }
        }
    };

    // SAFETY: the framebuffer comes from the loader's tag and lies inside the
    // identity map; the built-in pictures fit any mode the header asks for.
    unsafe { run(surface, &PICTURES, BusyWaitClock::new()) }
}
