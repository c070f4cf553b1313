// SPDX-License-Identifier: JOSSL-1.0
// Copyright (C) 2025 The Jotunheim Project
use core::marker::PhantomData;
use core::mem::size_of;

use log::warn;

use crate::util::align_up;

pub const TAG_ALIGN: usize = 8;
pub const TAG_HEADER_SIZE: usize = size_of::<TagHeader>();

#[repr(C)]
#[derive(Debug, Copy, Clone)]
struct TagHeader {
    typ: u32,
    size: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TagType {
    End,
    Cmdline,
    BootLoaderName,
    Module,
    BasicMeminfo,
    Bootdev,
    Mmap,
    Vbe,
    Framebuffer,
    ElfSections,
    Apm,
    Efi32,
    Efi64,
    Smbios,
    AcpiOld,
    AcpiNew,
    Network,
    EfiMmap,
    EfiBs,
    Efi32Ih,
    Efi64Ih,
    LoadBaseAddr,
    Unknown(u32),
}

impl From<u32> for TagType {
    fn from(v: u32) -> Self {
        match v {
            0 => TagType::End,
            1 => TagType::Cmdline,
            2 => TagType::BootLoaderName,
            3 => TagType::Module,
            4 => TagType::BasicMeminfo,
            5 => TagType::Bootdev,
            6 => TagType::Mmap,
            7 => TagType::Vbe,
            8 => TagType::Framebuffer,
            9 => TagType::ElfSections,
            10 => TagType::Apm,
            11 => TagType::Efi32,
            12 => TagType::Efi64,
            13 => TagType::Smbios,
            14 => TagType::AcpiOld,
            15 => TagType::AcpiNew,
            16 => TagType::Network,
            17 => TagType::EfiMmap,
            18 => TagType::EfiBs,
            19 => TagType::Efi32Ih,
            20 => TagType::Efi64Ih,
            21 => TagType::LoadBaseAddr,
            other => TagType::Unknown(other),
        }
    }
}

/// One tag of the stream, borrowed from loader memory.
#[derive(Debug, Copy, Clone)]
pub struct Tag<'a> {
    address: usize,
    header: TagHeader,
    _info: PhantomData<&'a [u8]>,
}

impl<'a> Tag<'a> {
    pub fn typ(&self) -> TagType {
        TagType::from(self.header.typ)
    }

    pub fn raw_type(&self) -> u32 {
        self.header.typ
    }

    /// Byte length including the 8-byte header.
    pub fn size(&self) -> u32 {
        self.header.size
    }

    pub fn address(&self) -> usize {
        self.address
    }

    /// The whole tag, header included.
    pub fn bytes(&self) -> &'a [u8] {
        // SAFETY: the iterator that produced this tag was created over memory
        // the caller vouched for; size >= header size was checked there.
        unsafe { core::slice::from_raw_parts(self.address as *const u8, self.header.size as usize) }
    }

    pub fn payload(&self) -> &'a [u8] {
        &self.bytes()[TAG_HEADER_SIZE..]
    }

    /// NUL-terminated text payload of `Cmdline` / `BootLoaderName` tags.
    pub fn string(&self) -> Option<&'a str> {
        match self.typ() {
            TagType::Cmdline | TagType::BootLoaderName => {
                let payload = self.payload();
                let end = payload.iter().position(|&b| b == 0).unwrap_or(payload.len());
                core::str::from_utf8(&payload[..end]).ok()
            }
            _ => None,
        }
    }
}

/// Lazy walk over the tag stream. Yields the end tag, then stops for good.
pub struct TagIter<'a> {
    cursor: usize,
    limit: Option<usize>,
    done: bool,
    _info: PhantomData<&'a [u8]>,
}

impl<'a> TagIter<'a> {
    /// # Safety
    /// `first` must be 8-byte aligned and point at a readable, well-formed
    /// tag stream that ends with an end tag.
    pub unsafe fn new(first: usize) -> Self {
        Self {
            cursor: first,
            limit: None,
            done: false,
            _info: PhantomData,
        }
    }

    /// Like [`TagIter::new`] but never reads a header at or past `end`.
    ///
    /// # Safety
    /// `first..end` must be readable.
    pub unsafe fn bounded(first: usize, end: usize) -> Self {
        Self {
            cursor: first,
            limit: Some(end),
            done: false,
            _info: PhantomData,
        }
    }
}

impl<'a> Iterator for TagIter<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        if self.done {
            return None;
        }
        if let Some(limit) = self.limit
            && self.cursor + TAG_HEADER_SIZE > limit
        {
            warn!("[mb2] tag stream ran past total_size at {:#x}", self.cursor);
            self.done = true;
            return None;
        }

        let header = unsafe { core::ptr::read_volatile(self.cursor as *const TagHeader) };
        if (header.size as usize) < TAG_HEADER_SIZE {
            warn!(
                "[mb2] malformed tag type={} size={} at {:#x}",
                header.typ, header.size, self.cursor
            );
            self.done = true;
            return None;
        }

        let tag = Tag {
            address: self.cursor,
            header,
            _info: PhantomData,
        };

        if tag.typ() == TagType::End {
            self.done = true;
        } else {
            self.cursor += align_up(header.size as usize, TAG_ALIGN);
        }
        Some(tag)
    }
}
