/// Video memory layout.
///
/// The driver works inside a 16-bit address window made of four 16 KiB banks.
/// `VideoMemory` is a typed view over the part of that window handed to us,
/// and `Layout::plan` carves the roller table and the screen out of its top,
/// just under the space the caller keeps for itself (usually the stack):
///
///   origin ... | roller (512) | line starts (512) | screen (23040) | reserved | top
///
/// The roller table must sit on a 512-byte boundary because the controller
/// is told its address as a bank number plus a 9-bit-aligned offset.

use core::fmt;

use crate::roller::{ROLLER_SIZE, ROLLER_TABLE_SIZE};

pub const SCREEN_WIDTH: usize = 720;
pub const SCREEN_HEIGHT: usize = 256;
pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT / 8;

/// Bytes between the same scanline of two consecutive character rows.
pub const ROW_STRIDE: u16 = SCREEN_WIDTH as u16;

const ADDRESS_SPACE: usize = 1 << 16;
const ROLLER_ALIGN_MASK: u32 = !(ROLLER_SIZE as u32 - 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The region cannot hold the aligned table, the screen and the reservation.
    RegionTooSmall { needed: usize, available: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::RegionTooSmall { needed, available } => write!(
                f,
                "video memory region too small: need {} bytes, have {}",
                needed, available
            ),
        }
    }
}

/// Addresses chosen for the driver's structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Hardware view of the roller table, 512-byte aligned.
    pub roller: u16,
    /// Software view: linear start address of every scanline.
    pub line_starts: u16,
    /// First byte of the frame buffer.
    pub screen: u16,
}

impl Layout {
    /// Plan the layout for a region starting at `origin` and `len` bytes long,
    /// leaving `reservation` bytes free at its top.
    pub fn plan(origin: u16, len: usize, reservation: usize) -> Result<Self, LayoutError> {
        let top = (origin as usize + len).min(ADDRESS_SPACE);
        let wanted = reservation + SCREEN_SIZE + ROLLER_TABLE_SIZE;

        let roller = top
            .checked_sub(wanted)
            .map(|start| start as u32 & ROLLER_ALIGN_MASK)
            .filter(|&roller| roller >= origin as u32)
            .ok_or(LayoutError::RegionTooSmall {
                needed: align_up(origin as usize, ROLLER_SIZE) - origin as usize + wanted,
                available: len,
            })?;

        let roller = roller as u16;
        Ok(Self {
            roller,
            line_starts: roller + ROLLER_SIZE as u16,
            screen: roller + ROLLER_TABLE_SIZE as u16,
        })
    }

    /// One past the last screen byte.
    pub fn screen_end(&self) -> usize {
        self.screen as usize + SCREEN_SIZE
    }
}

const fn align_up(value: usize, align: usize) -> usize {
    (value + align - 1) / align * align
}

/// Screen address of the byte holding pixel (x, y).
///
/// Each 8x8 character cell is stored as 8 consecutive bytes, one per
/// scanline, and cells follow each other left to right, then row by row.
#[inline]
pub const fn pixel_address(screen: u16, x: u16, y: u16) -> u16 {
    screen + (y / 8) * ROW_STRIDE + (x & !7) + (y % 8)
}

/// Screen address of the character cell at (col, row).
#[inline]
pub const fn cell_address(screen: u16, col: u8, row: u8) -> u16 {
    screen + row as u16 * ROW_STRIDE + col as u16 * 8
}

/// A slice of the 16-bit address window starting at `origin`.
pub struct VideoMemory<'a> {
    origin: u16,
    bytes: &'a mut [u8],
}

impl<'a> VideoMemory<'a> {
    pub fn new(origin: u16, bytes: &'a mut [u8]) -> Self {
        Self { origin, bytes }
    }

    pub fn origin(&self) -> u16 {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    fn index(&self, address: u16) -> usize {
        (address - self.origin) as usize
    }

    #[inline]
    pub fn read(&self, address: u16) -> u8 {
        self.bytes[self.index(address)]
    }

    #[inline]
    pub fn write(&mut self, address: u16, value: u8) {
        let i = self.index(address);
        self.bytes[i] = value;
    }

    #[inline]
    pub fn or(&mut self, address: u16, mask: u8) {
        let i = self.index(address);
        self.bytes[i] |= mask;
    }

    pub fn slice(&self, address: u16, len: usize) -> &[u8] {
        let i = self.index(address);
        &self.bytes[i..i + len]
    }

    pub fn slice_mut(&mut self, address: u16, len: usize) -> &mut [u8] {
        let i = self.index(address);
        &mut self.bytes[i..i + len]
    }

    /// Little-endian word, as the controller reads table entries.
    pub fn read_word(&self, address: u16) -> u16 {
        let i = self.index(address);
        u16::from_le_bytes([self.bytes[i], self.bytes[i + 1]])
    }

    pub fn write_word(&mut self, address: u16, value: u16) {
        let i = self.index(address);
        self.bytes[i..i + 2].copy_from_slice(&value.to_le_bytes());
    }
}
