/// Roller table: per-scanline redirection consumed by the display controller.
///
/// The controller does not scan the frame buffer linearly. For each of the
/// 256 scanlines it reads a word from the roller table telling it which bank
/// and which offset hold that scanline. We fill it so the screen follows the
/// column-major cell layout of `memory::pixel_address`, and keep a parallel
/// table of linear addresses for the software drawing primitives.

use crate::memory::{Layout, VideoMemory, ROW_STRIDE};

pub const ROLLER_ENTRIES: usize = 256;
/// Bytes taken by one view of the table.
pub const ROLLER_SIZE: usize = ROLLER_ENTRIES * 2;
/// Hardware view followed by the software view.
pub const ROLLER_TABLE_SIZE: usize = ROLLER_SIZE * 2;

pub const BANK_SIZE: u16 = 16384;
/// Bank number of the first 16 KiB of the address window.
pub const BASE_BANK: u16 = 4;

/// I/O port taking the roller table address.
pub const SET_ROLLER_ADDRESS: u16 = 0xF5;
/// Port value selecting the firmware's own roller table.
pub const DEFAULT_ROLLER: u8 = 0x5B;

const CHAR_ROWS: usize = 32;
const LINES_PER_ROW: usize = 8;

/// Sink for the single port write that points the controller at a table.
pub trait RollerDevice {
    fn set_roller_address(&mut self, value: u8);
}

impl<D: RollerDevice + ?Sized> RollerDevice for &mut D {
    fn set_roller_address(&mut self, value: u8) {
        (**self).set_roller_address(value);
    }
}

/// The real controller port.
#[cfg(target_arch = "x86_64")]
pub struct RollerPort {
    port: x86_64::instructions::port::Port<u8>,
}

#[cfg(target_arch = "x86_64")]
impl RollerPort {
    /// # Safety
    /// The caller must be running with I/O privilege on a machine whose port
    /// 0xF5 is the roller address register.
    pub const unsafe fn new() -> Self {
        Self {
            port: x86_64::instructions::port::Port::new(SET_ROLLER_ADDRESS),
        }
    }
}

#[cfg(target_arch = "x86_64")]
impl RollerDevice for RollerPort {
    fn set_roller_address(&mut self, value: u8) {
        unsafe {
            self.port.write(value);
        }
    }
}

/// Encode a linear address the way the controller decodes roller entries:
/// bank in the top 3 bits, then the in-bank offset with its low 3 bits kept
/// in place and the rest shifted down by one.
#[inline]
pub const fn descriptor(address: u16) -> u16 {
    let bank = (address >> 14) + BASE_BANK;
    let inbank = address & (BANK_SIZE - 1);
    (bank << 13) + ((inbank >> 1) & 0xFFF8) + (inbank & 7)
}

/// Port value telling the controller the table lives at `roller`.
#[inline]
pub const fn port_value(roller: u16) -> u8 {
    let bank = BASE_BANK + (roller >> 14);
    let offset = roller & (BANK_SIZE - 1);
    (bank * 32 + (offset >> 9)) as u8
}

pub struct RollerTable {
    descriptors: [u16; ROLLER_ENTRIES],
    line_starts: [u16; ROLLER_ENTRIES],
}

impl RollerTable {
    /// Build both views for a screen starting at `screen`.
    pub fn build(screen: u16) -> Self {
        let mut descriptors = [0; ROLLER_ENTRIES];
        let mut line_starts = [0; ROLLER_ENTRIES];
        let mut index = 0;

        // Each row base is computed rather than stepped to, so a screen
        // ending at the very top of the window never steps past it.
        for row in 0..CHAR_ROWS as u16 {
            let row_start = screen + row * ROW_STRIDE;
            for line in 0..LINES_PER_ROW as u16 {
                let address = row_start + line;
                line_starts[index] = address;
                descriptors[index] = descriptor(address);
                index += 1;
            }
        }

        Self {
            descriptors,
            line_starts,
        }
    }

    /// Linear address of the first byte of scanline `y`.
    #[inline]
    pub fn line_start(&self, y: u8) -> u16 {
        self.line_starts[y as usize]
    }

    pub fn descriptor(&self, y: u8) -> u16 {
        self.descriptors[y as usize]
    }

    pub fn line_starts(&self) -> &[u16; ROLLER_ENTRIES] {
        &self.line_starts
    }

    pub fn descriptors(&self) -> &[u16; ROLLER_ENTRIES] {
        &self.descriptors
    }

    /// Store both views where `layout` says the controller will find them.
    pub fn install(&self, memory: &mut VideoMemory, layout: &Layout) {
        for (i, (&desc, &start)) in self.descriptors.iter().zip(&self.line_starts).enumerate() {
            let offset = (i * 2) as u16;
            memory.write_word(layout.roller + offset, desc);
            memory.write_word(layout.line_starts + offset, start);
        }
    }
}

/// Point the controller at the table stored at `roller`.
pub fn commit<D: RollerDevice + ?Sized>(device: &mut D, roller: u16) {
    let value = port_value(roller);
    crate::serial_println!("videoram: roller table at {:#06x} (port value {:#04x})", roller, value);
    device.set_roller_address(value);
}

/// Give the screen back to the firmware's roller table.
pub fn restore<D: RollerDevice + ?Sized>(device: &mut D) {
    crate::serial_println!("videoram: restoring default roller table");
    device.set_roller_address(DEFAULT_ROLLER);
}
