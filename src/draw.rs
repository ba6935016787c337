/// Line drawing.
///
/// Pixels are found through the roller table's line starts rather than the
/// cell formula: the line start of scanline y plus x & !7 is the byte
/// holding pixel x. Coordinates are not checked, x must be in [0..719] and
/// y in [0..255].

use crate::framebuffer::VideoRam;
use crate::roller::RollerDevice;

/// Bit of pixel x & 7.
const PIXEL_MASKS: [u8; 8] = [128, 64, 32, 16, 8, 4, 2, 1];

/// Pixels from x & 7 to the end of the byte.
const START_MASKS: [u8; 8] = [0xFF, 0x7F, 0x3F, 0x1F, 0x0F, 0x07, 0x03, 0x01];

/// Pixels from the start of the byte to x & 7.
const END_MASKS: [u8; 8] = [0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE, 0xFF];

impl<'a, D: RollerDevice> VideoRam<'a, D> {
    pub fn pixel(&self, x: u16, y: u8) -> bool {
        let address = self.table().line_start(y) + (x & !7);
        self.memory().read(address) & PIXEL_MASKS[(x & 7) as usize] != 0
    }

    /// Vertical line from (x, y1) to (x, y2), both ends included.
    pub fn vertical_line(&mut self, x: u16, y1: u8, y2: u8) {
        let mask = PIXEL_MASKS[(x & 7) as usize];
        let offset = x & !7;

        for y in y1..=y2 {
            let address = self.table().line_start(y) + offset;
            self.memory_mut().or(address, mask);
        }
    }

    /// Horizontal line from (x1, y) to (x2, y), both ends included.
    pub fn horizontal_line(&mut self, x1: u16, x2: u16, y: u8) {
        let start = START_MASKS[(x1 & 7) as usize];
        let end = END_MASKS[(x2 & 7) as usize];
        let first = x1 & !7;
        let last = x2 & !7;
        let line = self.table().line_start(y);
        let memory = self.memory_mut();

        if first == last {
            memory.or(line + first, start & end);
            return;
        }

        memory.or(line + first, start);
        // Bytes of one scanline are 8 apart.
        for column in (first + 8..last).step_by(8) {
            memory.write(line + column, 0xFF);
        }
        memory.or(line + last, end);
    }

    /// Rectangle outline with corners (left, top) and (right, bottom).
    pub fn frame(&mut self, left: u16, top: u8, right: u16, bottom: u8) {
        self.vertical_line(left, top, bottom);
        self.vertical_line(right, top, bottom);
        self.horizontal_line(left, right, top);
        self.horizontal_line(left, right, bottom);
    }
}
