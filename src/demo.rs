/// Demo screen: every glyph size, the box drawing characters, and the whole
/// character set framed by the line primitives.

use crate::console::GlyphSize;
use crate::font::{BOX_DOWN, BOX_FIRST, BOX_LEFT, BOX_RIGHT, BOX_UP};
use crate::framebuffer::VideoRam;
use crate::roller::RollerDevice;

const TOP_LEFT: u8 = BOX_FIRST | BOX_RIGHT | BOX_DOWN;
const TOP_RIGHT: u8 = BOX_FIRST | BOX_LEFT | BOX_DOWN;
const BOTTOM_LEFT: u8 = BOX_FIRST | BOX_UP | BOX_RIGHT;
const BOTTOM_RIGHT: u8 = BOX_FIRST | BOX_UP | BOX_LEFT;
const HORIZONTAL: u8 = BOX_FIRST | BOX_LEFT | BOX_RIGHT;
const VERTICAL: u8 = BOX_FIRST | BOX_UP | BOX_DOWN;

/// Column of the character table.
pub const TABLE_COLUMN: u8 = 90 - 65;

const NOTES: [&[u8]; 9] = [
    b"Every scanline is found",
    b"through the roller table",
    b"set up by the driver.",
    b"",
    b"Characters are stored",
    b"as 8 bytes per cell, one",
    b"per scanline, so normal",
    b"size text is a single",
    b"8 byte copy.",
];

pub fn paint<D: RollerDevice>(video: &mut VideoRam<D>) {
    // Title frame
    let mut top = [HORIZONTAL; 9];
    top[0] = TOP_LEFT;
    top[8] = TOP_RIGHT;
    video.set_size(GlyphSize::DoubleWidth);
    video.locate(3, 0);
    video.print(&top);

    let mut sides = [b' '; 9];
    sides[0] = VERTICAL;
    sides[8] = VERTICAL;
    video.set_size(GlyphSize::Double);
    video.locate(3, 1);
    video.print(&sides);

    let mut bottom = [HORIZONTAL; 9];
    bottom[0] = BOTTOM_LEFT;
    bottom[8] = BOTTOM_RIGHT;
    video.set_size(GlyphSize::DoubleWidth);
    video.locate(3, 3);
    video.print(&bottom);

    video.set_size(GlyphSize::DoubleHeight);
    video.locate(5, 1);
    video.print(b"VideoRAM demo!");

    video.set_size(GlyphSize::Normal);
    for (row, line) in (5u8..).zip(NOTES) {
        video.locate(0, row);
        video.print(line);
    }

    // Every character but 0, which would end the string.
    video.set_size(GlyphSize::Double);
    let mut line = [b' '; 32];
    for high in 0..16u8 {
        for low in 0..16u8 {
            line[low as usize * 2] = (high << 4) + low;
        }
        if line[0] == 0 {
            line[0] = b' ';
        }
        video.locate(TABLE_COLUMN, high * 2);
        video.print(&line);
    }

    let left = TABLE_COLUMN as u16 * 8 - 4;
    video.frame(left, 0, 715, 255);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Brightness;
    use crate::font::STANDARD;
    use crate::framebuffer::testing::video;
    use crate::memory::cell_address;

    #[test]
    fn paints_character_table() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        paint(&mut video);
        let screen = video.layout().screen;

        // 'A' is code 0x41: table row 4, entry 1, two double width cells in.
        let at = cell_address(screen, TABLE_COLUMN + 4, 8);
        let glyph = STANDARD[b'A' as usize];
        assert_eq!(video.memory().read(at), Brightness::Full.widen(glyph[0] >> 4));
        assert_eq!(video.memory().read(at + 1), Brightness::Full.widen(glyph[0] >> 4));
        assert_eq!(video.memory().read(at + 8), Brightness::Full.widen(glyph[0] & 15));

        // Code 0 is shown as a blank cell, apart from the frame's top line.
        let origin = cell_address(screen, TABLE_COLUMN, 0);
        for offset in (1..8).chain(9..16).chain(720..736) {
            assert_eq!(video.memory().read(origin + offset), 0, "offset {}", offset);
        }
        assert_eq!(video.memory().read(origin), 0xFF);
    }

    #[test]
    fn paints_title_and_frame() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        paint(&mut video);
        let screen = video.layout().screen;

        // Double width top-left corner: right arm and down arm.
        let corner = cell_address(screen, 3, 0);
        assert_eq!(video.memory().read(corner + 3), Brightness::Full.widen(0x1));
        assert_eq!(video.memory().read(corner + 8 + 3), 0xFF);

        // Frame sides.
        for y in 0..=255 {
            assert!(video.pixel(TABLE_COLUMN as u16 * 8 - 4, y));
            assert!(video.pixel(715, y));
        }

        assert_eq!(video.glyph_size(), GlyphSize::Double);
        assert_eq!(video.cursor().col(), TABLE_COLUMN + 64);
        assert_eq!(video.cursor().row(), 30);
    }
}
