/// Character printing in the four glyph sizes.

use crate::console::{Brightness, GlyphSize};
use crate::font::Glyph;
use crate::framebuffer::VideoRam;
use crate::memory::{VideoMemory, ROW_STRIDE};
use crate::roller::RollerDevice;

type DrawGlyph = fn(&mut VideoMemory, u16, &Glyph, Brightness);

/// Offset of each scanline of a two row high cell.
const DOUBLE_HEIGHT_OFFSETS: [u16; 16] = [
    0,
    1,
    2,
    3,
    4,
    5,
    6,
    7,
    ROW_STRIDE,
    ROW_STRIDE + 1,
    ROW_STRIDE + 2,
    ROW_STRIDE + 3,
    ROW_STRIDE + 4,
    ROW_STRIDE + 5,
    ROW_STRIDE + 6,
    ROW_STRIDE + 7,
];

impl<'a, D: RollerDevice> VideoRam<'a, D> {
    /// Print `text` at the cursor with the current size and brightness.
    ///
    /// Printing stops at the first NUL byte, so code 0 itself can never be
    /// shown; print a space instead.
    ///
    /// Double height and double size glyphs also fill the row under the
    /// cursor, so they must start on row 30 or above.
    pub fn print(&mut self, text: &[u8]) {
        let draw: DrawGlyph = match self.glyph_size() {
            GlyphSize::Normal => draw_normal,
            GlyphSize::DoubleWidth => draw_double_width,
            GlyphSize::DoubleHeight => draw_double_height,
            GlyphSize::Double => draw_double,
        };
        let font = self.font();
        let brightness = self.brightness();

        for &code in text.iter().take_while(|&&code| code != 0) {
            let at = self.cursor().address();
            draw(self.memory_mut(), at, &font[code as usize], brightness);
            self.advance_cursor();
        }
    }
}

/// The glyph is already in screen order: one copy.
fn draw_normal(memory: &mut VideoMemory, at: u16, glyph: &Glyph, _: Brightness) {
    memory.slice_mut(at, 8).copy_from_slice(glyph);
}

fn draw_double_width(memory: &mut VideoMemory, at: u16, glyph: &Glyph, brightness: Brightness) {
    for (i, &line) in (0u16..).zip(glyph) {
        memory.write(at + i, brightness.widen(line >> 4));
        memory.write(at + i + 8, brightness.widen(line & 15));
    }
}

fn draw_double_height(memory: &mut VideoMemory, at: u16, glyph: &Glyph, _: Brightness) {
    for (i, &line) in glyph.iter().enumerate() {
        // The same line is printed twice
        memory.write(at + DOUBLE_HEIGHT_OFFSETS[i * 2], line);
        memory.write(at + DOUBLE_HEIGHT_OFFSETS[i * 2 + 1], line);
    }
}

fn draw_double(memory: &mut VideoMemory, at: u16, glyph: &Glyph, brightness: Brightness) {
    for (i, &line) in glyph.iter().enumerate() {
        let left = brightness.widen(line >> 4);
        let right = brightness.widen(line & 15);
        let offset = at + DOUBLE_HEIGHT_OFFSETS[i * 2];

        memory.write(offset, left);
        memory.write(offset + 8, right);
        memory.write(offset + 1, left);
        memory.write(offset + 9, right);
    }
}

#[cfg(test)]
mod tests {
    use crate::console::{Brightness, GlyphSize};
    use crate::font::{Font, Glyph};
    use crate::framebuffer::testing::{video, video_reserving};
    use crate::memory::SCREEN_SIZE;

    const GLYPH: Glyph = [0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x09];

    static FONT: Font = {
        let mut font = [[0xEE; 8]; 256];
        font[b'A' as usize] = GLYPH;
        font
    };

    #[test]
    fn normal_copies_glyph() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.print(b"A");

        assert_eq!(&video.screen()[0..8], &GLYPH);
        assert!(video.screen()[8..].iter().all(|&b| b == 0));
        assert_eq!(video.cursor().col(), 1);
        assert_eq!(video.cursor().address(), video.layout().screen + 8);
    }

    #[test]
    fn print_stops_at_nul() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.print(b"AA\0A");
        assert_eq!(video.cursor().col(), 2);
        assert!(video.screen()[16..24].iter().all(|&b| b == 0));

        video.print(b"");
        assert_eq!(video.cursor().col(), 2);
    }

    #[test]
    fn ninety_glyphs_wrap_to_next_row() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.print(&[b'A'; 90]);
        assert_eq!((video.cursor().col(), video.cursor().row()), (0, 1));
        assert_eq!(video.cursor().address(), video.layout().screen + 720);
        assert_eq!(&video.screen()[712..720], &GLYPH);
    }

    #[test]
    fn last_cell_wraps_to_top_left() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.locate(89, 31);
        video.print(b"A");
        assert_eq!(&video.screen()[31 * 720 + 712..], &GLYPH);
        assert_eq!((video.cursor().col(), video.cursor().row()), (0, 0));
        assert_eq!(video.cursor().address(), video.layout().screen);

        // The next glyph overwrites the top-left cell.
        video.print(b"B");
        assert_eq!(&video.screen()[0..8], &[0xEE; 8]);
    }

    #[test]
    fn double_width_full_brightness() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.set_size(GlyphSize::DoubleWidth);
        video.print(b"A");

        let screen = video.screen();
        // Last line 0x09: left nibble 0000, right nibble 1001.
        assert_eq!(screen[7], 0x00);
        assert_eq!(screen[15], 0b1100_0011);
        // First line 0x81: 1000 | 0001.
        assert_eq!(screen[0], 0b1100_0000);
        assert_eq!(screen[8], 0b0000_0011);
        assert_eq!((video.cursor().col(), video.cursor().address()), (2, video.layout().screen + 16));
    }

    #[test]
    fn double_width_half_brightness() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.set_size(GlyphSize::DoubleWidth);
        video.set_brightness(Brightness::Half);
        video.print(b"A");

        let screen = video.screen();
        assert_eq!(screen[15], 0b1000_0010);
        assert_eq!(screen[3], 0b0000_0010);
        assert_eq!(screen[11], 0b1000_0000);
    }

    #[test]
    fn double_height_repeats_each_line() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.set_size(GlyphSize::DoubleHeight);
        video.locate(0, 2);
        video.print(b"A");

        let screen = video.screen();
        let top = 2 * 720;
        let bottom = 3 * 720;
        assert_eq!(&screen[top..top + 8], &[0x81, 0x81, 0x42, 0x42, 0x24, 0x24, 0x18, 0x18]);
        assert_eq!(&screen[bottom..bottom + 8], &[0x18, 0x18, 0x24, 0x24, 0x42, 0x42, 0x09, 0x09]);
        assert_eq!((video.cursor().col(), video.cursor().row()), (1, 2));
    }

    #[test]
    fn double_size_writes_four_bytes_per_line() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.set_size(GlyphSize::Double);
        video.print(b"A");

        let screen = video.screen();
        // Line 7 (0x09) lands on scanlines 6 and 7 of the lower row.
        assert_eq!(&screen[720 + 6..720 + 8], &[0x00, 0x00]);
        assert_eq!(&screen[720 + 14..720 + 16], &[0b1100_0011, 0b1100_0011]);
        // Line 0 (0x81) on scanlines 0 and 1 of the upper row.
        assert_eq!(&screen[0..2], &[0b1100_0000, 0b1100_0000]);
        assert_eq!(&screen[8..10], &[0b0000_0011, 0b0000_0011]);
        assert_eq!(video.cursor().address(), video.layout().screen + 16);
    }

    #[test]
    fn double_size_wrap_skips_a_row() {
        let mut bytes = Vec::new();
        let mut video = video(&mut bytes);
        video.set_font(&FONT);
        video.set_size(GlyphSize::Double);
        video.print(&[b'A'; 45]);
        assert_eq!((video.cursor().col(), video.cursor().row()), (0, 2));
        assert_eq!(video.cursor().address(), video.layout().screen + 2 * 720);
    }

    #[test]
    fn double_height_on_row_30_stays_inside_screen() {
        let mut bytes = Vec::new();
        let mut video = video_reserving(&mut bytes, 0);
        video.set_font(&FONT);
        video.set_size(GlyphSize::DoubleHeight);
        video.locate(89, 30);
        video.print(b"A");

        let screen = video.screen();
        assert_eq!(&screen[SCREEN_SIZE - 8..], &[0x18, 0x18, 0x24, 0x24, 0x42, 0x42, 0x09, 0x09]);
        assert_eq!(&screen[30 * 720 + 712..30 * 720 + 720], &[0x81, 0x81, 0x42, 0x42, 0x24, 0x24, 0x18, 0x18]);
        assert_eq!((video.cursor().col(), video.cursor().row()), (0, 0));
        assert_eq!(video.cursor().address(), video.layout().screen);
    }

    #[test]
    fn double_size_on_row_30_stays_inside_screen() {
        let mut bytes = Vec::new();
        let mut video = video_reserving(&mut bytes, 0);
        video.set_font(&FONT);
        video.set_size(GlyphSize::Double);
        video.locate(88, 30);
        video.print(b"A");

        let screen = video.screen();
        // Right half of line 7 (0x09) on the last two scanlines of the screen.
        assert_eq!(&screen[SCREEN_SIZE - 2..], &[0b1100_0011, 0b1100_0011]);
        assert_eq!((video.cursor().col(), video.cursor().row()), (0, 0));
        assert_eq!(video.cursor().address(), video.layout().screen);
    }
}
