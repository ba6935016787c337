/// Text cursor and character attributes.
///
/// The cursor keeps its row, column and screen address in step. Printing
/// only ever moves it forward: past column 89 it drops to the next row,
/// past row 31 it goes back to the top-left corner and overwrites whatever
/// is there. There is no scrolling.

use crate::memory::{cell_address, ROW_STRIDE};

pub const COLUMNS: u8 = 90;
pub const ROWS: u8 = 32;

/// Character magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum GlyphSize {
    #[default]
    Normal = 0,
    DoubleWidth = 1,
    DoubleHeight = 2,
    Double = 3,
}

impl GlyphSize {
    pub const fn doubles_width(self) -> bool {
        self as u8 & 1 != 0
    }

    pub const fn doubles_height(self) -> bool {
        self as u8 & 2 != 0
    }
}

/// Look up table: 4 bits to 8 bits by duplicating each bit.
/// Ex.: 1001 -> 11000011
const DOUBLE_BITS_FULL: [u8; 16] = [
    0, 3, 12, 15, 48, 51, 60, 63, 192, 195, 204, 207, 240, 243, 252, 255,
];

/// Look up table: 4 bits to 8 bits with a 0 after each bit.
/// Ex.: 1111 -> 10101010
const DOUBLE_BITS_HALF: [u8; 16] = [
    0, 2, 8, 10, 32, 34, 40, 42, 128, 130, 136, 138, 160, 162, 168, 170,
];

/// How double width characters fill the extra pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brightness {
    #[default]
    Full,
    Half,
}

impl Brightness {
    /// Widen a nibble to a byte.
    #[inline]
    pub fn widen(self, nibble: u8) -> u8 {
        let table = match self {
            Brightness::Full => &DOUBLE_BITS_FULL,
            Brightness::Half => &DOUBLE_BITS_HALF,
        };
        table[(nibble & 15) as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    col: u8,
    row: u8,
    address: u16,
}

impl Cursor {
    /// Cursor at the top-left cell of a screen starting at `screen`.
    pub const fn new(screen: u16) -> Self {
        Self {
            col: 0,
            row: 0,
            address: screen,
        }
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Screen address the next character goes to.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// col=[0..89], row=[0..31], or row=[0..30] for double height glyphs.
    pub fn locate(&mut self, screen: u16, col: u8, row: u8) {
        self.col = col;
        self.row = row;
        self.address = cell_address(screen, col, row);
    }

    /// Move past one printed character of the given size.
    pub fn advance(&mut self, screen: u16, size: GlyphSize) {
        if size.doubles_width() {
            self.col += 2;
            self.address = self.address.wrapping_add(16);
        } else {
            self.col += 1;
            self.address = self.address.wrapping_add(8);
        }

        if self.col < COLUMNS {
            return;
        }

        // The address already points at the next row; double height
        // characters skip one more.
        self.col = 0;
        if size.doubles_height() {
            self.row += 2;
            self.address = self.address.wrapping_add(ROW_STRIDE);
        } else {
            self.row += 1;
        }

        if self.row < ROWS {
            return;
        }

        self.row = 0;
        self.address = screen;
    }
}
