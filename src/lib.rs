//! Frame buffer driver for a 720x256 monochrome screen scanned through a
//! roller table.
//!
//! The driver places its own screen memory and roller table in a banked
//! 16-bit address window, points the display controller at the table, and
//! draws text in four sizes plus horizontal, vertical and rectangle outlines.
//!
//! Use `VideoRam` directly, or the process-wide driver through the free
//! functions re-exported here.

#![cfg_attr(not(test), no_std)]

pub mod console;
pub mod demo;
pub mod draw;
pub mod font;
pub mod framebuffer;
pub mod memory;
pub mod render;
pub mod roller;
pub mod serial;

pub use console::{Brightness, Cursor, GlyphSize, COLUMNS, ROWS};
pub use font::{Font, Glyph, STANDARD};
pub use framebuffer::{
    clear_screen, frame, horizontal_line, init, locate, print, restore, set_brightness, set_font,
    set_size, vertical_line, SharedDevice, VideoRam, VIDEO,
};
pub use memory::{
    cell_address, pixel_address, Layout, LayoutError, VideoMemory, SCREEN_HEIGHT, SCREEN_SIZE,
    SCREEN_WIDTH,
};
#[cfg(target_arch = "x86_64")]
pub use roller::RollerPort;
pub use roller::{RollerDevice, RollerTable, DEFAULT_ROLLER, SET_ROLLER_ADDRESS};
