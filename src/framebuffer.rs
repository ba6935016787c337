/// Frame buffer driver.
///
/// `VideoRam` owns everything the driver needs: the memory it draws into,
/// the roller table pointing the controller at it, the text cursor and the
/// character attributes. Glyph printing lives in `render`, line drawing in
/// `draw`.
///
/// A session is `init`, any number of drawing calls, then `restore`, which
/// hands the screen back to the firmware.

use spin::Mutex;

use crate::console::{Brightness, Cursor, GlyphSize};
use crate::font::{Font, STANDARD};
use crate::memory::{Layout, LayoutError, VideoMemory, SCREEN_SIZE};
use crate::roller::{self, RollerDevice, RollerTable};

pub struct VideoRam<'a, D: RollerDevice> {
    memory: VideoMemory<'a>,
    layout: Layout,
    table: RollerTable,
    cursor: Cursor,
    size: GlyphSize,
    brightness: Brightness,
    font: &'a Font,
    device: D,
}

impl<'a, D: RollerDevice> VideoRam<'a, D> {
    /// Lay out the screen and roller table in `memory`, keeping `reservation`
    /// bytes free at its top, then clear the screen and switch the controller
    /// over to it.
    pub fn init(memory: VideoMemory<'a>, reservation: usize, device: D) -> Result<Self, LayoutError> {
        let layout = Layout::plan(memory.origin(), memory.len(), reservation)?;
        crate::serial_println!(
            "videoram: roller {:#06x}, line starts {:#06x}, screen {:#06x}",
            layout.roller,
            layout.line_starts,
            layout.screen
        );

        let mut video = Self {
            memory,
            layout,
            table: RollerTable::build(layout.screen),
            cursor: Cursor::new(layout.screen),
            size: GlyphSize::Normal,
            brightness: Brightness::Full,
            font: &STANDARD,
            device,
        };
        video.table.install(&mut video.memory, &video.layout);
        video.clear_screen();
        video.commit();
        Ok(video)
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn table(&self) -> &RollerTable {
        &self.table
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn memory(&self) -> &VideoMemory<'a> {
        &self.memory
    }

    pub(crate) fn memory_mut(&mut self) -> &mut VideoMemory<'a> {
        &mut self.memory
    }

    /// The whole frame buffer, in cell order.
    pub fn screen(&self) -> &[u8] {
        self.memory.slice(self.layout.screen, SCREEN_SIZE)
    }

    pub fn glyph_size(&self) -> GlyphSize {
        self.size
    }

    pub fn set_size(&mut self, size: GlyphSize) {
        self.size = size;
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Only double width characters are affected.
    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.brightness = brightness;
    }

    pub fn font(&self) -> &'a Font {
        self.font
    }

    pub fn set_font(&mut self, font: &'a Font) {
        self.font = font;
    }

    pub(crate) fn advance_cursor(&mut self) {
        self.cursor.advance(self.layout.screen, self.size);
    }

    /// Position of the next character. col=[0..89], row=[0..31]
    ///
    /// Double height and double size glyphs cover the row below too, so
    /// they need row <= 30.
    pub fn locate(&mut self, col: u8, row: u8) {
        self.cursor.locate(self.layout.screen, col, row);
    }

    pub fn clear_screen(&mut self) {
        self.memory.slice_mut(self.layout.screen, SCREEN_SIZE).fill(0);
    }

    /// Point the controller at our roller table. Needed again only if the
    /// table moves.
    pub fn commit(&mut self) {
        roller::commit(&mut self.device, self.layout.roller);
    }

    /// Switch the controller back to the firmware's table and end the session.
    pub fn restore(mut self) -> D {
        roller::restore(&mut self.device);
        self.device
    }
}

/// Device handle held by the global driver.
pub type SharedDevice = &'static mut (dyn RollerDevice + Send);

pub static VIDEO: Mutex<Option<VideoRam<'static, SharedDevice>>> = Mutex::new(None);

/// Start the global driver on `memory`, whose first byte is at `origin`.
pub fn init(
    memory: &'static mut [u8],
    origin: u16,
    reservation: usize,
    device: SharedDevice,
) -> Result<(), LayoutError> {
    crate::serial::init();
    let video = VideoRam::init(VideoMemory::new(origin, memory), reservation, device)?;
    *VIDEO.lock() = Some(video);
    Ok(())
}

fn with_video(f: impl FnOnce(&mut VideoRam<'static, SharedDevice>)) {
    let mut video = VIDEO.lock();
    if let Some(v) = video.as_mut() {
        f(v);
    }
}

pub fn set_size(size: GlyphSize) {
    with_video(|v| v.set_size(size));
}

pub fn set_brightness(brightness: Brightness) {
    with_video(|v| v.set_brightness(brightness));
}

pub fn set_font(font: &'static Font) {
    with_video(|v| v.set_font(font));
}

pub fn locate(col: u8, row: u8) {
    with_video(|v| v.locate(col, row));
}

pub fn print(text: &[u8]) {
    with_video(|v| v.print(text));
}

pub fn clear_screen() {
    with_video(|v| v.clear_screen());
}

pub fn vertical_line(x: u16, y1: u8, y2: u8) {
    with_video(|v| v.vertical_line(x, y1, y2));
}

pub fn horizontal_line(x1: u16, x2: u16, y: u8) {
    with_video(|v| v.horizontal_line(x1, x2, y));
}

pub fn frame(left: u16, top: u8, right: u16, bottom: u8) {
    with_video(|v| v.frame(left, top, right, bottom));
}

/// End the global session. Later calls do nothing.
pub fn restore() {
    if let Some(video) = VIDEO.lock().take() {
        video.restore();
    }
}
