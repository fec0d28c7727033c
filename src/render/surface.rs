//! Drawing surface contract shared by the CPU framebuffer, the window front
//! end and tests.

/// RGBA8 color. Laid out as four bytes so a slice of colors is a valid
/// RGBA8 pixel buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const GREY: Color = Color::new(128, 128, 128, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// The primitives a frame is drawn with. Coordinates are in surface pixels;
/// implementations clip anything that falls off the surface.
pub trait Surface {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
    fn clear(&mut self, color: Color);
    /// Hands the finished frame to the display.
    fn present(&mut self);
    fn size(&self) -> (u32, u32);
}

/// One recorded primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Color,
    },
    Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    },
    Present,
}

/// Surface that rasterizes nothing and logs every call, in order.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn frames_presented(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h, color });
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.commands.push(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            color,
        });
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
