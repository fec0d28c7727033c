use crate::render::line::bresenham;
use crate::render::surface::{Color, Surface};

/// CPU pixel buffer implementing [`Surface`]. The window front end draws
/// into one of these and uploads it once per frame.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    presented: u64,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            presented: 0,
        }
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    /// The pixels as tightly packed RGBA8 bytes, ready for a texture upload.
    pub fn as_rgba_bytes(&self) -> &[u8] {
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        // SAFETY: `Color` is `repr(C)` with four `u8` fields, so it has size 4,
        // alignment 1 and no padding.
        unsafe { std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len) }
    }
}

impl Surface for Framebuffer {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for py in y0..y1 {
            let row = (py as usize) * self.width as usize;
            self.color_buffer[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        bresenham(x0, y0, x1, y1, |x, y| self.set_pixel_color(x, y, color));
    }

    #[inline]
    fn clear(&mut self, color: Color) {
        self.background_color = color;
        self.color_buffer.fill(color);
    }

    fn present(&mut self) {
        self.presented += 1;
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
