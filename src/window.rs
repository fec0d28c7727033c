//! raylib front end: window, keyboard and frame upload.
use std::time::{Duration, Instant};

use raylib::core::texture::RaylibTexture2D;
use raylib::prelude::{Image, KeyboardKey, RaylibDraw, RaylibHandle, RaylibThread, Texture2D};
use tracing::info;

use crate::core::process_events::InputState;
use crate::error::{RaycastError, Result};
use crate::render::framebuffer::Framebuffer;
use crate::render::surface::{Color, Surface};
use crate::session::Platform;

/// Draws into a CPU [`Framebuffer`] and shows it through a persistent
/// texture on `present`.
pub struct WindowSurface {
    // Fields drop in declaration order: the texture has to be unloaded while
    // the GL context that `rl` owns is still open.
    texture: Texture2D,
    framebuffer: Framebuffer,
    thread: RaylibThread,
    rl: RaylibHandle,
}

impl Surface for WindowSurface {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        self.framebuffer.fill_rect(x, y, w, h, color);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.framebuffer.draw_line(x0, y0, x1, y1, color);
    }

    fn clear(&mut self, color: Color) {
        self.framebuffer.clear(color);
    }

    fn present(&mut self) {
        self.framebuffer.present();
        let _ = self.texture.update_texture(self.framebuffer.as_rgba_bytes());

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(raylib::color::Color::BLACK);
        d.draw_texture(&self.texture, 0, 0, raylib::color::Color::WHITE);
    }

    fn size(&self) -> (u32, u32) {
        self.framebuffer.size()
    }
}

pub struct WindowPlatform {
    surface: WindowSurface,
    started: Instant,
}

impl Platform for WindowPlatform {
    type Surface = WindowSurface;

    fn init(title: &str, width: u32, height: u32) -> Result<Self> {
        // raylib panics instead of returning when the window cannot be made
        let built = std::panic::catch_unwind(|| {
            raylib::init()
                .size(width as i32, height as i32)
                .title(title)
                .build()
        });
        let (mut rl, thread) =
            built.map_err(|_| RaycastError::Init("raylib could not open a window".into()))?;
        if !rl.is_window_ready() {
            return Err(RaycastError::Init("window is not ready".into()));
        }

        let image = Image::gen_image_color(
            width as i32,
            height as i32,
            raylib::color::Color::BLACK,
        );
        let texture = rl
            .load_texture_from_image(&thread, &image)
            .map_err(|e| RaycastError::Init(format!("frame texture: {e}")))?;

        info!(title, width, height, "window open");
        Ok(Self {
            surface: WindowSurface {
                texture,
                framebuffer: Framebuffer::new(width, height),
                thread,
                rl,
            },
            started: Instant::now(),
        })
    }

    /// raylib processes every pending event when a frame ends, so the key
    /// state read here already reflects the whole backlog.
    fn poll_input(&mut self) -> InputState {
        let rl = &self.surface.rl;
        let down = |keys: &[KeyboardKey]| keys.iter().any(|&k| rl.is_key_down(k));
        InputState {
            rotate_left: down(&[KeyboardKey::KEY_LEFT, KeyboardKey::KEY_A]),
            rotate_right: down(&[KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_D]),
            forward: down(&[KeyboardKey::KEY_UP, KeyboardKey::KEY_W]),
            backward: down(&[KeyboardKey::KEY_DOWN, KeyboardKey::KEY_S]),
            quit: rl.window_should_close(),
        }
    }

    fn surface(&mut self) -> &mut WindowSurface {
        &mut self.surface
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
