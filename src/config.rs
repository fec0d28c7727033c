//! Session configuration.
//!
//! There is no config file: the defaults reproduce the reference program and
//! embedders override fields directly before handing the value to a session.
use std::f32::consts::TAU;
use std::time::Duration;

use crate::error::{RaycastError, Result};

/// Edge length of one map cell in pixels, shared by the minimap and the caster.
pub const CELL_SIZE: u32 = 50;
pub const WINDOW_WIDTH: u32 = 1400;
pub const WINDOW_HEIGHT: u32 = 800;
pub const FRAME_CAP: u32 = 60;
pub const FOV_DEGREES: f32 = 60.0;
/// Pixel width of each projected wall strip.
pub const STRIP_WIDTH: u32 = 10;
/// Horizontal space between the minimap's right edge and the 3D view.
pub const MINIMAP_GAP: u32 = 100;
pub const ROTATE_STEP: f32 = 0.1;
pub const PLAYER_SIZE: f32 = 10.0;
/// Corrected distances below this are clamped before projecting.
pub const MIN_DISTANCE: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub frame_cap: u32,
    pub cell_size: u32,
    pub fov_degrees: f32,
    pub ray_count: usize,
    pub strip_width: u32,
    pub minimap_gap: u32,
    pub rotate_step: f32,
    pub player_size: f32,
    pub min_distance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Raytracing Application".to_string(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            frame_cap: FRAME_CAP,
            cell_size: CELL_SIZE,
            fov_degrees: FOV_DEGREES,
            // one ray per degree
            ray_count: FOV_DEGREES as usize,
            strip_width: STRIP_WIDTH,
            minimap_gap: MINIMAP_GAP,
            rotate_step: ROTATE_STEP,
            player_size: PLAYER_SIZE,
            min_distance: MIN_DISTANCE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let bad = |msg: String| Err(RaycastError::InvalidConfig(msg));

        if self.width == 0 || self.height == 0 {
            return bad(format!("window size {}x{} is empty", self.width, self.height));
        }
        if self.frame_cap == 0 {
            return bad("frame cap must be at least 1".into());
        }
        if self.cell_size == 0 {
            return bad("cell size must be positive".into());
        }
        // from 180 up the edge rays no longer point ahead and their corrected
        // distance drops to zero or below
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return bad(format!("fov {} is outside (0, 180)", self.fov_degrees));
        }
        if self.ray_count == 0 {
            return bad("ray count must be at least 1".into());
        }
        if self.strip_width == 0 {
            return bad("strip width must be positive".into());
        }
        if !(self.rotate_step > 0.0 && self.rotate_step < TAU) {
            return bad(format!("rotate step {} is outside (0, 2π)", self.rotate_step));
        }
        if !(self.player_size > 0.0) {
            return bad("player size must be positive".into());
        }
        if !(self.min_distance > 0.0) {
            return bad("minimum distance must be positive".into());
        }
        Ok(())
    }

    /// Wall time allotted to one frame.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(1000 / self.frame_cap.max(1) as u64)
    }
}
