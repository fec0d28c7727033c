//! Column renderer for walls and whole-frame composition.
use crate::config::Config;
use crate::core::maze::Maze;
use crate::core::player::Player;
use crate::error::{RaycastError, Result};
use crate::render::casters::{RaySample, column_height};
use crate::render::minimap::{draw_player, draw_rays, render_maze};
use crate::render::surface::{Color, Surface};

pub const BACKGROUND: Color = Color::BLACK;
pub const STRIP_COLOR: Color = Color::RED;

/// Screen rectangle of one wall column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Where the 3D view sits on screen and how samples become strips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub block_size: u32,
    /// Left edge of the 3D view, clear of the minimap.
    pub x_offset: i32,
    pub strip_width: u32,
    pub viewport_height: u32,
    pub min_distance: f32,
}

impl Projection {
    /// Lays the 3D view out to the right of the minimap. Fails when the
    /// minimap does not fit in screen coordinates.
    pub fn new(maze: &Maze, config: &Config) -> Result<Self> {
        let cell = config.cell_size as u64;
        let span = |cells: usize| {
            (cells as u64)
                .checked_mul(cell)
                .filter(|&px| px <= i32::MAX as u64)
        };
        let too_big = || {
            RaycastError::InvalidConfig(format!(
                "a {}x{} map of {} px cells does not fit on screen",
                maze.cols(),
                maze.rows(),
                config.cell_size
            ))
        };
        span(maze.rows()).ok_or_else(too_big)?;
        let x_offset = span(maze.cols())
            .and_then(|px| px.checked_add(config.minimap_gap as u64))
            .and_then(|px| i32::try_from(px).ok())
            .ok_or_else(too_big)?;
        Ok(Self {
            block_size: config.cell_size,
            x_offset,
            strip_width: config.strip_width,
            viewport_height: config.height,
            min_distance: config.min_distance,
        })
    }

    /// Width of the 3D view for a fan of `rays` rays, or `None` when it does
    /// not fit in a `u32`.
    pub fn view_width(&self, rays: usize) -> Option<u32> {
        u32::try_from(rays).ok()?.checked_mul(self.strip_width)
    }

    /// Whether the minimap plus the 3D view fit in `surface_width` pixels.
    pub fn fits(&self, rays: usize, surface_width: u32) -> bool {
        let Some(view) = self.view_width(rays) else {
            return false;
        };
        let right = self.x_offset as u64 + view as u64;
        right <= surface_width as u64 && right <= i32::MAX as u64
    }

    /// The strip for the `index`-th sample: sized by the corrected distance
    /// and centered vertically.
    pub fn strip(&self, index: usize, sample: &RaySample) -> Strip {
        let vh = self.viewport_height as f32;
        let h = column_height(
            sample.corrected_distance,
            self.block_size,
            vh,
            self.min_distance,
        );
        Strip {
            x: self.x_offset + (index as u32 * self.strip_width) as i32,
            y: (vh * 0.5 - h * 0.5) as i32,
            w: self.strip_width,
            h: h as u32,
        }
    }
}

pub fn render_3d<S: Surface>(surface: &mut S, samples: &[RaySample], projection: &Projection) {
    for (i, sample) in samples.iter().enumerate() {
        let s = projection.strip(i, sample);
        surface.fill_rect(s.x, s.y, s.w, s.h, STRIP_COLOR);
    }
}

/// Draws a full frame: minimap tiles, player marker, ray segments, then wall
/// strips. Without a player only the map is drawn. Presenting is left to the
/// caller.
pub fn render_frame<S: Surface>(
    surface: &mut S,
    maze: &Maze,
    player: Option<&Player>,
    samples: &[RaySample],
    projection: &Projection,
) {
    surface.clear(BACKGROUND);
    render_maze(surface, maze, projection.block_size);

    let Some(player) = player else {
        return;
    };
    draw_player(surface, player);
    draw_rays(surface, player, samples);
    render_3d(surface, samples, projection);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{DrawCommand, RecordingSurface};
    use glam::Vec2;

    fn sample(corrected: f32) -> RaySample {
        RaySample {
            angle: 0.0,
            hit_distance: corrected,
            corrected_distance: corrected,
            hit_point: Vec2::ZERO,
            hit: true,
        }
    }

    #[test]
    fn reference_layout_places_view_after_minimap() {
        let projection = Projection::new(&Maze::reference(), &Config::default()).unwrap();
        assert_eq!(projection.x_offset, 500);
        assert_eq!(projection.view_width(60), Some(600));
        assert!(projection.fits(60, 1400));
        assert!(!projection.fits(91, 1400));
    }

    #[test]
    fn oversized_layouts_are_rejected_not_wrapped() {
        let config = Config {
            cell_size: 50_000,
            ..Config::default()
        };
        let wide = Maze::new(vec![vec![1; 100_000]]).unwrap();
        assert!(matches!(
            Projection::new(&wide, &config),
            Err(RaycastError::InvalidConfig(_))
        ));
        let tall = Maze::new(vec![vec![1]; 100_000]).unwrap();
        assert!(Projection::new(&tall, &config).is_err());

        let projection = Projection::new(&Maze::reference(), &Config::default()).unwrap();
        let rays = 1usize << 32;
        assert_eq!(projection.view_width(rays), None);
        assert!(!projection.fits(rays, u32::MAX));
        assert_eq!(projection.view_width(u32::MAX as usize), None);
    }

    #[test]
    fn strips_tile_without_gaps() {
        let projection = Projection::new(&Maze::reference(), &Config::default()).unwrap();
        let samples: Vec<_> = (0..60).map(|i| sample(60.0 + i as f32 * 7.0)).collect();
        let strips: Vec<_> = samples
            .iter()
            .enumerate()
            .map(|(i, s)| projection.strip(i, s))
            .collect();

        assert_eq!(strips[0].x, 500);
        for pair in strips.windows(2) {
            assert_eq!(pair[0].x + pair[0].w as i32, pair[1].x);
        }
        let last = strips[59];
        assert_eq!(last.x + last.w as i32, 1100);
    }

    #[test]
    fn strip_is_vertically_centered_and_clamped() {
        let projection = Projection::new(&Maze::reference(), &Config::default()).unwrap();

        let far = projection.strip(0, &sample(100.0));
        assert_eq!(far.h, 400);
        assert_eq!(far.y, 200);

        let touching = projection.strip(0, &sample(0.0));
        assert_eq!(touching.h, 800);
        assert_eq!(touching.y, 0);
    }

    #[test]
    fn frame_without_player_draws_only_the_map() {
        let maze = Maze::new(vec![vec![1, 1], vec![1, 1]]).unwrap();
        let projection = Projection::new(&maze, &Config::default()).unwrap();
        let mut rec = RecordingSurface::new(1400, 800);
        render_frame(&mut rec, &maze, None, &[sample(10.0)], &projection);

        assert_eq!(rec.commands[0], DrawCommand::Clear(BACKGROUND));
        assert_eq!(rec.commands.len(), 5);
        assert!(
            rec.commands[1..]
                .iter()
                .all(|c| matches!(c, DrawCommand::FillRect { .. }))
        );
    }
}
