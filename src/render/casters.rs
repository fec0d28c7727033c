//! Ray marching against the grid and the projection maths built on it.
use std::f32::consts::TAU;

use glam::Vec2;
use tracing::trace;

use crate::core::maze::Maze;

/// Outcome of marching one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayHit {
    /// The ray entered a wall cell at `point`, `distance` away from the origin.
    Hit { distance: f32, point: Vec2 },
    /// The ray left the grid, or ran the length of the map diagonal, without
    /// touching a wall.
    Miss,
}

/// One ray of the fan, ready for projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaySample {
    /// Ray direction, radians in `[0, 2π)`.
    pub angle: f32,
    /// Euclidean distance from the origin to `hit_point`.
    pub hit_distance: f32,
    /// `hit_distance` scaled by the cosine of the offset from the facing.
    pub corrected_distance: f32,
    pub hit_point: Vec2,
    /// `false` when the ray missed and the sample was stretched to max range.
    pub hit: bool,
}

/// Wraps an angle into `[0, 2π)`.
#[inline]
pub fn normalize_angle(a: f32) -> f32 {
    let r = a.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU
    if r >= TAU { 0.0 } else { r }
}

/// Marches from `origin` in unit steps along `angle` until the containing
/// cell is a wall.
///
/// The hit is coarse: it is the first step point inside a wall cell, not the
/// exact boundary crossing, so it overshoots the boundary by less than one
/// unit. The march never reads outside the grid and gives up after the map
/// diagonal.
pub fn cast_ray(maze: &Maze, origin: Vec2, a: f32, block_size: u32) -> RayHit {
    let dir = Vec2::new(a.cos(), a.sin());
    let max_d = maze.diagonal(block_size);

    let mut d = 1.0;
    while d <= max_d {
        let point = origin + dir * d;
        match maze.cell_at(point, block_size) {
            Some(cell) if cell.is_wall() => {
                return RayHit::Hit {
                    distance: (point - origin).length(),
                    point,
                };
            }
            Some(_) => {}
            None => return RayHit::Miss,
        }
        d += 1.0;
    }
    RayHit::Miss
}

/// Removes fisheye distortion: scales the raw distance by the cosine of the
/// angle between the facing and the ray.
#[inline]
pub fn fisheye_correct(hit_distance: f32, facing: f32, ray_angle: f32) -> f32 {
    hit_distance * normalize_angle(facing - ray_angle).cos()
}

/// On-screen height of a wall `corrected_distance` away.
///
/// Distances under `min_distance` are clamped first, and the result never
/// exceeds `viewport_height`.
#[inline]
pub fn column_height(
    corrected_distance: f32,
    block_size: u32,
    viewport_height: f32,
    min_distance: f32,
) -> f32 {
    let d = corrected_distance.max(min_distance);
    ((block_size as f32 * viewport_height) / d).min(viewport_height)
}

/// Inverse of [`column_height`] for heights below the viewport clamp.
#[inline]
pub fn distance_for_height(height: f32, block_size: u32, viewport_height: f32) -> f32 {
    (block_size as f32 * viewport_height) / height
}

/// Casts `ray_count` rays spread evenly over `fov_degrees`, centered on
/// `facing`. The first ray sits at `facing - fov/2`; with the default one ray
/// per degree, ray `ray_count / 2` points straight ahead.
///
/// Rays that miss come back as max-range samples (map diagonal) with `hit`
/// cleared, so the output always has `ray_count` finite entries.
pub fn cast_fan(
    maze: &Maze,
    origin: Vec2,
    facing: f32,
    fov_degrees: f32,
    ray_count: usize,
    block_size: u32,
) -> Vec<RaySample> {
    let fov = fov_degrees.to_radians();
    let spacing = fov / ray_count.max(1) as f32;
    let first = facing - fov * 0.5;
    let max_d = maze.diagonal(block_size);

    (0..ray_count)
        .map(|i| {
            let angle = normalize_angle(first + spacing * i as f32);
            let (hit_distance, hit_point, hit) = match cast_ray(maze, origin, angle, block_size) {
                RayHit::Hit { distance, point } => (distance, point, true),
                RayHit::Miss => {
                    trace!(ray = i, angle, "ray left the map");
                    let dir = Vec2::new(angle.cos(), angle.sin());
                    (max_d, origin + dir * max_d, false)
                }
            };
            RaySample {
                angle,
                hit_distance,
                corrected_distance: fisheye_correct(hit_distance, facing, angle),
                hit_point,
                hit,
            }
        })
        .collect()
}
