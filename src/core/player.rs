use std::f32::consts::TAU;

use glam::Vec2;

use crate::config::PLAYER_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise on screen (angle decreases, y grows downward).
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// Player pose. `pos` is the top-left corner of the bounding box, like the
/// marker drawn on the minimap; rays leave from [`Player::center`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    a: f32,      // facing, radians in [0, 2π)
    delta: Vec2, // half the bounding box along the facing direction
}

impl Player {
    /// Spawns at `(x, y)` facing angle 0 with the default bounding box. No
    /// check is made against the map.
    pub fn spawn(x: f32, y: f32) -> Self {
        Self::with_size(x, y, PLAYER_SIZE)
    }

    pub fn with_size(x: f32, y: f32, size: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::splat(size),
            a: 0.0,
            delta: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.a
    }

    #[inline]
    pub fn movement_delta(&self) -> Vec2 {
        self.delta
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Turns by `step` radians and refreshes the movement delta. `step` must
    /// be below one full turn so a single wrap keeps the angle in `[0, 2π)`.
    pub fn rotate(&mut self, turn: Turn, step: f32) {
        debug_assert!(step.abs() < TAU, "rotate step {step} needs more than one wrap");
        let mut a = match turn {
            Turn::Left => self.a - step,
            Turn::Right => self.a + step,
        };
        if a < 0.0 {
            a += TAU;
        } else if a >= TAU {
            a -= TAU;
        }
        // -ε + 2π rounds to exactly 2π in f32
        if a >= TAU {
            a = 0.0;
        }
        self.a = a;
        self.delta = Vec2::new(self.size.x * 0.5 * a.cos(), self.size.y * 0.5 * a.sin());
    }

    /// Moves one movement delta along (or against) the facing. Walls are not
    /// consulted.
    pub fn step(&mut self, step: Step) {
        match step {
            Step::Forward => self.pos += self.delta,
            Step::Backward => self.pos -= self.delta,
        }
    }
}
