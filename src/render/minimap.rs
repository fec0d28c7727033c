//! Top-down view: map tiles, the player marker and the ray fan.
use crate::core::maze::{Cell, Maze};
use crate::core::player::Player;
use crate::render::casters::RaySample;
use crate::render::surface::{Color, Surface};

pub const WALL_COLOR: Color = Color::WHITE;
pub const FLOOR_COLOR: Color = Color::GREY;
pub const PLAYER_COLOR: Color = Color::YELLOW;
pub const RAY_COLOR: Color = Color::RED;

fn draw_cell<S: Surface>(surface: &mut S, xo: i32, yo: i32, block_size: u32, cell: Cell) {
    let color = match cell {
        Cell::Wall => WALL_COLOR,
        Cell::Open => FLOOR_COLOR,
    };
    surface.fill_rect(xo, yo, block_size, block_size, color);
}

/// One filled tile per cell, row by row, anchored at the surface origin.
pub fn render_maze<S: Surface>(surface: &mut S, maze: &Maze, block_size: u32) {
    for (row_index, col_index, cell) in maze.cells() {
        let xo = (col_index as u32 * block_size) as i32;
        let yo = (row_index as u32 * block_size) as i32;
        draw_cell(surface, xo, yo, block_size, cell);
    }
}

pub fn draw_player<S: Surface>(surface: &mut S, player: &Player) {
    surface.fill_rect(
        player.pos.x as i32,
        player.pos.y as i32,
        player.size.x as u32,
        player.size.y as u32,
        PLAYER_COLOR,
    );
}

/// A segment from the player's center to each raw hit point.
pub fn draw_rays<S: Surface>(surface: &mut S, player: &Player, samples: &[RaySample]) {
    let c = player.center();
    for s in samples {
        surface.draw_line(
            c.x as i32,
            c.y as i32,
            s.hit_point.x as i32,
            s.hit_point.y as i32,
            RAY_COLOR,
        );
    }
}
