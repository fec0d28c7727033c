//! Grid map: validation and cell lookup.
use glam::Vec2;

use crate::error::{RaycastError, Result};

/// Map code for an open cell.
pub const OPEN: u8 = 0;
/// Map code for a wall cell.
pub const WALL: u8 = 1;

/// The layout the reference program ships with: a bordered 8x8 room with two
/// interior wall runs.
const REFERENCE: [[u8; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
}

impl Cell {
    #[inline]
    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }
}

/// A rectangular, immutable grid of cells.
///
/// Construction is the only place shape is checked; every lookup after that
/// is bounds-checked and returns `None` outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Vec<Vec<Cell>>,
    cols: usize,
}

impl Maze {
    /// Builds a maze from rows of 0/1 codes.
    ///
    /// Rejects an empty map, empty rows, rows whose length differs from the
    /// first one, and any code other than [`OPEN`] or [`WALL`].
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self> {
        let first = rows.first().ok_or(RaycastError::EmptyMap)?;
        let cols = first.len();

        let mut grid = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            if row.is_empty() {
                return Err(RaycastError::EmptyRow { row: row_index });
            }
            if row.len() != cols {
                return Err(RaycastError::RaggedRow {
                    row: row_index,
                    expected: cols,
                    found: row.len(),
                });
            }
            let cells = row
                .iter()
                .enumerate()
                .map(|(col_index, &code)| match code {
                    OPEN => Ok(Cell::Open),
                    WALL => Ok(Cell::Wall),
                    _ => Err(RaycastError::InvalidCell {
                        row: row_index,
                        col: col_index,
                        code,
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            grid.push(cells);
        }

        Ok(Self { grid, cols })
    }

    /// The 8x8 layout from the reference program.
    pub fn reference() -> Self {
        let grid = REFERENCE
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&code| if code == WALL { Cell::Wall } else { Cell::Open })
                    .collect()
            })
            .collect();
        Self {
            grid,
            cols: REFERENCE[0].len(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Cell containing a point in map-pixel coordinates, or `None` when the
    /// point lies outside the grid.
    pub fn cell_at(&self, point: Vec2, cell_size: u32) -> Option<Cell> {
        if !(point.x >= 0.0 && point.y >= 0.0) {
            return None;
        }
        let cell = cell_size as f32;
        let col = (point.x / cell) as usize;
        let row = (point.y / cell) as usize;
        self.cell(row, col)
    }

    /// Iterates `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(move |(col_index, &cell)| (row_index, col_index, cell))
        })
    }

    /// Size of the whole grid in map pixels.
    pub fn world_size(&self, cell_size: u32) -> Vec2 {
        Vec2::new(
            self.cols as f32 * cell_size as f32,
            self.rows() as f32 * cell_size as f32,
        )
    }

    /// Length of the grid's diagonal in map pixels; no ray inside the map can
    /// travel further than this.
    pub fn diagonal(&self, cell_size: u32) -> f32 {
        self.world_size(cell_size).length()
    }
}
