//! Fixed-size 2D cell storage

use std::fmt;

use serde::{Deserialize, Serialize};

use super::CellState;
use crate::error::GridError;

/// Orthogonal neighbour offsets
pub(crate) const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Row-major grid of cell states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid filled with walls
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Wall; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if a coordinate lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn offset(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Read one cell
    pub fn get(&self, x: i32, y: i32) -> Result<CellState, GridError> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    /// Write one cell
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> Result<(), GridError> {
        let i = self.offset(x, y)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Write `state` if the cell is in bounds and its current state passes `pred`
    ///
    /// Returns whether the cell was written.
    pub fn set_if<F>(&mut self, x: i32, y: i32, state: CellState, pred: F) -> bool
    where
        F: Fn(CellState) -> bool,
    {
        match self.offset(x, y) {
            Ok(i) if pred(self.cells[i]) => {
                self.cells[i] = state;
                true
            }
            _ => false,
        }
    }

    /// Overwrite every cell
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Iterate `(x, y, state)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, CellState)> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &state)| ((i % width) as i32, (i / width) as i32, state))
    }

    /// Positions whose state satisfies `pred`, in row-major order
    pub fn positions<F>(&self, pred: F) -> Vec<(i32, i32)>
    where
        F: Fn(CellState) -> bool,
    {
        self.iter()
            .filter(|&(_, _, state)| pred(state))
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Number of cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Is there a wall within Chebyshev `radius` of (x, y)?
    ///
    /// Cells outside the grid do not count as walls.
    pub fn has_wall_within(&self, x: i32, y: i32, radius: i32) -> bool {
        for ny in y - radius..=y + radius {
            for nx in x - radius..=x + radius {
                if self.get(nx, ny) == Ok(CellState::Wall) {
                    return true;
                }
            }
        }
        false
    }

    /// A wall touching open space on at least one orthogonal side
    ///
    /// Buried walls have no visible face and need no geometry.
    pub fn is_exposed_wall(&self, x: i32, y: i32) -> bool {
        if self.get(x, y) != Ok(CellState::Wall) {
            return false;
        }
        ORTHOGONAL
            .iter()
            .any(|&(dx, dy)| matches!(self.get(x + dx, y + dy), Ok(s) if s.is_walkable()))
    }

    /// Number of 4-connected regions of walkable cells
    pub fn open_region_count(&self) -> usize {
        let mut visited = vec![false; self.cells.len()];
        let mut regions = 0;

        for (x, y, state) in self.iter() {
            let start = y as usize * self.width as usize + x as usize;
            if !state.is_walkable() || visited[start] {
                continue;
            }
            regions += 1;
            visited[start] = true;
            let mut stack = vec![(x, y)];

            while let Some((cx, cy)) = stack.pop() {
                for (dx, dy) in ORTHOGONAL {
                    let (nx, ny) = (cx + dx, cy + dy);
                    let Ok(i) = self.offset(nx, ny) else {
                        continue;
                    };
                    if !visited[i] && self.cells[i].is_walkable() {
                        visited[i] = true;
                        stack.push((nx, ny));
                    }
                }
            }
        }

        regions
    }

    /// True when every walkable cell can reach every other one
    pub fn is_fully_connected(&self) -> bool {
        self.open_region_count() <= 1
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1) as usize) {
            for state in row {
                write!(f, "{}", state.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
