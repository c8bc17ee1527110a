//! Fruit spawner - random placement on free cells
//!
//! Candidates are drawn uniformly from the placeable cells (the board minus a
//! margin of outer rings) and rejected while they hit the snake or repeat the
//! previous fruit. After a bounded number of rejections the free cells are
//! enumerated instead, so a crowded board still resolves in one call and a
//! full board reports [`SpawnError::NoSpaceLeft`].

use crate::error::SpawnError;
use crate::rng::SimpleRng;
use crate::types::{GameConfig, Position};

/// Draws before falling back to enumerating the free cells.
const MAX_REJECTIONS: u32 = 64;

/// The rectangle of cells fruit may be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    min_x: i32,
    min_y: i32,
    columns: i32,
    rows: i32,
    cell_size: i32,
}

impl Bounds {
    /// Excludes `margin` rings of cells from each edge of a `width` x `height` board.
    pub fn new(width: i32, height: i32, cell_size: i32, margin: i32) -> Self {
        let min_x = margin * cell_size;
        let min_y = margin * cell_size;
        let max_x = width - (margin + 1) * cell_size;
        let max_y = height - (margin + 1) * cell_size;

        let span = |min: i32, max: i32| {
            if cell_size <= 0 || max < min {
                0
            } else {
                (max - min) / cell_size + 1
            }
        };

        Self {
            min_x,
            min_y,
            columns: span(min_x, max_x),
            rows: span(min_y, max_y),
            cell_size,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.width,
            config.height,
            config.cell_size,
            config.spawn_margin,
        )
    }

    /// Number of placeable cells.
    pub fn capacity(&self) -> usize {
        (self.columns.max(0) as usize) * (self.rows.max(0) as usize)
    }

    pub fn contains(&self, p: Position) -> bool {
        if self.cell_size <= 0 {
            return false;
        }
        let dx = p.x - self.min_x;
        let dy = p.y - self.min_y;
        dx >= 0
            && dy >= 0
            && dx % self.cell_size == 0
            && dy % self.cell_size == 0
            && dx / self.cell_size < self.columns
            && dy / self.cell_size < self.rows
    }

    fn cell(&self, column: i32, row: i32) -> Position {
        Position::new(
            self.min_x + column * self.cell_size,
            self.min_y + row * self.cell_size,
        )
    }

    fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| self.cell(col, row)))
    }
}

#[derive(Debug, Clone)]
pub struct FruitSpawner {
    rng: SimpleRng,
    bounds: Bounds,
}

impl FruitSpawner {
    pub fn new(seed: u32, bounds: Bounds) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            bounds,
        }
    }

    /// Pick a free cell that is neither occupied nor the previous fruit.
    pub fn spawn(
        &mut self,
        occupied: impl Fn(Position) -> bool,
        previous: Option<Position>,
    ) -> Result<Position, SpawnError> {
        let capacity = self.bounds.capacity();
        if capacity == 0 {
            return Err(SpawnError::NoSpaceLeft { capacity });
        }

        let is_free = |p: Position| !occupied(p) && Some(p) != previous;

        for _ in 0..MAX_REJECTIONS {
            let candidate = self.random_cell();
            if is_free(candidate) {
                return Ok(candidate);
            }
        }

        // Crowded board: choose uniformly among what is left.
        let free = self.bounds.cells().filter(|&p| is_free(p)).count();
        if free == 0 {
            return Err(SpawnError::NoSpaceLeft { capacity });
        }
        let pick = self.rng.next_range(free as u32) as usize;
        self.bounds
            .cells()
            .filter(|&p| is_free(p))
            .nth(pick)
            .ok_or(SpawnError::NoSpaceLeft { capacity })
    }

    fn random_cell(&mut self) -> Position {
        let column = self.rng.next_range(self.bounds.columns as u32) as i32;
        let row = self.rng.next_range(self.bounds.rows as u32) as i32;
        self.bounds.cell(column, row)
    }
}
