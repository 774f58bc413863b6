use std::fmt;

use crate::{Cell, Random, Ruleset};

/// Fill probability (percent) used when a caller passes an out-of-range value
/// to [`Grid::random`].
pub const DEFAULT_FILL_PERCENT: i32 = 20;

/// A 2D field of [`Cell`]s addressed by `(x, y)` with `x` in `[0, width)` and
/// `y` in `[0, height)`, stored row-major.
///
/// The backing vector always holds exactly `width * height` cells; growth
/// replaces dimensions and storage in one move so the two never disagree.
/// `Clone` deep-copies the cells.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// An empty 0x0 grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// An all-dead grid of the given dimensions.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// A grid where each cell starts alive with independent probability
    /// `fill_percent / 100`. Values outside `0..=100` fall back to
    /// [`DEFAULT_FILL_PERCENT`].
    pub fn random(width: u32, height: u32, fill_percent: i32, rand: &mut Random) -> Self {
        let percent = if (0..=100).contains(&fill_percent) {
            fill_percent
        } else {
            DEFAULT_FILL_PERCENT
        };
        let p = f64::from(percent) / 100.0;

        let mut result = Self::with_size(width, height);
        for cell in &mut result.cells {
            cell.set_alive(rand.next_bool(p));
        }
        result
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn at(&self, x: u32, y: u32) -> &Cell {
        self.cell(x, y)
            .unwrap_or_else(|| panic!("Cell indices {}, {} out of bounds", x, y))
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut Cell {
        self.cell_mut(x, y)
            .unwrap_or_else(|| panic!("Cell indices {}, {} out of bounds", x, y))
    }

    pub fn cells_iter(&self) -> impl DoubleEndedIterator<Item = &Cell> + Clone {
        self.cells.iter()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.grid_index(x, y).map(|index| &self.cells[index])
    }

    fn cell_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        self.grid_index(x, y).map(|index| &mut self.cells[index])
    }

    fn grid_index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn is_inside(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// Advances the grid one generation.
    ///
    /// Three phases, in order: stage every cell's next state from its live
    /// neighbor count and `rules`; if `allow_growth`, add a row/column on each
    /// border strip that holds a live cell; commit every staged state. The
    /// neighborhood is finite (out-of-bounds positions count as dead, no
    /// wrapping), and staging never reads an already-updated neighbor.
    pub fn step(&mut self, rules: Ruleset, allow_growth: bool) {
        for y in 0..self.height {
            for x in 0..self.width {
                let live_neighbors = self.live_neighbors(x, y);
                let alive = self.at(x, y).is_alive();
                self.at_mut(x, y)
                    .set_next_state(rules.next_state(alive, live_neighbors));
            }
        }

        if allow_growth {
            self.grow_at_live_borders();
        }

        for cell in &mut self.cells {
            cell.commit();
        }
    }

    fn live_neighbors(&self, x: u32, y: u32) -> u8 {
        let mut count = 0;
        for y_off in -1..=1_i64 {
            for x_off in -1..=1_i64 {
                if x_off == 0 && y_off == 0 {
                    continue;
                }
                let nx = i64::from(x) + x_off;
                let ny = i64::from(y) + y_off;
                if self.is_inside(nx, ny) && self.at(nx as u32, ny as u32).is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Grows the grid by one row/column on every border strip that holds a
    /// live cell, filling the new cells dead with nothing staged.
    ///
    /// All four sides are tested against the pre-growth dimensions, so a
    /// freshly created border never retriggers growth within the same step;
    /// growth on several sides in one step is cumulative. Rebuilds the
    /// backing vector, which costs O(width * height) per growth event.
    fn grow_at_live_borders(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (width, height) = (self.width, self.height);

        let top = (0..width).any(|x| self.at(x, 0).is_alive());
        let bottom = (0..width).any(|x| self.at(x, height - 1).is_alive());
        let left = (0..height).any(|y| self.at(0, y).is_alive());
        let right = (0..height).any(|y| self.at(width - 1, y).is_alive());
        if !(top || bottom || left || right) {
            return;
        }

        let x_off = u32::from(left);
        let y_off = u32::from(top);
        let new_width = width + x_off + u32::from(right);
        let new_height = height + y_off + u32::from(bottom);

        let mut cells = vec![Cell::default(); new_width as usize * new_height as usize];
        for y in 0..height {
            for x in 0..width {
                let new_index = (y + y_off) as usize * new_width as usize + (x + x_off) as usize;
                cells[new_index] = *self.at(x, y);
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.cells = cells;
    }
}

impl fmt::Display for Grid {
    /// Bordered character rendering: live cells as `█`, dead as spaces, one
    /// row per `y`, framed by rules of `width` dashes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.width as usize);
        writeln!(f, "{rule}")?;
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.at(x, y).is_alive() { "█" } else { " " })?;
            }
            writeln!(f)?;
        }
        write!(f, "{rule}")
    }
}
