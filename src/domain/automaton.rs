use super::{Cell, error::{AutomatonError, Result}};
use rand::Rng;
use rayon::prelude::*;
use std::mem;

/// Automaton owns a bounded (non-toroidal) Game of Life grid.
///
/// Cells are stored row-major in a flat arena indexed by `row * cols + col`.
/// Each generation is computed from the current buffer into a back buffer,
/// then the two are swapped, so no cell ever sees a neighbor that has
/// already advanced in the same step.
pub struct Automaton {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    back: Vec<Cell>,
    generation: u64,
}

impl Automaton {
    /// Create a new automaton with every cell dead.
    /// A zero dimension yields a valid, empty grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        tracing::debug!(rows, cols, "creating automaton");
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
            back: vec![Cell::Dead; rows * cols],
            generation: 0,
        }
    }

    /// Create from signed dimensions, rejecting negative or oversized grids.
    pub fn try_new(rows: i64, cols: i64) -> Result<Self> {
        let (rows, cols) = Self::validate_dimensions(rows, cols)?;
        Ok(Self::new(rows, cols))
    }

    /// Check signed dimensions and convert them to (rows, cols).
    pub fn validate_dimensions(rows: i64, cols: i64) -> Result<(usize, usize)> {
        if rows < 0 || cols < 0 {
            return Err(AutomatonError::NegativeDimension { rows, cols });
        }
        let too_large = AutomatonError::TooLarge { rows, cols };
        let r = usize::try_from(rows).map_err(|_| too_large.clone())?;
        let c = usize::try_from(cols).map_err(|_| too_large.clone())?;
        // Both buffers must be addressable.
        r.checked_mul(c)
            .and_then(|n| n.checked_mul(2 * mem::size_of::<Cell>()))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(too_large)?;
        Ok((r, c))
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of generations advanced since creation or the last clear
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Map signed coordinates to a flat index, or None when out of range
    fn checked_index(&self, row: isize, col: isize) -> Option<usize> {
        let r = usize::try_from(row).ok()?;
        let c = usize::try_from(col).ok()?;
        (r < self.rows && c < self.cols).then(|| self.index(r, c))
    }

    /// Whether the cell at (row, col) is alive.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the grid. Use [`Automaton::cell`]
    /// for a checked read.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        self.cells[self.index(row, col)].is_alive()
    }

    /// Get cell at position (with bounds checking)
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Set cell at position; out-of-range writes are ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip one cell. Out-of-range coordinates are a silent no-op so that
    /// pointer-derived positions never need pre-validation.
    pub fn toggle_cell(&mut self, row: isize, col: isize) {
        if let Some(idx) = self.checked_index(row, col) {
            self.cells[idx] = self.cells[idx].toggle();
        }
    }

    /// Count live cells in the Moore neighborhood of (row, col).
    /// Neighbors past the edge count as dead.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        live_neighbors(&self.cells, self.rows, self.cols, row, col)
    }

    /// Advance exactly one generation (serial).
    pub fn update(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        let current = &self.cells;

        self.back.iter_mut().enumerate().for_each(|(idx, next)| {
            let (row, col) = (idx / cols, idx % cols);
            *next = current[idx].evolve(live_neighbors(current, rows, cols, row, col));
        });

        self.swap_buffers();
    }

    /// Advance exactly one generation, computing rows in parallel with rayon.
    /// Produces the same grid as [`Automaton::update`].
    pub fn update_parallel(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        if cols > 0 {
            let current = &self.cells;
            self.back
                .par_chunks_mut(cols)
                .enumerate()
                .for_each(|(row, out)| {
                    for (col, next) in out.iter_mut().enumerate() {
                        let idx = row * cols + col;
                        *next = current[idx].evolve(live_neighbors(current, rows, cols, row, col));
                    }
                });
        }

        self.swap_buffers();
    }

    fn swap_buffers(&mut self) {
        mem::swap(&mut self.cells, &mut self.back);
        self.generation += 1;
        tracing::trace!(generation = self.generation, "advanced generation");
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self.generation = 0;
    }

    /// Fill the grid at random; `density` is the chance of a cell being alive
    /// and is clamped to [0, 1].
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        self.generation = 0;
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / cols, idx % cols, cell))
    }
}

/// Count live neighbors of (row, col) in a row-major buffer.
fn live_neighbors(cells: &[Cell], rows: usize, cols: usize, row: usize, col: usize) -> u8 {
    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .filter_map(|(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < rows && c < cols).then(|| cells[r * cols + c])
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}
