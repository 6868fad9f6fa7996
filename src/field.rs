use tracing::trace;

use crate::grid::Grid;
use crate::grid::GridResult;

/// The automaton engine.
///
/// A `Field` owns two [`Grid`]s of identical dimensions and a toggling index
/// naming the current one. [`Field::step`] computes the whole next generation
/// into the inactive buffer from the unmodified current buffer, then flips
/// the index, so the same two allocations are reused for every generation and
/// a reader only ever observes a fully-settled grid.
///
/// The grid topology is a discrete torus: column `W - 1` is adjacent to
/// column `0` and row `H - 1` to row `0`, on both axes at once for the
/// corner diagonals.
pub struct Field {
    bufs: [Grid; 2],
    active: usize,
    generation: u64,
}

impl Field {
    /// Create an engine starting from a deep copy of `initial`.
    ///
    /// The caller keeps its snapshot; mutating it afterwards has no effect on
    /// the engine.
    pub fn new(initial: &Grid) -> Self {
        Self {
            bufs: [initial.clone(), initial.clone()],
            active: 0,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.current().width()
    }

    pub fn height(&self) -> usize {
        self.current().height()
    }

    /// Generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read the current generation at `(x, y)`.
    ///
    /// Unlike the neighbor scan inside [`Field::step`], reads never wrap;
    /// out-of-range coordinates are a caller error.
    pub fn get(&self, x: usize, y: usize) -> GridResult<bool> {
        self.current().get(x, y)
    }

    /// Iterate over `(x, y, alive)` of the current generation.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.current().cells()
    }

    /// Advance one generation under B3/S23.
    ///
    /// Every next-generation value is a function of the current buffer only
    /// (synchronous update); the buffers swap roles once the full pass is
    /// done.
    pub fn step(&mut self) {
        let (head, tail) = self.bufs.split_at_mut(1);
        let (curr, next) = match self.active {
            0 => (&head[0], &mut tail[0]),
            _ => (&tail[0], &mut head[0]),
        };

        for y in 0..curr.height() {
            for x in 0..curr.width() {
                let alive = curr.at(x, y);
                let neighbors = live_neighbors(curr, x, y);

                next.set_at(
                    x,
                    y,
                    matches!((alive, neighbors), (true, 2..=3) | (false, 3)),
                );
            }
        }

        self.active ^= 1;
        self.generation += 1;

        trace!(generation = self.generation, "advanced one generation");
    }

    fn current(&self) -> &Grid {
        &self.bufs[self.active]
    }
}

/// Count alive cells among the 8 toroidal neighbors of `(x, y)`.
fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let (w, h) = (grid.width(), grid.height());

    let left = if x == 0 { w - 1 } else { x - 1 };
    let right = if x + 1 == w { 0 } else { x + 1 };
    let up = if y == 0 { h - 1 } else { y - 1 };
    let down = if y + 1 == h { 0 } else { y + 1 };

    let neighbors = [
        (left, up),
        (x, up),
        (right, up),
        (left, y),
        (right, y),
        (left, down),
        (x, down),
        (right, down),
    ];

    neighbors
        .into_iter()
        .filter(|&(nx, ny)| grid.at(nx, ny))
        .count() as u8
}
