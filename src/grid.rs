use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("{rect_width}x{rect_height} rect at ({x}, {y}) exceeds a {width}x{height} grid")]
    RectOutOfBounds {
        x: usize,
        y: usize,
        rect_width: usize,
        rect_height: usize,
        width: usize,
        height: usize,
    },
}

/// A fixed-size rectangular matrix of alive/dead cells.
///
/// Dimensions never change after creation and every cell is defined, so a
/// `Grid` is always a complete snapshot of one generation. Cloning one is the
/// deep-copy used to hand state between the builder and the engine.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    data: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create an all-dead `width` by `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![false; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the cell at `(x, y)`.
    ///
    /// Out-of-range coordinates are a caller error and fail loudly. They are
    /// never wrapped: a silent wrap here would be indistinguishable from the
    /// engine's intentional toroidal reads.
    pub fn get(&self, x: usize, y: usize) -> GridResult<bool> {
        self.check(x, y)?;

        Ok(self.at(x, y))
    }

    /// Write the cell at `(x, y)`, with the same bounds rule as [`Grid::get`].
    pub fn set(&mut self, x: usize, y: usize, value: bool) -> GridResult<()> {
        self.check(x, y)?;
        self.set_at(x, y, value);

        Ok(())
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: bool) {
        self.data.fill(value);
    }

    /// Iterate over `(x, y, alive)` for every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &alive)| (i % self.width, i / self.width, alive))
    }

    fn check(&self, x: usize, y: usize) -> GridResult<()> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }

    /// Unchecked read for loops that only produce in-bounds coordinates.
    pub(crate) fn at(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);

        self.data[y * self.width + x]
    }

    pub(crate) fn set_at(&mut self, x: usize, y: usize, value: bool) {
        debug_assert!(x < self.width && y < self.height);

        self.data[y * self.width + x] = value;
    }
}

#[cfg(test)]
mod test {
    use super::Grid;
    use super::GridError;

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(4, 3);

        grid.set(2, 1, true).unwrap();

        assert!(grid.get(2, 1).unwrap());
        assert!(!grid.get(1, 2).unwrap());
    }

    #[test]
    fn reads_past_either_axis_fail() {
        let grid = Grid::new(4, 3);

        assert_eq!(
            grid.get(4, 0),
            Err(GridError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            })
        );
        assert!(grid.get(0, 3).is_err());
        assert!(grid.get(0, 2).is_ok());
    }

    #[test]
    fn cells_iterates_row_major() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, true).unwrap();

        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(
            cells,
            vec![(0, 0, false), (1, 0, true), (0, 1, false), (1, 1, false)]
        );
    }
}
