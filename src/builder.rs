use rand::Rng;
use rand::RngCore;
use tracing::debug;

use crate::grid::Grid;
use crate::grid::GridError;
use crate::grid::GridResult;
use crate::pattern::Pattern;

/// Accumulates one [`Grid`] through primitive fills and pattern stamps.
///
/// The builder owns its working grid exclusively until [`GridBuilder::build`]
/// hands off a clone, so continuing to mutate the builder never affects an
/// engine that was already constructed from it.
pub struct GridBuilder {
    grid: Grid,
}

impl GridBuilder {
    /// Create a builder over an all-dead `width` by `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
        }
    }

    /// View of the working grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Set every cell in `[x, x + width) x [y, y + height)` to `value`.
    ///
    /// The whole rectangle must lie within the grid; nothing is written
    /// otherwise.
    pub fn fill_rect(
        &mut self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        value: bool,
    ) -> GridResult<()> {
        self.check_rect(x, y, width, height)?;

        for cy in y..y + height {
            for cx in x..x + width {
                self.grid.set_at(cx, cy, value);
            }
        }

        Ok(())
    }

    /// Set every cell dead.
    pub fn clear(&mut self) {
        self.grid.fill(false);
    }

    /// Fill the whole grid, each cell independently alive with probability
    /// one half.
    ///
    /// The builder defines no seeding of its own; pass a seeded rng for a
    /// reproducible state.
    pub fn fill_random(&mut self, rng: &mut dyn RngCore) {
        let (w, h) = (self.grid.width(), self.grid.height());

        // infallible: the full grid is always in bounds
        let _ = self.fill_random_rect(rng, 0, 0, w, h);
    }

    /// Like [`GridBuilder::fill_random`], restricted to a rectangle with the
    /// same bounds rule as [`GridBuilder::fill_rect`].
    pub fn fill_random_rect(
        &mut self,
        rng: &mut dyn RngCore,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> GridResult<()> {
        self.check_rect(x, y, width, height)?;

        for cy in y..y + height {
            for cx in x..x + width {
                self.grid.set_at(cx, cy, rng.gen_bool(0.5));
            }
        }

        Ok(())
    }

    /// Stamp a named [`Pattern`] with its top-left corner at `(x, y)`.
    ///
    /// The pattern's bounding box must fit in the grid.
    pub fn stamp(&mut self, pattern: &Pattern, x: usize, y: usize) -> GridResult<()> {
        self.check_rect(x, y, pattern.width, pattern.height)?;

        if let Some(background) = pattern.background {
            for cy in y..y + pattern.height {
                for cx in x..x + pattern.width {
                    self.grid.set_at(cx, cy, background);
                }
            }
        }

        let ink = pattern.ink();
        for &(dx, dy) in pattern.cells {
            self.grid.set_at(x + dx, y + dy, ink);
        }

        debug!(pattern = pattern.name, x, y, "stamped pattern");

        Ok(())
    }

    /// Hand off the accumulated snapshot.
    ///
    /// Always clones, so two builds without intervening mutation are equal
    /// and independently owned.
    pub fn build(&self) -> Grid {
        self.grid.clone()
    }

    fn check_rect(&self, x: usize, y: usize, width: usize, height: usize) -> GridResult<()> {
        let x_end = x.checked_add(width);
        let y_end = y.checked_add(height);

        let fits = x_end.is_some_and(|end| end <= self.grid.width())
            && y_end.is_some_and(|end| end <= self.grid.height());

        if !fits {
            return Err(GridError::RectOutOfBounds {
                x,
                y,
                rect_width: width,
                rect_height: height,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::GridBuilder;
    use crate::pattern;

    #[test]
    fn fill_rect_writes_exactly_the_rect() {
        let mut builder = GridBuilder::new(6, 6);

        builder.fill_rect(1, 2, 3, 2, true).unwrap();

        let alive: Vec<_> = builder
            .grid()
            .cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(x, y, _)| (x, y))
            .collect();

        assert_eq!(alive, vec![(1, 2), (2, 2), (3, 2), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn fill_rect_rejects_overhang_before_writing() {
        let mut builder = GridBuilder::new(6, 6);

        assert!(builder.fill_rect(4, 0, 3, 1, true).is_err());
        assert!(builder.fill_rect(0, 5, 1, 2, true).is_err());
        // width so large that x + width overflows
        assert!(builder.fill_rect(1, 0, usize::MAX, 1, true).is_err());

        assert!(builder.grid().cells().all(|(_, _, alive)| !alive));
    }

    #[test]
    fn pentadecathlon_fills_its_box_then_clears_two() {
        let mut builder = GridBuilder::new(8, 12);

        builder.stamp(&pattern::PENTADECATHLON, 2, 1).unwrap();

        for dy in 0..8 {
            for dx in 0..3 {
                let expect_dead = (dx, dy) == (1, 1) || (dx, dy) == (1, 6);

                assert_eq!(builder.grid().get(2 + dx, 1 + dy).unwrap(), !expect_dead);
            }
        }
    }

    #[test]
    fn stamp_must_fit() {
        let mut builder = GridBuilder::new(8, 8);

        assert!(builder.stamp(&pattern::ACORN, 2, 0).is_err());
        assert!(builder.stamp(&pattern::ACORN, 1, 5).is_ok());
    }

    #[test]
    fn seeded_random_fill_is_reproducible() {
        let mut a = GridBuilder::new(16, 16);
        let mut b = GridBuilder::new(16, 16);

        a.fill_random(&mut StdRng::seed_from_u64(7));
        b.fill_random(&mut StdRng::seed_from_u64(7));

        assert!(a.build() == b.build());
    }

    #[test]
    fn build_yields_independent_snapshots() {
        let mut builder = GridBuilder::new(4, 4);
        builder.fill_rect(0, 0, 2, 2, true).unwrap();

        let first = builder.build();
        let second = builder.build();
        assert!(first == second);

        builder.fill_rect(2, 2, 2, 2, true).unwrap();
        assert!(!first.get(3, 3).unwrap());
    }
}
