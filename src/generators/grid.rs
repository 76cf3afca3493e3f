//! Number of islands by recursive flood fill over a [`GridFixture`]

use super::{rejected, Trace};
use crate::fixtures::GridFixture;
use crate::step::{Auxiliary, Element, Role, StepBuilder, StepSequence};
use rustc_hash::FxHashSet;

mod line {
    pub const INIT: usize = 1;
    pub const CHECK: usize = 4;
    pub const COUNT: usize = 5;
    pub const ISLAND_DONE: usize = 6;
    pub const MARK: usize = 17;
}

struct Fill<'a> {
    grid: &'a GridFixture,
    trace: Trace,
    /// Cells sunk so far, by flat index
    sunk: FxHashSet<usize>,
    /// Cells of islands already completed
    finished: Vec<usize>,
    /// Cells of the island being filled
    island: Vec<usize>,
    count: usize,
}

impl Fill<'_> {
    fn cols(&self) -> usize {
        self.grid.cols()
    }

    fn is_land(&self, r: usize, c: usize) -> bool {
        self.grid.cells.get(r).and_then(|row| row.get(c)) == Some(&1)
    }

    fn step(&self, description: String) -> StepBuilder {
        let elements = self
            .grid
            .cells
            .iter()
            .flatten()
            .map(|&cell| Element::new(i64::from(cell)))
            .collect();
        StepBuilder::new(description)
            .elements(elements)
            .mark_all(Role::Found, self.finished.iter().copied())
            .mark_all(Role::Visited, self.island.iter().copied())
            .auxiliary(Auxiliary::Islands {
                rows: self.grid.rows(),
                cols: self.cols(),
                islands: self.count,
            })
    }

    fn sink(&mut self, r: usize, c: usize) {
        let idx = r * self.cols() + c;
        if !self.is_land(r, c) || !self.sunk.insert(idx) {
            return;
        }
        self.island.push(idx);
        let step = self
            .step(format!(
                "Mark land at ({r}, {c}) as part of island {}",
                self.count
            ))
            .mark(Role::Current, idx)
            .line(line::MARK);
        self.trace.push(step);

        self.sink(r + 1, c);
        if r > 0 {
            self.sink(r - 1, c);
        }
        self.sink(r, c + 1);
        if c > 0 {
            self.sink(r, c - 1);
        }
    }
}

/// Count islands of 4-connected land cells
pub fn number_of_islands(grid: &GridFixture) -> StepSequence {
    if let Err(e) = grid.validate() {
        return rejected(&e);
    }
    let mut fill = Fill {
        grid,
        trace: Trace::new(),
        sunk: FxHashSet::default(),
        finished: Vec::new(),
        island: Vec::new(),
        count: 0,
    };
    let (rows, cols) = (grid.rows(), grid.cols());

    let step = fill
        .step(format!("Scan the {rows}x{cols} grid row by row for land"))
        .line(line::INIT);
    fill.trace.push(step);

    for r in 0..rows {
        for c in 0..cols {
            let idx = r * cols + c;
            let land = fill.is_land(r, c);
            let verdict = if !land {
                "water"
            } else if fill.sunk.contains(&idx) {
                "land already counted"
            } else {
                "new land"
            };
            let step = fill
                .step(format!("Check cell ({r}, {c}): {verdict}"))
                .mark(Role::Comparing, idx)
                .line(line::CHECK);
            fill.trace.push(step);

            if !land || fill.sunk.contains(&idx) {
                continue;
            }
            fill.count += 1;
            let step = fill
                .step(format!("Island {} starts at ({r}, {c})", fill.count))
                .mark(Role::Current, idx)
                .line(line::COUNT);
            fill.trace.push(step);

            fill.sink(r, c);

            let size = fill.island.len();
            fill.finished.append(&mut fill.island);
            let step = fill
                .step(format!("Island {} complete: {size} cell(s)", fill.count))
                .line(line::ISLAND_DONE);
            fill.trace.push(step);
        }
    }

    let step = fill.step(format!("Found {} island(s)", fill.count));
    fill.trace.push(step);
    fill.trace.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_has_three_islands() {
        let seq = number_of_islands(&GridFixture::default());
        let last = seq.last().unwrap();
        assert_eq!(last.description(), "Found 3 island(s)");
        assert_eq!(last.indices_with(Role::Found), vec![0, 1, 5, 6, 12, 18, 19]);
        match last.auxiliary() {
            Some(Auxiliary::Islands { rows, cols, islands }) => {
                assert_eq!((*rows, *cols, *islands), (4, 5, 3));
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
    }

    #[test]
    fn test_scan_visits_every_cell() {
        let seq = number_of_islands(&GridFixture::default());
        let checks = seq
            .iter()
            .filter(|s| s.description().starts_with("Check cell"))
            .count();
        assert_eq!(checks, 20);
    }

    #[test]
    fn test_ragged_grid_is_refused() {
        let grid = GridFixture {
            cells: vec![vec![1, 0, 1], vec![1]],
        };
        let seq = number_of_islands(&grid);
        assert_eq!(seq.len(), 1);
        assert_eq!(
            seq.last().unwrap().description(),
            "Cannot run: invalid fixture: row 1 has 1 cells, expected 3"
        );
    }

    #[test]
    fn test_all_water() {
        let grid = GridFixture {
            cells: vec![vec![0, 0], vec![0, 0]],
        };
        let seq = number_of_islands(&grid);
        assert_eq!(seq.last().unwrap().description(), "Found 0 island(s)");
    }
}
