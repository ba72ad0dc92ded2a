use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells together with the number of mines placed on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Unpopulated board: no mines, every cell hidden.
    pub fn new(size: Coord) -> Self {
        Self {
            cells: Array2::default((size, size).to_nd_index()),
            mine_count: 0,
        }
    }

    /// Board with mines at exactly the given positions, adjacency already computed.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size);

        for &coords in mine_coords {
            if !board.contains(coords) {
                return Err(GameError::InvalidCoords);
            }
            board.place_mine(coords);
        }

        board.compute_adjacency();
        Ok(board)
    }

    pub fn size(&self) -> Coord {
        // always built square from a `Coord`
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains(&self, (x, y): Coord2) -> bool {
        let size = self.size();
        x < size && y < size
    }

    pub fn neighbors(&self, coords: Coord2) -> SquareIter {
        SquareIter::neighbors(coords, self.size())
    }

    /// Cell at `coords`, `None` when out of bounds.
    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        self.get(coords).map(Cell::view)
    }

    /// All cells with their coordinates, x-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(Cell::is_flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(Cell::is_revealed)
    }

    pub fn exploding_count(&self) -> CellCount {
        self.count_cells(Cell::is_exploding)
    }

    fn count_cells(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|&cell| pred(cell)).count() as CellCount
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Places a mine, returning `false` when one was already there.
    pub(crate) fn place_mine(&mut self, coords: Coord2) -> bool {
        let cell = self.cell_mut(coords);
        if cell.is_mine {
            return false;
        }
        cell.is_mine = true;
        self.mine_count += 1;
        true
    }

    /// Single pass over the grid filling in `adjacent_mines` for every non-mine cell.
    pub(crate) fn compute_adjacency(&mut self) {
        let size = self.size();
        for x in 0..size {
            for y in 0..size {
                let coords = (x, y);
                if self[coords].is_mine {
                    continue;
                }
                let count = self
                    .neighbors(coords)
                    .filter(|&pos| self[pos].is_mine)
                    .count() as u8;
                self.cell_mut(coords).adjacent_mines = count;
            }
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
