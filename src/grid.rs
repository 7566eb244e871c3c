use rtt_target::rprintln;
use thiserror::Error;

use crate::config::{CELL_COUNT, GRID_SIZE, MINE_COUNT};
use crate::rng::Lfsr16;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: u8, y: u8 },
}

/// A position on the board, always within `0..GRID_SIZE` on both axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Coord {
    x: u8,
    y: u8,
}

const LAST: u8 = GRID_SIZE as u8 - 1;

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub fn new(x: u8, y: u8) -> Result<Self, GridError> {
        if x > LAST || y > LAST {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(Self { x, y })
    }

    /// Low three bits of each value select the column and row
    const fn wrapping(x: u8, y: u8) -> Self {
        Self {
            x: x & LAST,
            y: y & LAST,
        }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    /// Move by `(dx, dy)`, stopping at the board edges
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        let step = |v: u8, d: i8| (v as i16 + d as i16).clamp(0, LAST as i16) as u8;
        Self {
            x: step(self.x, dx),
            y: step(self.y, dy),
        }
    }

    /// The up-to-eight Moore neighbours that lie on the board
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        let (x, y) = (self.x as i16, self.y as i16);
        (-1i16..=1)
            .flat_map(move |dy| (-1i16..=1).map(move |dx| (x + dx, y + dy)))
            .filter(move |&(nx, ny)| (nx, ny) != (x, y))
            .filter(|&(nx, ny)| (0..=LAST as i16).contains(&nx) && (0..=LAST as i16).contains(&ny))
            .map(|(nx, ny)| Coord {
                x: nx as u8,
                y: ny as u8,
            })
    }

    /// Every coordinate, row by row
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..=LAST).flat_map(|y| (0..=LAST).map(move |x| Coord { x, y }))
    }

    fn index(self) -> usize {
        debug_assert!(self.x <= LAST && self.y <= LAST);
        self.y as usize * GRID_SIZE + self.x as usize
    }
}

/// What a cell holds underneath its cover
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Empty,
    Number1,
    Number2,
    Number3,
    Mine,
}

impl CellStatus {
    /// Tier for a count of adjacent mines, capped at three
    pub const fn from_adjacent(mines: u8) -> Self {
        match mines {
            0 => CellStatus::Empty,
            1 => CellStatus::Number1,
            2 => CellStatus::Number2,
            _ => CellStatus::Number3,
        }
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, CellStatus::Mine)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Cell {
    status: CellStatus,
    revealed: bool,
    flagged: bool,
    selected: bool,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        status: CellStatus::Empty,
        revealed: false,
        flagged: false,
        selected: false,
    };

    pub const fn status(&self) -> CellStatus {
        self.status
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    pub const fn is_mine(&self) -> bool {
        self.status.is_mine()
    }
}

/// Result of uncovering a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Already revealed or flagged
    Ignored,
    Safe,
    Mine,
}

/// The 8x8 board of cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A board with no mines and every cell covered
    pub const fn new() -> Self {
        Self {
            cells: [Cell::BLANK; CELL_COUNT],
        }
    }

    /// Clear the board, lay `MINE_COUNT` mines drawn from `rng` and number the rest
    pub fn initialize(&mut self, rng: &mut Lfsr16) {
        self.cells = [Cell::BLANK; CELL_COUNT];

        let mut placed = 0;
        while placed < MINE_COUNT {
            let bits = rng.next_u16();
            let at = Coord::wrapping(bits as u8, (bits >> 3) as u8);
            let cell = &mut self.cells[at.index()];
            if cell.is_mine() {
                continue;
            }
            cell.status = CellStatus::Mine;
            placed += 1;
            rprintln!("Mine {} at ({}, {})", placed, at.x, at.y);
        }

        self.number_cells();
    }

    fn number_cells(&mut self) {
        for at in Coord::all() {
            if !self.cells[at.index()].is_mine() {
                let count = self.adjacent_mines(at);
                self.cells[at.index()].status = CellStatus::from_adjacent(count);
            }
        }
    }

    pub fn cell(&self, at: Coord) -> Cell {
        self.cells[at.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        Coord::all().zip(self.cells.iter())
    }

    pub fn adjacent_mines(&self, at: Coord) -> u8 {
        at.neighbors()
            .filter(|&n| self.cells[n.index()].is_mine())
            .count() as u8
    }

    /// Uncover a cell. Revealed and flagged cells are left alone.
    pub fn reveal(&mut self, at: Coord) -> Reveal {
        let cell = &mut self.cells[at.index()];
        if cell.revealed || cell.flagged {
            return Reveal::Ignored;
        }
        cell.revealed = true;
        if cell.is_mine() {
            Reveal::Mine
        } else {
            Reveal::Safe
        }
    }

    /// Flip the flag on a covered cell, returning whether anything changed
    pub fn toggle_flag(&mut self, at: Coord) -> bool {
        let cell = &mut self.cells[at.index()];
        if cell.revealed {
            return false;
        }
        cell.flagged = !cell.flagged;
        true
    }

    pub fn set_selected(&mut self, at: Coord, selected: bool) {
        self.cells[at.index()].selected = selected;
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_mine()).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.revealed).count()
    }

    /// True once every cell without a mine has been uncovered
    pub fn all_safe_revealed(&self) -> bool {
        let mines = self.mine_count();
        mines > 0
            && self
                .cells
                .iter()
                .all(|c| c.revealed || c.is_mine())
    }
}
