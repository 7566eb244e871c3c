use rtt_target::rprintln;

use crate::config::LFSR_SEED;
use crate::grid::{Coord, Grid, Reveal};
use crate::rng::Lfsr16;

/// Session-wide loss/win flags, each set at most once per game
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    lost: bool,
    won: bool,
}

impl Outcome {
    pub const fn lost(&self) -> bool {
        self.lost
    }

    pub const fn won(&self) -> bool {
        self.won
    }

    pub const fn is_over(&self) -> bool {
        self.lost || self.won
    }
}

/// Shared play state: the board, the cursor and the outcome flags
///
/// Tasks borrow it one at a time from the scheduler, so a task's
/// read-modify-write on the board is never observed half done.
pub struct Game {
    grid: Grid,
    cursor: Coord,
    outcome: Outcome,
    rng: Lfsr16,
    restart_requested: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An unstarted game; call [`Game::start`] to lay the mines
    pub const fn new() -> Self {
        Self {
            grid: Grid::new(),
            cursor: Coord::ORIGIN,
            outcome: Outcome {
                lost: false,
                won: false,
            },
            rng: Lfsr16::new(LFSR_SEED),
            restart_requested: false,
        }
    }

    /// Lay a fresh board and clear the outcome, keeping the cursor where it is
    ///
    /// The generator carries on from the previous game, so only the first
    /// board after power-up is fixed by the seed.
    pub fn start(&mut self) {
        self.grid.initialize(&mut self.rng);
        self.grid.set_selected(self.cursor, true);
        self.outcome = Outcome::default();
        self.restart_requested = false;
        rprintln!("New game, cursor at ({}, {})", self.cursor.x(), self.cursor.y());
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Move the cursor, clearing the old marker before setting the new one
    pub fn move_cursor(&mut self, to: Coord) {
        self.grid.set_selected(self.cursor, false);
        self.cursor = to;
        self.grid.set_selected(to, true);
    }

    /// Uncover a cell; uncovering a mine loses the game
    pub fn reveal(&mut self, at: Coord) -> Reveal {
        let result = self.grid.reveal(at);
        if result == Reveal::Mine && !self.outcome.lost {
            self.outcome.lost = true;
            rprintln!("Mine revealed at ({}, {}), game lost", at.x(), at.y());
        }
        result
    }

    pub fn toggle_flag(&mut self, at: Coord) -> bool {
        let changed = self.grid.toggle_flag(at);
        if changed {
            rprintln!(
                "Flag {} at ({}, {})",
                if self.grid.cell(at).is_flagged() { "set" } else { "cleared" },
                at.x(),
                at.y()
            );
        }
        changed
    }

    /// Latch a win once every safe cell is uncovered, returning the new flag
    pub fn check_win(&mut self) -> bool {
        if !self.outcome.won && !self.outcome.lost && self.grid.all_safe_revealed() {
            self.outcome.won = true;
            rprintln!("All safe cells revealed, game won");
        }
        self.outcome.won
    }

    pub fn request_restart(&mut self) {
        self.restart_requested = true;
    }

    /// Consume a pending restart request
    pub fn take_restart(&mut self) -> bool {
        core::mem::take(&mut self.restart_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CELL_COUNT, MINE_COUNT};

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn started() -> Game {
        let mut game = Game::new();
        game.start();
        game
    }

    fn selected(game: &Game) -> Vec<Coord> {
        game.grid()
            .iter()
            .filter(|(_, cell)| cell.is_selected())
            .map(|(at, _)| at)
            .collect()
    }

    #[test]
    fn start_selects_cursor_cell() {
        let game = started();
        assert_eq!(selected(&game), vec![Coord::ORIGIN]);
        assert_eq!(game.grid().mine_count(), MINE_COUNT);
        assert_eq!(game.outcome(), Outcome::default());
    }

    #[test]
    fn moving_cursor_keeps_one_marker() {
        let mut game = started();
        game.move_cursor(c(3, 5));
        game.move_cursor(c(3, 5));
        game.move_cursor(c(7, 0));
        assert_eq!(selected(&game), vec![c(7, 0)]);
        assert_eq!(game.cursor(), c(7, 0));
    }

    #[test]
    fn revealing_a_mine_loses() {
        let mut game = started();
        assert_eq!(game.reveal(c(0, 0)), Reveal::Safe);
        assert!(!game.outcome().lost());
        assert_eq!(game.reveal(c(2, 2)), Reveal::Mine);
        assert!(game.outcome().lost());
        assert!(game.outcome().is_over());
    }

    #[test]
    fn win_is_latched_after_last_safe_cell() {
        let mut game = started();
        let safe: Vec<Coord> = game
            .grid()
            .iter()
            .filter(|(_, cell)| !cell.is_mine())
            .map(|(at, _)| at)
            .collect();
        assert_eq!(safe.len(), CELL_COUNT - MINE_COUNT);
        for at in safe {
            assert!(!game.check_win());
            game.reveal(at);
        }
        assert!(game.check_win());
        assert!(game.outcome().won());
    }

    #[test]
    fn no_win_after_loss() {
        let mut game = started();
        game.reveal(c(2, 2));
        let safe: Vec<Coord> = game
            .grid()
            .iter()
            .filter(|(_, cell)| !cell.is_mine())
            .map(|(at, _)| at)
            .collect();
        for at in safe {
            game.reveal(at);
        }
        assert!(!game.check_win());
    }

    #[test]
    fn restart_resets_outcome_and_draws_new_board() {
        let mut game = started();
        let first = game.grid().clone();
        game.move_cursor(c(4, 4));
        game.reveal(c(2, 2));
        game.request_restart();
        assert!(game.take_restart());
        assert!(!game.take_restart());
        game.start();
        assert!(!game.outcome().lost());
        assert_ne!(*game.grid(), first);
        assert_eq!(selected(&game), vec![c(4, 4)]);
        assert_eq!(game.grid().revealed_count(), 0);
    }

    #[test]
    fn first_board_is_deterministic() {
        assert_eq!(started().grid(), started().grid());
    }
}
