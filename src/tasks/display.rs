use crate::graphics::{TileGraphic, ALERT_COLOR, WIN_COLOR};
use crate::scheduler::{StateMachine, Tick};
use crate::screen::{tile_origin, DisplayBus};
use crate::tasks::Console;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Init,
    Display,
}

/// Lays the first board, then redraws the whole board every period
pub struct DisplayTask;

impl StateMachine for DisplayTask {
    const NAME: &'static str = "display";
    type State = DisplayState;
    const ENTRY: DisplayState = DisplayState::Init;
}

impl<B: DisplayBus, J> Tick<Console<B, J>> for DisplayTask {
    fn tick(&mut self, state: DisplayState, console: &mut Console<B, J>) -> DisplayState {
        match state {
            DisplayState::Init => {
                console.game.start();
                DisplayState::Display
            }
            DisplayState::Display => {
                let outcome = console.game.outcome();
                if outcome.lost() {
                    console.screen.fill_board(ALERT_COLOR);
                } else if outcome.won() {
                    console.screen.fill_board(WIN_COLOR);
                } else {
                    for (at, cell) in console.game.grid().iter() {
                        let (x0, y0) = tile_origin(at.x(), at.y());
                        let graphic = TileGraphic::select(cell);
                        console.screen.draw_block(x0, y0, graphic.bitmap());
                    }
                }
                DisplayState::Display
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CELL_COUNT, MINE_COUNT};
    use crate::grid::Coord;
    use crate::screen::testing::RecordingBus;
    use crate::screen::{CASET, RAMWR, RASET};

    struct NoControls;

    fn console() -> Console<RecordingBus, NoControls> {
        Console::new(RecordingBus::default(), NoControls)
    }

    #[test]
    fn init_lays_the_board_without_drawing() {
        let mut console = console();
        let next = DisplayTask.tick(DisplayState::Init, &mut console);
        assert_eq!(next, DisplayState::Display);
        assert_eq!(console.game.grid().mine_count(), MINE_COUNT);
        assert!(console.screen.bus().bytes.is_empty());
    }

    #[test]
    fn display_draws_every_tile() {
        let mut console = console();
        DisplayTask.tick(DisplayState::Init, &mut console);
        let next = DisplayTask.tick(DisplayState::Display, &mut console);
        assert_eq!(next, DisplayState::Display);

        let bus = console.screen.bus();
        assert_eq!(bus.commands().len(), CELL_COUNT * 3);
        assert!(bus.commands().chunks(3).all(|c| c == [CASET, RASET, RAMWR]));
        // 8 window bytes and 512 pixel bytes per tile
        assert_eq!(bus.data().len(), CELL_COUNT * (8 + 512));
        // first tile is the selected cursor cell at (0, 0)
        assert_eq!(bus.data()[..8], [0, 4, 0, 19, 0, 4, 0, 19]);
        let first_pixel = u16::from_be_bytes([bus.data()[8], bus.data()[9]]);
        assert_eq!(first_pixel, TileGraphic::UnrevealedSelected.bitmap()[0][0]);
    }

    #[test]
    fn loss_paints_the_alert_fill() {
        let mut console = console();
        DisplayTask.tick(DisplayState::Init, &mut console);
        console.game.reveal(Coord::new(2, 2).unwrap());
        DisplayTask.tick(DisplayState::Display, &mut console);

        let bus = console.screen.bus();
        assert_eq!(bus.commands(), vec![CASET, RASET, RAMWR]);
        assert!(bus.data()[8..].chunks(2).all(|w| w == ALERT_COLOR.to_be_bytes()));
    }

    #[test]
    fn keeps_refreshing() {
        let mut console = console();
        DisplayTask.tick(DisplayState::Init, &mut console);
        DisplayTask.tick(DisplayState::Display, &mut console);
        let first = console.screen.bus().bytes.len();
        console.screen.bus_mut().clear();
        DisplayTask.tick(DisplayState::Display, &mut console);
        assert_eq!(console.screen.bus().bytes.len(), first);
    }
}
