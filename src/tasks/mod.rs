//! The three periodic tasks and the context they share.

use crate::game::Game;
use crate::screen::{DisplayBus, Screen};

pub mod display;
pub mod input;
pub mod outcome;

pub use display::{DisplayState, DisplayTask};
pub use input::{InputState, InputTask};
pub use outcome::{OutcomeState, OutcomeTask};

/// Everything a task may touch during its tick
///
/// Owned by the main loop and lent to one task at a time by the scheduler.
pub struct Console<B, J> {
    pub game: Game,
    pub screen: Screen<B>,
    pub controls: J,
}

impl<B: DisplayBus, J> Console<B, J> {
    pub fn new(bus: B, controls: J) -> Self {
        Self {
            game: Game::new(),
            screen: Screen::new(bus),
            controls,
        }
    }
}
