use crate::graphics::{ALERT_COLOR, WIN_COLOR};
use crate::scheduler::{StateMachine, Tick};
use crate::screen::DisplayBus;
use crate::tasks::Console;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeState {
    Run,
    Won,
    Lost,
}

/// Watches for the end of the game and paints the end screen on entry
///
/// Later repaints are left to the display task. A restart request from the
/// reset button lays a new board from any state.
pub struct OutcomeTask;

impl StateMachine for OutcomeTask {
    const NAME: &'static str = "outcome";
    type State = OutcomeState;
    const ENTRY: OutcomeState = OutcomeState::Run;
}

impl<B: DisplayBus, J> Tick<Console<B, J>> for OutcomeTask {
    fn tick(&mut self, state: OutcomeState, console: &mut Console<B, J>) -> OutcomeState {
        let game = &mut console.game;
        if game.take_restart() {
            game.start();
            return OutcomeState::Run;
        }

        let next = match state {
            OutcomeState::Run if game.outcome().lost() => OutcomeState::Lost,
            OutcomeState::Run if game.check_win() => OutcomeState::Won,
            other => other,
        };
        if next != state {
            match next {
                OutcomeState::Run => {}
                OutcomeState::Won => console.screen.fill_board(WIN_COLOR),
                OutcomeState::Lost => console.screen.fill_board(ALERT_COLOR),
            }
        }
        next
    }
}
