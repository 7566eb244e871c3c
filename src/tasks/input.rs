use crate::config::{DEBOUNCE_TICKS, LONG_PRESS_TICKS};
use crate::controls::{Axis, Controls, Smoothed, Zone};
use crate::scheduler::{StateMachine, Tick};
use crate::tasks::Console;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputState {
    Run,
}

/// Reads the stick and buttons, moves the cursor and applies tap/hold
///
/// A tap (released before `LONG_PRESS_TICKS`) reveals the cursor cell, a
/// hold toggles its flag once per press. The distinction is reset on every
/// release. The reset button only counts on its press edge, and a button
/// already down at power-up has to be released first.
#[derive(Debug)]
pub struct InputTask {
    x: Smoothed,
    y: Smoothed,
    debounce: u8,
    press_ticks: u16,
    long_press_handled: bool,
    reset_held: bool,
}

impl Default for InputTask {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTask {
    pub fn new() -> Self {
        Self {
            x: Smoothed::default(),
            y: Smoothed::default(),
            debounce: 0,
            press_ticks: 0,
            long_press_handled: false,
            reset_held: true,
        }
    }

    fn steer<B, J: Controls>(&mut self, console: &mut Console<B, J>) {
        let zone_x = Zone::classify(self.x.update(console.controls.sample(Axis::X)));
        let zone_y = Zone::classify(self.y.update(console.controls.sample(Axis::Y)));

        let mut target = console.game.cursor();
        if self.debounce > 0 {
            self.debounce -= 1;
        } else if zone_x != Zone::Center || zone_y != Zone::Center {
            target = target.offset(zone_x.step(), zone_y.step());
            self.debounce = DEBOUNCE_TICKS;
        }
        console.game.move_cursor(target);
    }

    fn press<B, J: Controls>(&mut self, console: &mut Console<B, J>) {
        let game = &mut console.game;
        let at = game.cursor();
        let accepting = !game.outcome().is_over();

        if console.controls.button_pressed() {
            self.press_ticks = self.press_ticks.saturating_add(1);
            if self.press_ticks >= LONG_PRESS_TICKS && !self.long_press_handled {
                self.long_press_handled = true;
                if accepting {
                    game.toggle_flag(at);
                }
            }
            return;
        }

        if self.press_ticks > 0 && !self.long_press_handled && accepting {
            let cell = game.grid().cell(at);
            if !cell.is_revealed() && !cell.is_flagged() {
                game.reveal(at);
            }
        }
        self.press_ticks = 0;
        self.long_press_handled = false;
    }

    fn restart<B, J: Controls>(&mut self, console: &mut Console<B, J>) {
        let held = console.controls.reset_pressed();
        if held && !self.reset_held {
            console.game.request_restart();
        }
        self.reset_held = held;
    }
}

impl StateMachine for InputTask {
    const NAME: &'static str = "input";
    type State = InputState;
    const ENTRY: InputState = InputState::Run;
}

impl<B, J: Controls> Tick<Console<B, J>> for InputTask {
    fn tick(&mut self, state: InputState, console: &mut Console<B, J>) -> InputState {
        match state {
            InputState::Run => {
                self.steer(console);
                self.press(console);
                self.restart(console);
                InputState::Run
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ADC_CENTER, ADC_MAX};
    use crate::grid::Coord;
    use crate::screen::testing::RecordingBus;

    #[derive(Clone, Copy)]
    struct Stick {
        x: u16,
        y: u16,
        button: bool,
        reset: bool,
    }

    impl Default for Stick {
        fn default() -> Self {
            Self {
                x: ADC_CENTER,
                y: ADC_CENTER,
                button: false,
                reset: false,
            }
        }
    }

    impl Controls for Stick {
        fn sample(&mut self, axis: Axis) -> u16 {
            match axis {
                Axis::X => self.x,
                Axis::Y => self.y,
            }
        }

        fn button_pressed(&mut self) -> bool {
            self.button
        }

        fn reset_pressed(&mut self) -> bool {
            self.reset
        }
    }

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn console() -> Console<RecordingBus, Stick> {
        let mut console = Console::new(RecordingBus::default(), Stick::default());
        console.game.start();
        console
    }

    fn run(task: &mut InputTask, console: &mut Console<RecordingBus, Stick>, ticks: usize) {
        for _ in 0..ticks {
            task.tick(InputState::Run, console);
            let selected = console
                .game
                .grid()
                .iter()
                .filter(|(_, cell)| cell.is_selected())
                .count();
            assert_eq!(selected, 1);
        }
    }

    #[test]
    fn center_stick_stays_put() {
        let mut console = console();
        let mut task = InputTask::new();
        run(&mut task, &mut console, 20);
        assert_eq!(console.game.cursor(), Coord::ORIGIN);
    }

    #[test]
    fn deflection_moves_after_smoothing() {
        let mut console = console();
        let mut task = InputTask::new();
        console.controls.x = ADC_MAX;
        run(&mut task, &mut console, 1);
        assert_eq!(console.game.cursor(), c(0, 0));
        run(&mut task, &mut console, 1);
        assert_eq!(console.game.cursor(), c(1, 0));
        assert!(console.game.grid().cell(c(1, 0)).is_selected());
        assert!(!console.game.grid().cell(c(0, 0)).is_selected());
    }

    #[test]
    fn sustained_deflection_is_debounced() {
        let mut console = console();
        let mut task = InputTask::new();
        console.controls.x = ADC_MAX;
        run(&mut task, &mut console, 2);
        assert_eq!(console.game.cursor(), c(1, 0));
        run(&mut task, &mut console, DEBOUNCE_TICKS as usize);
        assert_eq!(console.game.cursor(), c(1, 0));
        run(&mut task, &mut console, 1);
        assert_eq!(console.game.cursor(), c(2, 0));
    }

    #[test]
    fn both_axes_in_one_tick() {
        let mut console = console();
        let mut task = InputTask::new();
        console.controls.x = ADC_MAX;
        console.controls.y = ADC_MAX;
        run(&mut task, &mut console, 2);
        assert_eq!(console.game.cursor(), c(1, 1));
    }

    #[test]
    fn cursor_is_clamped() {
        let mut console = console();
        let mut task = InputTask::new();
        console.game.move_cursor(c(7, 7));
        console.controls.x = ADC_MAX;
        console.controls.y = ADC_MAX;
        run(&mut task, &mut console, 60);
        assert_eq!(console.game.cursor(), c(7, 7));

        console.controls.x = 0;
        console.controls.y = 0;
        run(&mut task, &mut console, 100);
        assert_eq!(console.game.cursor(), c(0, 0));
    }

    #[test]
    fn tap_reveals() {
        let mut console = console();
        let mut task = InputTask::new();
        console.controls.button = true;
        run(&mut task, &mut console, 2);
        assert!(!console.game.grid().cell(c(0, 0)).is_revealed());
        console.controls.button = false;
        run(&mut task, &mut console, 1);
        assert!(console.game.grid().cell(c(0, 0)).is_revealed());
    }

    #[test]
    fn tap_on_flag_does_nothing() {
        let mut console = console();
        let mut task = InputTask::new();
        console.game.toggle_flag(c(0, 0));
        console.controls.button = true;
        run(&mut task, &mut console, 1);
        console.controls.button = false;
        run(&mut task, &mut console, 1);
        let cell = console.game.grid().cell(c(0, 0));
        assert!(cell.is_flagged());
        assert!(!cell.is_revealed());
    }

    #[test]
    fn hold_flags_exactly_once() {
        let mut console = console();
        let mut task = InputTask::new();
        console.controls.button = true;
        run(&mut task, &mut console, LONG_PRESS_TICKS as usize - 1);
        assert!(!console.game.grid().cell(c(0, 0)).is_flagged());
        run(&mut task, &mut console, 1);
        assert!(console.game.grid().cell(c(0, 0)).is_flagged());
        run(&mut task, &mut console, 100);
        assert!(console.game.grid().cell(c(0, 0)).is_flagged());

        console.controls.button = false;
        run(&mut task, &mut console, 1);
        let cell = console.game.grid().cell(c(0, 0));
        assert!(cell.is_flagged());
        assert!(!cell.is_revealed());
    }

    #[test]
    fn second_hold_clears_flag() {
        let mut console = console();
        let mut task = InputTask::new();
        for _ in 0..2 {
            console.controls.button = true;
            run(&mut task, &mut console, LONG_PRESS_TICKS as usize);
            console.controls.button = false;
            run(&mut task, &mut console, 1);
        }
        assert!(!console.game.grid().cell(c(0, 0)).is_flagged());
    }

    #[test]
    fn tapping_a_mine_loses() {
        let mut console = console();
        let mut task = InputTask::new();
        console.game.move_cursor(c(2, 2));
        console.controls.button = true;
        run(&mut task, &mut console, 1);
        console.controls.button = false;
        run(&mut task, &mut console, 1);
        assert!(console.game.outcome().lost());
    }

    #[test]
    fn gestures_ignored_after_loss() {
        let mut console = console();
        let mut task = InputTask::new();
        console.game.reveal(c(2, 2));
        console.controls.button = true;
        run(&mut task, &mut console, 1);
        console.controls.button = false;
        run(&mut task, &mut console, 1);
        assert!(!console.game.grid().cell(c(0, 0)).is_revealed());

        console.controls.button = true;
        run(&mut task, &mut console, LONG_PRESS_TICKS as usize);
        assert!(!console.game.grid().cell(c(0, 0)).is_flagged());
    }

    #[test]
    fn reset_requests_restart_on_press_edge() {
        let mut console = console();
        let mut task = InputTask::new();
        run(&mut task, &mut console, 1);
        console.controls.reset = true;
        run(&mut task, &mut console, 1);
        assert!(console.game.take_restart());
        run(&mut task, &mut console, 5);
        assert!(!console.game.take_restart());
        console.controls.reset = false;
        run(&mut task, &mut console, 1);
        console.controls.reset = true;
        run(&mut task, &mut console, 1);
        assert!(console.game.take_restart());
    }

    #[test]
    fn reset_held_at_power_up_waits_for_release() {
        let mut console = console();
        let mut task = InputTask::new();
        console.controls.reset = true;
        run(&mut task, &mut console, 5);
        assert!(!console.game.take_restart());
        console.controls.reset = false;
        run(&mut task, &mut console, 1);
        console.controls.reset = true;
        run(&mut task, &mut console, 1);
        assert!(console.game.take_restart());
    }
}
