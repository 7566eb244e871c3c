//! Control core of a joystick-driven 8x8 mine-sweeping game on an SPI
//! RGB565 panel.
//!
//! Three state-machine tasks are ticked by a fixed-rate cooperative
//! [`scheduler`]: the display task redraws the board, the input task turns
//! stick and button readings into cursor moves, reveals and flags, and the
//! outcome task watches for the end of the game. They share one
//! [`tasks::Console`], lent to each task in turn.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod controls;
pub mod game;
pub mod graphics;
pub mod grid;
pub mod rng;
pub mod scheduler;
pub mod screen;
pub mod tasks;

pub use controls::{Axis, Controls};
pub use game::{Game, Outcome};
pub use grid::{Cell, CellStatus, Coord, Grid, GridError, Reveal};
pub use scheduler::{Scheduler, SchedulerError, Task};
pub use screen::{ByteKind, DisplayBus, Screen, SpiDisplay};
