use fugit::MillisDurationU32;

/// Cells per row and per column
pub const GRID_SIZE: usize = 8;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
pub const MINE_COUNT: usize = 7;

/// Seed of the 16-bit LFSR used for mine placement
pub const LFSR_SEED: u16 = 0xACE1;

/// Side of one square tile, in pixels
pub const TILE_SIZE: u16 = 16;
/// Top-left corner of the board on the panel
pub const BOARD_ORIGIN: u16 = 4;
/// Last pixel column/row covered by the board
pub const BOARD_EXTENT: u16 = BOARD_ORIGIN + TILE_SIZE * GRID_SIZE as u16 - 1;

/// Full scale of a 10-bit analog sample
pub const ADC_MAX: u16 = 1023;
pub const ADC_CENTER: u16 = 512;
pub const STICK_LOW_THRESHOLD: u16 = 300;
pub const STICK_HIGH_THRESHOLD: u16 = 723;

/// Input ticks to ignore the stick after an accepted move
pub const DEBOUNCE_TICKS: u8 = 3;
/// Input ticks the button must be held to count as a long press
pub const LONG_PRESS_TICKS: u16 = 10;

pub const BASE_PERIOD: MillisDurationU32 = MillisDurationU32::from_ticks(50);
pub const DISPLAY_PERIOD: MillisDurationU32 = MillisDurationU32::from_ticks(200);
pub const INPUT_PERIOD: MillisDurationU32 = MillisDurationU32::from_ticks(50);
pub const OUTCOME_PERIOD: MillisDurationU32 = MillisDurationU32::from_ticks(100);

/// Every task period, in registration order
pub fn task_periods() -> [MillisDurationU32; 3] {
    [DISPLAY_PERIOD, INPUT_PERIOD, OUTCOME_PERIOD]
}
