//! Tile artwork and the mapping from cell state to artwork.
//!
//! Every tile is a 16x16 block of RGB565 words. Tiles are built at compile
//! time from a border colour, a fill colour and one or more 1-bit glyph
//! layers (bit 15 of each row word is the leftmost pixel).

use crate::config::TILE_SIZE;
use crate::grid::{Cell, CellStatus};

/// 16-bit RGB565 colour word
pub type Color = u16;

pub const BLACK: Color = 0x0000;
pub const BLUE: Color = 0x001F;
pub const RED: Color = 0xF800;
pub const GREEN: Color = 0x07E0;
pub const YELLOW: Color = 0xFFE0;
pub const BROWN: Color = 0x7B00;
pub const PURPLE: Color = 0xF81F;

/// Play area fill once the game is lost
pub const ALERT_COLOR: Color = RED;
/// Play area fill once the game is won
pub const WIN_COLOR: Color = GREEN;

const SIDE: usize = TILE_SIZE as usize;

pub type Bitmap = [[Color; SIDE]; SIDE];
type Glyph = [u16; SIDE];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileGraphic {
    Unrevealed,
    UnrevealedSelected,
    Empty,
    EmptySelected,
    Number1,
    Number1Selected,
    Number2,
    Number2Selected,
    Number3,
    Number3Selected,
    MineExploded,
    Flag,
    FlagSelected,
}

impl TileGraphic {
    /// Pick the artwork for a cell
    ///
    /// A flag always wins over the cursor highlight of a covered cell; an
    /// uncovered cell shows its content, in the highlighted variant when it
    /// is under the cursor.
    pub fn select(cell: &Cell) -> Self {
        use TileGraphic::*;

        let pick = |plain, highlighted| if cell.is_selected() { highlighted } else { plain };

        if !cell.is_revealed() {
            return if cell.is_flagged() {
                pick(Flag, FlagSelected)
            } else {
                pick(Unrevealed, UnrevealedSelected)
            };
        }

        match cell.status() {
            CellStatus::Empty => pick(Empty, EmptySelected),
            CellStatus::Number1 => pick(Number1, Number1Selected),
            CellStatus::Number2 => pick(Number2, Number2Selected),
            CellStatus::Number3 => pick(Number3, Number3Selected),
            CellStatus::Mine => MineExploded,
        }
    }

    pub fn bitmap(self) -> &'static Bitmap {
        use TileGraphic::*;

        match self {
            Unrevealed => &UNREVEALED,
            UnrevealedSelected => &UNREVEALED_SELECTED,
            Empty => &EMPTY,
            EmptySelected => &EMPTY_SELECTED,
            Number1 => &NUMBER_1,
            Number1Selected => &NUMBER_1_SELECTED,
            Number2 => &NUMBER_2,
            Number2Selected => &NUMBER_2_SELECTED,
            Number3 => &NUMBER_3,
            Number3Selected => &NUMBER_3_SELECTED,
            MineExploded => &MINE_EXPLODED,
            Flag => &FLAG,
            FlagSelected => &FLAG_SELECTED,
        }
    }
}

const NO_GLYPH: Glyph = [0; SIDE];

const GLYPH_1: Glyph = [
    0, 0, 0x0380, 0x0380, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180, 0x0180,
    0x0180, 0x07E0, 0, 0,
];

const GLYPH_2: Glyph = [
    0, 0, 0x1FF8, 0x1FF8, 0x0018, 0x0018, 0x0018, 0x1FF8, 0x1FF8, 0x1800, 0x1800, 0x1800,
    0x1FF8, 0x1FF8, 0, 0,
];

const GLYPH_3: Glyph = [
    0, 0, 0x1FF8, 0x1FF8, 0x0018, 0x0018, 0x0018, 0x0FF8, 0x0FF8, 0x0018, 0x0018, 0x0018,
    0x1FF8, 0x1FF8, 0, 0,
];

const GLYPH_MINE: Glyph = [
    0, 0, 0, 0x03C0, 0x07E0, 0x0FF0, 0x0FF0, 0x0FF0, 0x0FF0, 0x0FF0, 0x0FF0, 0x07E0, 0x03C0,
    0, 0, 0,
];

const GLYPH_PENNANT: Glyph = [
    0, 0, 0, 0x0600, 0x0780, 0x07E0, 0x0780, 0x0600, 0, 0, 0, 0, 0, 0, 0, 0,
];

const GLYPH_POLE: Glyph = [
    0, 0, 0, 0x0800, 0x0800, 0x0800, 0x0800, 0x0800, 0x0800, 0x0800, 0x0800, 0x0800, 0x3F00,
    0, 0, 0,
];

const fn tile(border: Color, fill: Color) -> Bitmap {
    let mut px = [[fill; SIDE]; SIDE];
    let mut i = 0;
    while i < SIDE {
        px[0][i] = border;
        px[SIDE - 1][i] = border;
        px[i][0] = border;
        px[i][SIDE - 1] = border;
        i += 1;
    }
    px
}

const fn ink(mut px: Bitmap, glyph: &Glyph, color: Color) -> Bitmap {
    let mut row = 0;
    while row < SIDE {
        let mut col = 0;
        while col < SIDE {
            if glyph[row] & (0x8000 >> col) != 0 {
                px[row][col] = color;
            }
            col += 1;
        }
        row += 1;
    }
    px
}

const fn number(border: Color, glyph: &Glyph, color: Color) -> Bitmap {
    ink(tile(border, BROWN), glyph, color)
}

const fn flag(border: Color) -> Bitmap {
    ink(ink(tile(border, GREEN), &GLYPH_POLE, BLACK), &GLYPH_PENNANT, RED)
}

static UNREVEALED: Bitmap = tile(BLACK, GREEN);
static UNREVEALED_SELECTED: Bitmap = tile(YELLOW, GREEN);
static EMPTY: Bitmap = number(BLACK, &NO_GLYPH, BROWN);
static EMPTY_SELECTED: Bitmap = number(YELLOW, &NO_GLYPH, BROWN);
static NUMBER_1: Bitmap = number(BLACK, &GLYPH_1, BLUE);
static NUMBER_1_SELECTED: Bitmap = number(YELLOW, &GLYPH_1, BLUE);
static NUMBER_2: Bitmap = number(BLACK, &GLYPH_2, PURPLE);
static NUMBER_2_SELECTED: Bitmap = number(YELLOW, &GLYPH_2, PURPLE);
static NUMBER_3: Bitmap = number(BLACK, &GLYPH_3, RED);
static NUMBER_3_SELECTED: Bitmap = number(YELLOW, &GLYPH_3, RED);
static MINE_EXPLODED: Bitmap = ink(tile(BLACK, RED), &GLYPH_MINE, BLACK);
static FLAG: Bitmap = flag(BLACK);
static FLAG_SELECTED: Bitmap = flag(YELLOW);
