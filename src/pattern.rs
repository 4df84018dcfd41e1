use crate::board::Board;
use crate::topology::vertex_nbr;
use crate::types::{Color, Dir, Player, Vertex};

pub const PATTERN_BITS: u32 = 18;

// Low bit of every 2-bit slot
const LOW_BITS: u32 = 0x15555;

/// Color-relative code of one point in a `Pattern`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PatternCode {
    Empty = 0,
    Own = 1,
    Opponent = 2,
    OffBoard = 3,
}

impl From<u32> for PatternCode {
    fn from(raw: u32) -> Self {
        match raw & 3 {
            0 => PatternCode::Empty,
            1 => PatternCode::Own,
            2 => PatternCode::Opponent,
            _ => PatternCode::OffBoard,
        }
    }
}

impl PatternCode {
    fn of_color(color: Color, own: Color) -> Self {
        match color {
            Color::Empty => PatternCode::Empty,
            Color::OffBoard => PatternCode::OffBoard,
            c if c == own => PatternCode::Own,
            _ => PatternCode::Opponent,
        }
    }
}

/// Packed 3x3 neighborhood around a point, 2 bits per slot.
///
/// Slot `i` sits at bits `2i..2i+2`, in the order of `Pattern::SLOTS`: the
/// eight surrounding points clockwise from up, then the center.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct Pattern(u32);

impl Pattern {
    pub const SLOTS: [Option<Dir>; 9] = [
        Some(Dir::N),
        Some(Dir::NE),
        Some(Dir::E),
        Some(Dir::SE),
        Some(Dir::S),
        Some(Dir::SW),
        Some(Dir::W),
        Some(Dir::NW),
        None,
    ];

    pub fn of_board(board: &Board, player: Player, v: Vertex) -> Self {
        let own = Color::from(player);
        let mut raw = 0u32;
        for (slot, dir) in Self::SLOTS.iter().enumerate() {
            let at = dir.map_or(v, |d| vertex_nbr(v, d));
            let code = PatternCode::of_color(board.color_at(at), own);
            raw |= (code as u32) << (2 * slot);
        }
        Pattern(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn code_at(self, slot: usize) -> PatternCode {
        PatternCode::from(self.0 >> (2 * slot))
    }

    /// The same neighborhood seen from the opponent's side: own and opponent
    /// codes trade places, empty and off-board stay put.
    pub fn swap_colors(self) -> Self {
        let low = self.0 & LOW_BITS;
        let high = (self.0 >> 1) & LOW_BITS;
        let mixed = low ^ high;
        Pattern(self.0 ^ (mixed | (mixed << 1)))
    }
}

impl From<Pattern> for u32 {
    fn from(p: Pattern) -> u32 {
        p.0
    }
}

impl Board {
    pub fn pattern(&self, player: Player, x: usize, y: usize) -> Pattern {
        Pattern::of_board(self, player, Vertex::of_coords(x, y))
    }

    pub fn pattern_at(&self, player: Player, v: Vertex) -> Pattern {
        Pattern::of_board(self, player, v)
    }
}
