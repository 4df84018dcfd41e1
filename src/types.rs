use crate::error::BoardError;
use crate::nat_map;
pub use go_game_types::{Color, Player};
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: usize = 19;
pub const BOARD_AREA: usize = BOARD_SIZE * BOARD_SIZE;

const COLUMN_LETTERS: &[u8; BOARD_SIZE] = b"ABCDEFGHJKLMNOPQRST";

// Base trait for natural number types
pub trait Nat: Copy + Clone + Eq + PartialEq + From<usize> + Into<usize> {
    const COUNT: usize;

    fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from)
    }
}

impl Nat for Player {
    const COUNT: usize = Player::COUNT;
}

impl Nat for Color {
    const COUNT: usize = Color::COUNT;
}

/// One intersection of the 19x19 board, or the shared off-board sentinel.
///
/// On-board points are laid out row-major (`y * 19 + x`, row 0 at the top);
/// the sentinel takes the single index after the last point.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Vertex(u16);

impl Vertex {
    pub const COUNT: usize = BOARD_AREA + 1;

    pub const fn sentinel() -> Self {
        Vertex(BOARD_AREA as u16)
    }

    /// Caller guarantees `x, y < 19`.
    pub fn of_coords(x: usize, y: usize) -> Self {
        debug_assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "coords ({}, {}) off the board",
            x,
            y
        );
        Vertex((y * BOARD_SIZE + x) as u16)
    }

    pub fn try_of_coords(x: usize, y: usize) -> Result<Self, BoardError> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Ok(Self::of_coords(x, y))
        } else {
            Err(BoardError::CoordsOutOfRange { x, y })
        }
    }

    pub fn is_sentinel(self) -> bool {
        self == Self::sentinel()
    }

    pub fn x(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    pub fn y(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    pub fn column_letter(x: usize) -> char {
        COLUMN_LETTERS[x] as char
    }

    /// All on-board vertices, sentinel excluded.
    pub fn on_board() -> impl Iterator<Item = Self> {
        (0..BOARD_AREA).map(Self::from)
    }
}

impl From<usize> for Vertex {
    fn from(raw: usize) -> Self {
        debug_assert!(raw < Vertex::COUNT);
        Vertex(raw as u16)
    }
}

impl From<Vertex> for usize {
    fn from(v: Vertex) -> usize {
        v.0 as usize
    }
}

impl Nat for Vertex {
    const COUNT: usize = Vertex::COUNT;
}

// GTP style: column letter without 'I', row 1 at the bottom.
impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            return write!(f, "off");
        }
        write!(
            f,
            "{}{}",
            Self::column_letter(self.x()),
            BOARD_SIZE - self.y()
        )
    }
}

impl FromStr for Vertex {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidVertex(s.to_string());
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
        let x = COLUMN_LETTERS
            .iter()
            .position(|&c| c as char == letter)
            .ok_or_else(invalid)?;
        let row: usize = chars.as_str().parse().map_err(|_| invalid())?;
        if row == 0 || row > BOARD_SIZE {
            return Err(invalid());
        }
        Ok(Vertex::of_coords(x, BOARD_SIZE - row))
    }
}

// Direction - simple four first, so they index the topology table directly
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Dir {
    N = 0,
    E = 1,
    S = 2,
    W = 3,
    NW = 4,
    NE = 5,
    SE = 6,
    SW = 7,
}

impl Dir {
    pub const SIMPLE4: [Dir; 4] = [Dir::N, Dir::E, Dir::S, Dir::W];

    pub fn opposite(&self) -> Self {
        match self {
            Dir::N => Dir::S,
            Dir::E => Dir::W,
            Dir::S => Dir::N,
            Dir::W => Dir::E,
            Dir::NW => Dir::SE,
            Dir::NE => Dir::SW,
            Dir::SE => Dir::NW,
            Dir::SW => Dir::NE,
        }
    }

    /// The two simple steps a diagonal is made of, vertical first.
    pub fn split(&self) -> Option<(Dir, Dir)> {
        match self {
            Dir::NW => Some((Dir::N, Dir::W)),
            Dir::NE => Some((Dir::N, Dir::E)),
            Dir::SE => Some((Dir::S, Dir::E)),
            Dir::SW => Some((Dir::S, Dir::W)),
            _ => None,
        }
    }
}

// Move - combines Player and Vertex, the key of the Zobrist table
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Move {
    pub player: Player,
    pub vertex: Vertex,
}

impl Move {
    pub fn of_player_vertex(player: Player, vertex: Vertex) -> Self {
        Move { player, vertex }
    }
}

impl From<usize> for Move {
    fn from(raw: usize) -> Self {
        Move {
            player: Player::from(raw & 1),
            vertex: Vertex::from(raw >> 1),
        }
    }
}

impl From<Move> for usize {
    fn from(m: Move) -> usize {
        let player_raw: usize = m.player.into();
        let vertex_raw: usize = m.vertex.into();
        player_raw | (vertex_raw << 1)
    }
}

impl Nat for Move {
    // Move encoding: player | (vertex << 1)
    const COUNT: usize = Vertex::COUNT << 1;
}

pub fn color_is_player(color: Color) -> bool {
    Player::try_from(color).is_ok()
}

pub fn player_of(color: Color) -> Option<Player> {
    Player::try_from(color).ok()
}

pub fn color_to_showboard_char(color: Color) -> char {
    match color {
        Color::Black => '#',
        Color::White => 'O',
        Color::Empty => '.',
        Color::OffBoard => '$',
    }
}

pub type VertexMap<T> = nat_map::NatMap<{ Vertex::COUNT }, Vertex, T>;
pub type MoveMap<T> = nat_map::NatMap<{ Move::COUNT }, Move, T>;
pub type VertexSet = crate::nat_set::NatSet<{ Vertex::COUNT }, Vertex>;
