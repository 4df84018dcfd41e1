use crate::fast_random::FastRandom;
use crate::types::{Move, MoveMap, Nat, Player, Vertex};
use std::fmt;

// Zobrist hash for the whole board position
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Hash {
    hash: u64,
}

impl Hash {
    pub const fn zero() -> Self {
        Hash { hash: 0 }
    }

    pub fn raw(self) -> u64 {
        self.hash
    }

    pub fn randomize(&mut self, fr: &mut FastRandom) {
        self.hash = fr.get_next_u64();
    }
}

impl From<u64> for Hash {
    fn from(hash: u64) -> Self {
        Hash { hash }
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.hash)
    }
}

impl std::ops::BitXorAssign for Hash {
    fn bitxor_assign(&mut self, other: Hash) {
        self.hash ^= other.hash;
    }
}

impl std::ops::BitXor for Hash {
    type Output = Hash;
    fn bitxor(self, other: Hash) -> Hash {
        Hash {
            hash: self.hash ^ other.hash,
        }
    }
}

// Zobrist table for position hashing
pub struct Zobrist {
    hashes: MoveMap<Hash>,
}

impl Zobrist {
    pub const SEED: u32 = 123;

    pub fn new() -> Self {
        let mut zobrist = Zobrist {
            hashes: MoveMap::new_with(Hash::zero()),
        };

        let mut rng = FastRandom::new(Self::SEED);
        for pl in Player::all() {
            for v in Vertex::all() {
                zobrist.hashes[Move::of_player_vertex(pl, v)].randomize(&mut rng);
            }
        }

        zobrist
    }

    #[inline]
    pub fn of_player_vertex(&self, pl: Player, v: Vertex) -> Hash {
        self.hashes[Move::of_player_vertex(pl, v)]
    }
}

impl Default for Zobrist {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref ZOBRIST: Zobrist = Zobrist::new();
}

const HISTORY_CAPACITY: usize = 8;

/// Post-move hashes of the last `CAPACITY` moves.
///
/// Only this window is checked for repetition, so a cycle longer than
/// `CAPACITY` plies goes undetected.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HashHistory {
    entries: [Hash; HISTORY_CAPACITY],
    cursor: usize,
}

impl HashHistory {
    pub const CAPACITY: usize = HISTORY_CAPACITY;

    /// Slots start at zero, the hash of the empty board, which no position
    /// right after a move can have.
    pub fn new() -> Self {
        HashHistory {
            entries: [Hash::zero(); Self::CAPACITY],
            cursor: 0,
        }
    }

    pub fn push(&mut self, hash: Hash) {
        self.entries[self.cursor] = hash;
        self.cursor = (self.cursor + 1) % Self::CAPACITY;
    }

    #[inline]
    pub fn contains(&self, hash: Hash) -> bool {
        self.entries.iter().any(|&h| h == hash)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Stored hashes, oldest slot first.
    pub fn iter(&self) -> impl Iterator<Item = Hash> + '_ {
        self.entries[self.cursor..]
            .iter()
            .chain(self.entries[..self.cursor].iter())
            .copied()
    }
}

impl Default for HashHistory {
    fn default() -> Self {
        Self::new()
    }
}
